pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    export::{BatchExport, ExportEngine, ExportReport},
    formatter::format,
    naca::generate,
    pipeline::{AirfoilPipeline, AirfoilSource},
};
pub use crate::domain::model::{AirfoilDocument, AirfoilName, CoordinateTable, Layout, Point};
pub use crate::utils::error::{AirfoilError, Result};
