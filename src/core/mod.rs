pub mod csv_table;
pub mod export;
pub mod formatter;
pub mod naca;
pub mod pipeline;

pub use crate::domain::model::{AirfoilDocument, AirfoilProfile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
