pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::{CliConfig, Command};

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::naca::DEFAULT_POINT_COUNT;
    use crate::core::pipeline::AirfoilSource;
    use crate::core::ConfigProvider;
    use crate::domain::model::Layout;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "airfoil-points")]
    #[command(about = "Turn NACA codes or coordinate CSV files into CAD-importable point clouds")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        #[arg(long, value_enum, default_value_t = Layout::Standard, global = true)]
        pub layout: Layout,

        #[arg(long, global = true, help = "Shorthand for --layout solidworks")]
        pub solidworks: bool,

        #[arg(long, default_value_t = DEFAULT_POINT_COUNT, global = true, help = "Points per surface")]
        pub points: usize,

        #[arg(long, default_value = "./output", global = true)]
        pub output_path: String,

        #[arg(long, global = true, help = "Rescale mm data to chord fractions")]
        pub normalize_units: bool,

        #[arg(long, global = true, help = "Write the document to stdout instead of a file")]
        pub print: bool,

        #[arg(long, global = true, help = "Print the JSON response document")]
        pub json: bool,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Generate a NACA 4-digit airfoil
        Naca { code: String },
        /// Convert an uploaded coordinate CSV
        Convert { csv_file: PathBuf },
    }

    impl CliConfig {
        pub fn source(&self) -> AirfoilSource {
            match &self.command {
                Command::Naca { code } => AirfoilSource::Naca(code.clone()),
                Command::Convert { csv_file } => AirfoilSource::Csv(csv_file.clone()),
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn layout(&self) -> Layout {
            if self.solidworks {
                Layout::SolidWorks
            } else {
                self.layout
            }
        }

        fn point_count(&self) -> usize {
            self.points
        }

        fn normalize_units(&self) -> bool {
            self.normalize_units
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_positive_number("points", self.points, 2)?;
            if !self.print {
                validation::validate_path("output_path", &self.output_path)?;
            }
            if let Command::Convert { csv_file } = &self.command {
                validation::validate_file_extension(
                    "csv_file",
                    &csv_file.to_string_lossy(),
                    &["csv", "txt"],
                )?;
            }
            Ok(())
        }
    }

}
