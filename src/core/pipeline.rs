use crate::core::{csv_table, formatter, naca};
use crate::core::{AirfoilDocument, AirfoilProfile, ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where the coordinates of one export come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AirfoilSource {
    Naca(String),
    Csv(PathBuf),
}

pub struct AirfoilPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: AirfoilSource,
}

impl<S: Storage, C: ConfigProvider> AirfoilPipeline<S, C> {
    pub fn new(storage: S, config: C, source: AirfoilSource) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for AirfoilPipeline<S, C> {
    fn extract(&self) -> Result<AirfoilProfile> {
        match &self.source {
            AirfoilSource::Naca(code) => {
                let point_count = self.config.point_count();
                tracing::debug!("Generating NACA {} with {} points per surface", code, point_count);
                let (table, name) = naca::generate(code, point_count)?;
                Ok(AirfoilProfile::new(name, table))
            }
            AirfoilSource::Csv(path) => {
                tracing::debug!("Reading coordinate table from {}", path.display());
                let profile = csv_table::parse_csv_file(path, self.config.normalize_units())?;
                tracing::debug!(
                    "Parsed {} rows and {} metadata entries",
                    profile.table.len(),
                    profile.metadata.len()
                );
                Ok(profile)
            }
        }
    }

    fn transform(&self, profile: AirfoilProfile) -> Result<AirfoilDocument> {
        let layout = self.config.layout();
        let coordinates = formatter::format(&profile.table, &profile.name, layout)?;

        Ok(AirfoilDocument {
            coordinates,
            name: profile.name.label().to_string(),
            format: layout,
            point_count: profile.table.len(),
            file_name: profile.name.suggested_file_name(),
            metadata: profile.metadata,
        })
    }

    fn load(&self, document: &AirfoilDocument) -> Result<String> {
        let mut data = document.coordinates.clone().into_bytes();
        data.push(b'\n');

        tracing::debug!("Writing {} ({} bytes) to storage", document.file_name, data.len());
        self.storage.write_file(&document.file_name, &data)?;

        let output_path = Path::new(self.config.output_path()).join(&document.file_name);
        Ok(output_path.display().to_string())
    }
}
