use crate::core::{AirfoilDocument, Pipeline};
use crate::utils::error::{AirfoilError, Result};
use std::collections::HashSet;

/// Result of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub document: AirfoilDocument,
    pub output_path: String,
}

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and transform only; nothing is written.
    pub fn render(&self) -> Result<AirfoilDocument> {
        let profile = self.pipeline.extract()?;
        tracing::info!("📐 {}: {} points", profile.name.label(), profile.table.len());

        let document = self.pipeline.transform(profile)?;
        tracing::debug!("Rendered {} layout ({} bytes)", document.format, document.coordinates.len());
        Ok(document)
    }

    pub fn run(&self) -> Result<ExportReport> {
        let document = self.render()?;
        self.write(document)
    }

    /// Load step for an already rendered document.
    pub fn write(&self, document: AirfoilDocument) -> Result<ExportReport> {
        let output_path = self.pipeline.load(&document)?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(ExportReport {
            document,
            output_path,
        })
    }
}

/// Runs several exports and refuses to write the same output file twice.
#[derive(Debug, Default)]
pub struct BatchExport {
    written: HashSet<String>,
}

impl BatchExport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export<P: Pipeline>(&mut self, engine: &ExportEngine<P>) -> Result<ExportReport> {
        let document = engine.render()?;
        if self.written.contains(&document.file_name) {
            return Err(AirfoilError::InvalidConfigValue {
                field: "airfoils".to_string(),
                value: document.file_name,
                reason: "Output file was already written by an earlier entry of this batch".to_string(),
            });
        }

        let file_name = document.file_name.clone();
        let report = engine.write(document)?;
        self.written.insert(file_name);
        Ok(report)
    }
}
