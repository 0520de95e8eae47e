use crate::domain::model::{AirfoilDocument, AirfoilProfile, Layout};
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn output_path(&self) -> &str;
    fn layout(&self) -> Layout;
    fn point_count(&self) -> usize;
    fn normalize_units(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<AirfoilProfile>;
    fn transform(&self, profile: AirfoilProfile) -> Result<AirfoilDocument>;
    fn load(&self, document: &AirfoilDocument) -> Result<String>;
}
