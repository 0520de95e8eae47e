use crate::core::Storage;
use crate::utils::error::{AirfoilError, Result};
use std::fs;
use std::path::{Component, Path};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        // 只接受單一檔名，不允許跳出 base_path
        let mut components = Path::new(path).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(AirfoilError::InvalidConfigValue {
                    field: "file_name".to_string(),
                    value: path.to_string(),
                    reason: "Output file name must not contain a path".to_string(),
                })
            }
        }

        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
