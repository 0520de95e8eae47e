use crate::core::naca::DEFAULT_POINT_COUNT;
use crate::core::pipeline::AirfoilSource;
use crate::core::ConfigProvider;
use crate::domain::model::Layout;
use crate::utils::error::{AirfoilError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Batch export file: shared `[export]` settings plus one `[[airfoils]]`
/// entry per airfoil.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub export: ExportConfig,
    #[serde(default)]
    pub airfoils: Vec<AirfoilEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub name: Option<String>,
    pub output_path: String,
    pub layout: Option<Layout>,
    pub point_count: Option<usize>,
    pub normalize_units: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirfoilEntry {
    pub naca: Option<String>,
    pub csv: Option<String>,
    pub layout: Option<Layout>,
    pub point_count: Option<usize>,
    pub normalize_units: Option<bool>,
}

/// Settings of one batch entry after applying `[export]` defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSettings {
    pub output_path: String,
    pub layout: Layout,
    pub point_count: usize,
    pub normalize_units: bool,
}

impl ConfigProvider for JobSettings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn layout(&self) -> Layout {
        self.layout
    }

    fn point_count(&self) -> usize {
        self.point_count
    }

    fn normalize_units(&self) -> bool {
        self.normalize_units
    }
}

impl AirfoilEntry {
    /// 每筆只能指定 naca 或 csv 其中之一
    pub fn source(&self, index: usize) -> Result<AirfoilSource> {
        match (&self.naca, &self.csv) {
            (Some(code), None) => Ok(AirfoilSource::Naca(code.clone())),
            (None, Some(csv)) => Ok(AirfoilSource::Csv(PathBuf::from(csv))),
            (Some(code), Some(csv)) => Err(AirfoilError::InvalidConfigValue {
                field: format!("airfoils[{}]", index),
                value: format!("naca = {}, csv = {}", code, csv),
                reason: "Specify either 'naca' or 'csv', not both".to_string(),
            }),
            (None, None) => Err(AirfoilError::MissingConfig {
                field: format!("airfoils[{}].naca or airfoils[{}].csv", index, index),
            }),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AirfoilError::InvalidConfigValue {
            field: "env_pattern".to_string(),
            value: String::new(),
            reason: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn export_name(&self) -> &str {
        self.export.name.as_deref().unwrap_or("airfoil-batch")
    }

    pub fn settings_for(&self, entry: &AirfoilEntry) -> JobSettings {
        JobSettings {
            output_path: self.export.output_path.clone(),
            layout: entry.layout.or(self.export.layout).unwrap_or_default(),
            point_count: entry
                .point_count
                .or(self.export.point_count)
                .unwrap_or(DEFAULT_POINT_COUNT),
            normalize_units: entry
                .normalize_units
                .or(self.export.normalize_units)
                .unwrap_or(false),
        }
    }

    /// Resolved `(source, settings)` pairs in file order.
    pub fn jobs(&self) -> Result<Vec<(AirfoilSource, JobSettings)>> {
        self.airfoils
            .iter()
            .enumerate()
            .map(|(index, entry)| Ok((entry.source(index)?, self.settings_for(entry))))
            .collect()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("export.output_path", &self.export.output_path)?;

        if let Some(name) = &self.export.name {
            validation::validate_non_empty_string("export.name", name)?;
        }

        if self.airfoils.is_empty() {
            return Err(AirfoilError::MissingConfig {
                field: "airfoils".to_string(),
            });
        }

        // 同一來源會產生同一個檔名，第二筆會覆蓋第一筆
        let mut seen = HashSet::new();
        for (index, (source, settings)) in self.jobs()?.into_iter().enumerate() {
            validation::validate_positive_number("point_count", settings.point_count, 2)?;
            if let AirfoilSource::Csv(path) = &source {
                validation::validate_path("airfoils.csv", &path.to_string_lossy())?;
            }
            if !seen.insert(source.clone()) {
                return Err(AirfoilError::InvalidConfigValue {
                    field: format!("airfoils[{}]", index),
                    value: match source {
                        AirfoilSource::Naca(code) => code,
                        AirfoilSource::Csv(path) => path.display().to_string(),
                    },
                    reason: "Airfoil is listed twice and would overwrite its own output file".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
