use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirfoilError {
    #[error("Invalid NACA code '{code}': expected exactly 4 digits")]
    InvalidCode { code: String },

    #[error("Coordinate table is empty, nothing to render")]
    EmptyTable,

    #[error("Malformed coordinate row at line {line}: '{content}'")]
    MalformedRow { line: u64, content: String },

    #[error("Invalid point count {count}: at least 2 points per surface are required")]
    InvalidPointCount { count: usize },

    #[error("Unknown layout '{value}': expected 'standard' or 'solidworks'")]
    UnknownLayout { value: String },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AirfoilError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AirfoilError::InvalidCode { .. }
            | AirfoilError::InvalidPointCount { .. }
            | AirfoilError::UnknownLayout { .. } => ErrorCategory::Input,
            AirfoilError::EmptyTable
            | AirfoilError::MalformedRow { .. }
            | AirfoilError::Csv(_) => ErrorCategory::Data,
            AirfoilError::Toml(_)
            | AirfoilError::InvalidConfigValue { .. }
            | AirfoilError::MissingConfig { .. } => ErrorCategory::Configuration,
            AirfoilError::Io(_) | AirfoilError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AirfoilError::InvalidCode { .. } => {
                "Use a 4-digit NACA designation such as 2412 or 0012".to_string()
            }
            AirfoilError::EmptyTable => {
                "Check that the input contains an 'Airfoil surface' section or x,y rows".to_string()
            }
            AirfoilError::MalformedRow { line, .. } => {
                format!("Fix line {} so it holds two numeric values", line)
            }
            AirfoilError::InvalidPointCount { .. } => {
                "Pass --points with a value of 2 or more".to_string()
            }
            AirfoilError::UnknownLayout { .. } => {
                "Use --layout standard or --layout solidworks".to_string()
            }
            AirfoilError::Csv(_) => "Make sure the file is valid comma-separated text".to_string(),
            AirfoilError::Io(_) => "Check that the paths exist and are writable".to_string(),
            AirfoilError::Serialization(_) => "Report this as a bug".to_string(),
            AirfoilError::Toml(_) => "Check the TOML syntax of the batch file".to_string(),
            AirfoilError::InvalidConfigValue { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            AirfoilError::MissingConfig { field } => format!("Add '{}' to the configuration", field),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AirfoilError::InvalidCode { code } => {
                format!("'{}' is not a NACA 4-digit code. Must be 4 digits.", code)
            }
            AirfoilError::EmptyTable => "No valid coordinate data found".to_string(),
            AirfoilError::MalformedRow { line, content } => {
                format!("Line {} cannot be read as coordinates: {}", line, content)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AirfoilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let err = AirfoilError::InvalidCode {
            code: "abcd".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("abcd"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = AirfoilError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_malformed_row_suggestion_names_line() {
        let err = AirfoilError::MalformedRow {
            line: 7,
            content: "0.5,abc".to_string(),
        };
        assert!(err.recovery_suggestion().contains('7'));
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
