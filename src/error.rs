use thiserror::Error;

pub type VisualizeResult<T> = Result<T, VisualizeError>;

/// Everything that can stop (or degrade) one visualization attempt
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisualizeError {
    #[error("Error: File not found - {file}")]
    FileMissing { file: String },

    #[error("Error: Invalid JSON data in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Error: Missing expected data - '{field}' in {file}")]
    MissingField { file: String, field: String },

    #[error("Unknown station '{code}' is not in the station registry")]
    UnknownStation { code: String },
}

impl VisualizeError {
    pub fn file_missing(file: impl Into<String>) -> Self {
        Self::FileMissing { file: file.into() }
    }

    pub fn parse(file: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.to_string(),
        }
    }

    pub fn missing_field(file: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            file: file.into(),
            field: field.into(),
        }
    }

    pub fn unknown_station(code: impl Into<String>) -> Self {
        Self::UnknownStation { code: code.into() }
    }
}
