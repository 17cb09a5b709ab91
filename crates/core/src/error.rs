#[derive(Debug, thiserror::Error)]
pub enum UdiError {
    #[error("character {0:?} has no Modulo-43 value")]
    InvalidSymbol(char),
    #[error("expected a Modulo-43 value between 0 and 42, got {0}")]
    IndexOutOfRange(usize),
    #[error("expected \"{field}\" to be {constraint}, got {value:?}")]
    Validation {
        field: &'static str,
        value: String,
        constraint: String,
    },
    #[error("\"{first}\" and \"{second}\" cannot be specified together")]
    MutualExclusion {
        first: &'static str,
        second: &'static str,
    },
    #[error("invalid length range [{min}, {max}]: bounds must be non-negative and min <= max")]
    InvalidRange { min: i64, max: i64 },

    #[error("failed to read config file: {0}")]
    ConfigRead(std::io::Error),
    #[error("invalid YAML config: {0}")]
    InvalidYaml(serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    InvalidJson(serde_json::Error),
    #[error("unsupported config format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedConfigFormat(String),
}

impl UdiError {
    pub(crate) fn validation(
        field: &'static str,
        value: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field,
            value: value.into(),
            constraint: constraint.into(),
        }
    }
}

impl From<hibc_types::TagError> for UdiError {
    fn from(err: hibc_types::TagError) -> Self {
        let (field, value) = match err {
            hibc_types::TagError::UnknownQuantityFormat(value) => ("quantity.format", value),
            hibc_types::TagError::UnknownDateFormat(value) => ("exp_date.format", value),
        };
        Self::validation(field, value, "a known HIBC format name")
    }
}

pub type UdiResult<T> = std::result::Result<T, UdiError>;
