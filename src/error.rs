use thiserror::Error;

pub type UtilCssResult<T> = Result<T, UtilCssError>;

/// Errors raised at the fallible edges of the compiler: theme loading,
/// component-fragment loading and the command line.
///
/// CSS generation itself never fails; unknown classes are dropped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilCssError {
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Theme parse error: {0}")]
    ThemeParse(String),

    #[error("Invalid theme value for '{category}.{key}': {reason}")]
    InvalidThemeValue {
        category: String,
        key: String,
        reason: String,
    },

    #[error("Invalid component directory '{path}': {reason}")]
    ComponentDir { path: String, reason: String },

    #[error("Usage error: {0}")]
    Usage(String),
}

impl UtilCssError {
    pub(crate) fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        UtilCssError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for UtilCssError {
    fn from(err: serde_yaml::Error) -> Self {
        UtilCssError::ThemeParse(err.to_string())
    }
}
