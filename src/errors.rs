use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("invalid parameter `{field}`: {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        LoanError::InvalidParameter {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
