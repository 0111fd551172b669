use kennel_common::sex::{ParseSexError, Sex};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KennelError>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum KennelError {
    /// Both dogs share the same sex. Nothing was created or recorded.
    #[error("same-sex pairing is not permitted: '{first}' and '{second}' are both {sex}")]
    Mating {
        first: String,
        second: String,
        sex: Sex,
    },

    /// An attribute supplied at construction is outside its domain.
    #[error("invalid {attribute}: '{value}'")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },
}

impl KennelError {
    pub fn is_mating(&self) -> bool {
        matches!(self, KennelError::Mating { .. })
    }
}

impl From<ParseSexError> for KennelError {
    fn from(err: ParseSexError) -> Self {
        KennelError::InvalidAttribute {
            attribute: "sex",
            value: err.0,
        }
    }
}
