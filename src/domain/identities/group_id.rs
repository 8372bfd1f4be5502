use super::validation::validate_identifier;
use crate::domain::AppError;

/// A validated package group identifier.
///
/// Guarantees:
/// - Non-empty
/// - Contains only ASCII alphanumeric characters, `-`, or `_`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(String);

impl GroupId {
    /// Validate and create a new `GroupId`.
    pub fn new(id: &str) -> Result<Self, AppError> {
        if validate_identifier(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(AppError::InvalidGroupId(id.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for GroupId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
