use thiserror::Error;

/// Validated name of the quiz part picked before the questions start.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartName(String);

impl PartName {
    /// # Errors
    ///
    /// Returns `PartError::EmptyName` if the name is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, PartError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PartError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PartError {
    #[error("part name cannot be empty")]
    EmptyName,
}
