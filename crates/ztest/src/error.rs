//! Suite error types

use thiserror::Error;

pub type SuiteResult<T> = Result<T, SuiteError>;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Test case '{case}' is already registered in suite '{suite}'")]
    DuplicateCase { suite: String, case: String },

    #[error("Failed to write test report: {0}")]
    Io(#[from] std::io::Error),
}

impl SuiteError {
    /// Create a duplicate registration error
    pub fn duplicate(suite: impl Into<String>, case: impl Into<String>) -> Self {
        Self::DuplicateCase {
            suite: suite.into(),
            case: case.into(),
        }
    }
}
