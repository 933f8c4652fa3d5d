use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Trap already disarmed: {0}")]
    TrapDisarmed(String),
}

impl DungeonError {
    /// Short name of the failure kind, used by the driver's error report
    pub fn kind(&self) -> &'static str {
        match self {
            DungeonError::InvalidArgument(_) => "InvalidArgument",
            DungeonError::TrapDisarmed(_) => "TrapDisarmed",
        }
    }

    /// Multi-line failure report printed by the driver's top-level guard
    pub fn report(&self) -> String {
        format!(
            "A CRITICAL ERROR OCCURRED\nError Type: {}\nError Message: {}\n",
            self.kind(),
            self
        )
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DungeonError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DungeonError>;
