use thiserror::Error;

/// Errors raised while composing or rendering a wizard.
///
/// Both kinds are fatal to the render that produced them; propagation is the
/// caller's responsibility. Navigation guards never produce errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please make sure you're wrapping all the steps in a 'WizardProvider' component")]
    MissingProvider,

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

/// Invalid children handed to a `Steps` container
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("Steps should have at least a single child component")]
    Empty,

    #[error("Error at position \"{position}\". You should compose Steps using \"Step\" component")]
    NotAStep { position: usize },
}

impl CompositionError {
    /// 0-based position of the offending child, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            CompositionError::Empty => None,
            CompositionError::NotAStep { position } => Some(*position),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration")]
    Parse(#[from] serde_json::Error),

    #[error("No platform configuration directory available")]
    NoConfigDir,
}

/// Type alias for binary Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = WizardError::MissingProvider;
        assert!(err.to_string().contains("WizardProvider"));

        let err = WizardError::from(CompositionError::NotAStep { position: 2 });
        assert_eq!(
            err.to_string(),
            "Error at position \"2\". You should compose Steps using \"Step\" component"
        );
    }

    #[test]
    fn test_composition_position() {
        assert_eq!(CompositionError::Empty.position(), None);
        assert_eq!(CompositionError::NotAStep { position: 0 }.position(), Some(0));
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/wizard.json".to_string(),
            source: io_err,
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/wizard.json"
        );
    }
}
