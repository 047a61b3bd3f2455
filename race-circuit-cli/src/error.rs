use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Season data could not be loaded
    #[error("{0}")]
    Catalog(#[from] race_circuit_catalog::CatalogError),

    /// A result summary given on the command line did not parse
    #[error("{0}")]
    Results(#[from] race_circuit_core::ResultParseError),

    /// A date given on the command line did not format
    #[error("{0}")]
    Date(#[from] race_circuit_core::DateError),

    /// Participant lookup failed
    #[error("No participant named '{0}'")]
    UnknownParticipant(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn unknown_participant(name: impl Into<String>) -> Self {
        Self::UnknownParticipant(name.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
