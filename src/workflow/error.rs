use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectionError {
    /// A selection step had an empty candidate list to offer.
    #[error("No {what} available for {scope}")]
    InputUnavailable { what: &'static str, scope: String },

    /// The user backed out of a picker; the app treats this as a quit
    /// request, not a failure.
    #[error("Selection cancelled")]
    Cancelled,

    #[error("Prompt failed")]
    Prompt(#[from] dialoguer::Error),
}
