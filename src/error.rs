use crate::nws::error::NwsError;
use crate::workflow::error::SelectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZonecastError {
    #[error(transparent)]
    Nws(#[from] NwsError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Failed to write rendered forecast")]
    Render(#[from] std::io::Error),
}
