use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputError;
use crate::pipeline::ScoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),

    #[error("failed to write reports to {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render scores: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
