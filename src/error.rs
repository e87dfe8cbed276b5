use thiserror::Error;

use crate::core::{ItemId, ItemKind};

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("degenerate year range: start={start}, end={end}, scale={scale}")]
    DegenerateRange { start: i64, end: i64, scale: i64 },

    #[error("{kind} `{id}` not found")]
    NotFound { kind: ItemKind, id: ItemId },

    #[error("invalid {kind} fields: `{field}` is missing or invalid")]
    InvalidItemFields { kind: ItemKind, field: &'static str },

    #[error("another pointer interaction is already active")]
    InteractionInProgress,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config document: {0}")]
    Config(String),
}
