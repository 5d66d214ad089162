use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown aspect ratio '{0}' (expected 9:16 or 16:9)")]
    UnknownAspectRatio(String),
    #[error("unknown platform '{0}' (expected auto, play_store or app_store)")]
    UnknownPlatform(String),
    #[error("invalid resolution '{0}' (expected WIDTHxHEIGHT)")]
    InvalidResolution(String),
}
