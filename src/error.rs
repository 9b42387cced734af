use thiserror::Error;

/// Fatal configuration problems, reported when a carousel is constructed or reconfigured.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("one of `content`, `contentId` or `contentClass` must be specified")]
    MissingLocator,

    #[error("breakpoint #{index} must declare exactly one of `maxMedia`, `minMedia` or `respMedia` (found {found})")]
    Breakpoint { index: usize, found: usize },

    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
