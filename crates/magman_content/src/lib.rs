//! Content domain core for magman.
//! Owns the article/comment records and their value semantics.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LoggingResult};
pub use model::article::{Article, ArticleId};
pub use model::comment::{Comment, CommentId};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
