//! Error taxonomy for the watch pipeline.
//!
//! Fetch and parse failures are source-local and recovered by
//! skipping that source for the run. Notify and state failures are
//! surfaced to the caller, which decides what to persist.

/// Errors that can occur during a watch run.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// An HTTP fetch failed: network error, timeout, or non-2xx status.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Expected structural elements were absent from fetched content.
    #[error("parse error: {0}")]
    Parse(String),

    /// The SMS provider rejected a send.
    #[error("notify error: {0}")]
    Notify(String),

    /// The persisted seen set could not be read or written.
    #[error("state error: {0}")]
    State(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fetch() {
        let err = WatchError::Fetch("https://x/1: HTTP 503".into());
        assert_eq!(err.to_string(), "fetch error: https://x/1: HTTP 503");
    }

    #[test]
    fn display_state() {
        let err = WatchError::State("failed to write seen set".into());
        assert_eq!(err.to_string(), "state error: failed to write seen set");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WatchError>();
    }
}
