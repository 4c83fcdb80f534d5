//! Record persistence
//!
//! Sinks that accept a [`UserRecord`] after a successful calculation, and the
//! fire-and-forget dispatch used by the form. Save failures are logged and
//! never reach the user; nothing is retried.

mod http;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::db::DbError;
use crate::models::UserRecord;

pub use http::HttpSink;
pub use sqlite::SqliteSink;

/// Save failure
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Save endpoint returned status {0}")]
    Status(u16),

    #[error("Save task failed: {0}")]
    Task(String),
}

/// Destination for saved records
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Persist one record. Returns the stored id when the sink assigns one.
    async fn save(&self, record: &UserRecord) -> Result<Option<i64>, PersistenceError>;
}

/// Spawn a save without waiting for it.
///
/// The outcome is only logged. The handle is returned so shutdown paths and
/// tests can wait for the task; dropping it does not cancel the save.
pub fn dispatch_save(sink: Arc<dyn RecordSink>, record: UserRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        match sink.save(&record).await {
            Ok(Some(id)) => tracing::info!(
                "Record saved successfully via {} sink (id {}) for '{}'",
                sink.name(),
                id,
                record.name
            ),
            Ok(None) => tracing::info!(
                "Record saved successfully via {} sink for '{}'",
                sink.name(),
                record.name
            ),
            Err(e) => tracing::error!(
                "Error saving record via {} sink for '{}': {}",
                sink.name(),
                record.name,
                e
            ),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    pub(crate) fn sample_record() -> UserRecord {
        UserRecord {
            name: "Grace".to_string(),
            gender: "Female".to_string(),
            age: 25,
            height: 165,
            weight: 60,
            activity_level: "Moderately active".to_string(),
            goal: "Weight gain".to_string(),
            caloric_needs: "2196.71".to_string(),
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        saved: Mutex<Vec<UserRecord>>,
    }

    #[async_trait]
    impl RecordSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        async fn save(&self, record: &UserRecord) -> Result<Option<i64>, PersistenceError> {
            self.saved.lock().unwrap().push(record.clone());
            Ok(None)
        }
    }

    struct FailingSink;

    #[async_trait]
    impl RecordSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn save(&self, _record: &UserRecord) -> Result<Option<i64>, PersistenceError> {
            Err(PersistenceError::Status(503))
        }
    }

    #[tokio::test]
    async fn test_dispatch_save_delivers_record() {
        let sink = Arc::new(RecordingSink::default());
        dispatch_save(sink.clone(), sample_record()).await.unwrap();

        let saved = sink.saved.lock().unwrap();
        assert_eq!(saved.as_slice(), &[sample_record()]);
    }

    #[tokio::test]
    async fn test_dispatch_save_swallows_failures() {
        let handle = dispatch_save(Arc::new(FailingSink), sample_record());
        assert!(handle.await.is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PersistenceError::Status(500).to_string(),
            "Save endpoint returned status 500"
        );
    }
}
