//! Local SQLite sink

use async_trait::async_trait;

use super::{PersistenceError, RecordSink};
use crate::db::Database;
use crate::models::{SavedRecord, UserRecord};

/// Writes records to the `user_records` table
#[derive(Clone)]
pub struct SqliteSink {
    database: Database,
}

impl SqliteSink {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl RecordSink for SqliteSink {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn save(&self, record: &UserRecord) -> Result<Option<i64>, PersistenceError> {
        let database = self.database.clone();
        let record = record.clone();

        let saved = tokio::task::spawn_blocking(move || {
            database.with_conn(|conn| SavedRecord::create(conn, &record))
        })
        .await
        .map_err(|e| PersistenceError::Task(e.to_string()))??;

        Ok(Some(saved.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;
    use crate::persistence::tests::sample_record;

    #[tokio::test]
    async fn test_save_inserts_row() {
        let database = Database::open_in_memory().unwrap();
        database.with_conn(run_migrations).unwrap();

        let sink = SqliteSink::new(database.clone());
        let id = sink.save(&sample_record()).await.unwrap().unwrap();

        let saved = database
            .with_conn(|conn| SavedRecord::get_by_id(conn, id))
            .unwrap()
            .unwrap();
        assert_eq!(saved.record, sample_record());
    }

    #[tokio::test]
    async fn test_save_without_schema_fails() {
        let sink = SqliteSink::new(Database::open_in_memory().unwrap());
        let err = sink.save(&sample_record()).await.unwrap_err();
        assert!(matches!(err, PersistenceError::Database(_)));
    }
}
