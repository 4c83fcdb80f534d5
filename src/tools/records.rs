//! Saved Record MCP Tools
//!
//! Read access to records written by the local SQLite sink.

use serde::Serialize;

use crate::db::Database;
use crate::models::SavedRecord;

/// Record summary for listing
#[derive(Debug, Serialize)]
pub struct RecordSummary {
    pub id: i64,
    pub name: String,
    pub caloric_needs: String,
    pub activity_level: String,
    pub goal: String,
    pub created_at: String,
}

impl From<&SavedRecord> for RecordSummary {
    fn from(saved: &SavedRecord) -> Self {
        Self {
            id: saved.id,
            name: saved.record.name.clone(),
            caloric_needs: saved.record.caloric_needs.clone(),
            activity_level: saved.record.activity_level.clone(),
            goal: saved.record.goal.clone(),
            created_at: saved.created_at.clone(),
        }
    }
}

/// Response for list_saved_records
#[derive(Debug, Serialize)]
pub struct ListRecordsResponse {
    pub records: Vec<RecordSummary>,
    pub total: i64,
}

pub fn list_saved_records(db: &Database, limit: i64) -> Result<ListRecordsResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let records = SavedRecord::list_recent(&conn, limit.max(0))
        .map_err(|e| format!("Failed to list records: {}", e))?;
    let total = SavedRecord::count(&conn).map_err(|e| format!("Failed to count records: {}", e))?;

    Ok(ListRecordsResponse {
        records: records.iter().map(RecordSummary::from).collect(),
        total,
    })
}

pub fn get_saved_record(db: &Database, id: i64) -> Result<Option<SavedRecord>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    SavedRecord::get_by_id(&conn, id).map_err(|e| format!("Failed to get record: {}", e))
}
