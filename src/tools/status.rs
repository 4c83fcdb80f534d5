//! Status Tool
//!
//! Runtime status information about the calculator service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::db::{migrations, Database};
use crate::models::SavedRecord;

/// Runtime status of the service
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Where saved records go ("sqlite" or "http")
    pub sink: &'static str,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub schema_version: Option<i32>,
    pub saved_records: Option<i64>,

    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Collects runtime information
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    sink: &'static str,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf, sink: &'static str) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            sink,
        }
    }

    pub fn get_status(&self, database: &Database) -> ServiceStatus {
        let build_info = BuildInfo::current();

        let database_size_bytes = std::fs::metadata(&self.database_path)
            .ok()
            .map(|m| m.len());

        // Left empty when the database can't be read
        let (schema_version, saved_records) = database
            .with_conn(|conn| {
                let version = migrations::get_schema_version(conn)?;
                let count = SavedRecord::count(conn)?;
                Ok((version, count))
            })
            .map(|(v, c)| (Some(v), Some(c)))
            .unwrap_or_else(|e| {
                tracing::warn!("Status could not read database: {}", e);
                (None, None)
            });

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ServiceStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            sink: self.sink,
            database_path: self.database_path.display().to_string(),
            database_size_bytes,
            schema_version,
            saved_records,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_database_figures() {
        let database = Database::open_in_memory().unwrap();
        database.with_conn(migrations::run_migrations).unwrap();

        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/caloric.db"), "sqlite");
        let status = tracker.get_status(&database);

        assert_eq!(status.sink, "sqlite");
        assert_eq!(status.schema_version, Some(1));
        assert_eq!(status.saved_records, Some(0));
        assert_eq!(status.database_size_bytes, None);
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_status_survives_missing_schema() {
        let database = Database::open_in_memory().unwrap();
        let tracker = StatusTracker::new(PathBuf::from("/nonexistent/caloric.db"), "http");
        let status = tracker.get_status(&database);

        assert_eq!(status.saved_records, None);
        assert_eq!(status.sink, "http");
    }
}
