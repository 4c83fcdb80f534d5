//! User record model
//!
//! The record submitted to a persistence sink after a calculation: the raw
//! form inputs plus the computed caloric needs.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// Form inputs plus the computed result, as sent to the save endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub name: String,
    pub gender: String,
    pub age: i64,
    pub height: i64,
    pub weight: i64,
    pub activity_level: String,
    pub goal: String,
    /// Two-decimal string, e.g. "2042.21"
    pub caloric_needs: String,
}

/// A record that has been written to the local database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: i64,
    #[serde(flatten)]
    pub record: UserRecord,
    pub created_at: String,
}

impl SavedRecord {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            record: UserRecord {
                name: row.get("name")?,
                gender: row.get("gender")?,
                age: row.get("age")?,
                height: row.get("height")?,
                weight: row.get("weight")?,
                activity_level: row.get("activity_level")?,
                goal: row.get("goal")?,
                caloric_needs: row.get("caloric_needs")?,
            },
            created_at: row.get("created_at")?,
        })
    }

    /// Insert a new record
    pub fn create(conn: &Connection, data: &UserRecord) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO user_records (name, gender, age, height, weight, activity_level, goal, caloric_needs)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                data.name,
                data.gender,
                data.age,
                data.height,
                data.weight,
                data.activity_level,
                data.goal,
                data.caloric_needs,
            ],
        )?;

        let id = conn.last_insert_rowid();
        Self::get_by_id(conn, id)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    pub fn get_by_id(conn: &Connection, id: i64) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM user_records WHERE id = ?1")?;

        let result = stmt.query_row([id], Self::from_row);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Most recent records first
    pub fn list_recent(conn: &Connection, limit: i64) -> DbResult<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT * FROM user_records ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;
        let records = stmt
            .query_map([limit], Self::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    pub fn count(conn: &Connection) -> DbResult<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM user_records", [], |row| row.get(0))?;
        Ok(count)
    }
}
