//! Caloric Needs MCP Server Implementation
//!
//! Exposes the calculator form and saved records as MCP tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::db::Database;
use crate::persistence::RecordSink;
use crate::tools::calculator::{self, FormInput};
use crate::tools::records;
use crate::tools::status::StatusTracker;

/// Caloric Needs MCP Service
#[derive(Clone)]
pub struct CaloricService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    sink: Arc<dyn RecordSink>,
    tool_router: ToolRouter<CaloricService>,
}

impl CaloricService {
    pub fn new(database_path: PathBuf, database: Database, sink: Arc<dyn RecordSink>) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path, sink.name()))),
            database,
            sink,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

/// A form field as sent by the client: text, or a bare JSON number
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateCaloricNeedsParams {
    /// Person's name
    pub name: Option<FieldValue>,
    /// "Male" or "Female"
    pub gender: Option<FieldValue>,
    /// Age in whole years
    pub age: Option<FieldValue>,
    /// Height in whole centimeters
    pub height: Option<FieldValue>,
    /// Weight in whole kilograms
    pub weight: Option<FieldValue>,
    /// "Sedentary", "Lightly active", "Moderately active", "Active" or "Very active"
    pub activity_level: Option<FieldValue>,
    /// "Weight gain", "Weight loss" or "Maintain weight and gain muscle"
    pub goal: Option<FieldValue>,
}

impl From<CalculateCaloricNeedsParams> for FormInput {
    fn from(p: CalculateCaloricNeedsParams) -> Self {
        Self {
            name: p.name.map(FieldValue::into_text),
            gender: p.gender.map(FieldValue::into_text),
            age: p.age.map(FieldValue::into_text),
            height: p.height.map(FieldValue::into_text),
            weight: p.weight.map(FieldValue::into_text),
            activity_level: p.activity_level.map(FieldValue::into_text),
            goal: p.goal.map(FieldValue::into_text),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSavedRecordsParams {
    /// Maximum records to return, newest first (default 20)
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

fn default_list_limit() -> i64 { 20 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetSavedRecordParams {
    /// Saved record ID
    pub id: i64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CaloricService {
    // --- Status ---

    #[tool(description = "Get the current status of the calculator service including build info, save destination, database status, and process information")]
    async fn caloric_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(&self.database);
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for calculating caloric needs. Call this before the first calculation or when unsure which values to send.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(calculator::CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "List the accepted option values for gender, activity level, and goal")]
    fn get_form_options(&self) -> Result<CallToolResult, McpError> {
        let options = calculator::get_form_options();
        let json = serde_json::to_string_pretty(&options).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Calculate estimated daily caloric needs (Harris-Benedict BMR x activity multiplier). All seven fields are required; missing fields are reported back and nothing is calculated. Successful results are saved automatically.")]
    fn calculate_caloric_needs(&self, Parameters(p): Parameters<CalculateCaloricNeedsParams>) -> Result<CallToolResult, McpError> {
        let result = calculator::calculate_caloric_needs(self.sink.clone(), &FormInput::from(p));
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Saved Records ---

    #[tool(description = "List saved calculations, newest first (local database only)")]
    fn list_saved_records(&self, Parameters(p): Parameters<ListSavedRecordsParams>) -> Result<CallToolResult, McpError> {
        let result = records::list_saved_records(&self.database, p.limit).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get a saved calculation by ID with all form inputs")]
    fn get_saved_record(&self, Parameters(p): Parameters<GetSavedRecordParams>) -> Result<CallToolResult, McpError> {
        let result = records::get_saved_record(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(record) => serde_json::to_string_pretty(&record),
            None => Ok(format!(r#"{{"error": "Record not found", "id": {}}}"#, p.id)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for CaloricService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "caloric_needs".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Caloric Needs Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Caloric Needs Calculator - Harris-Benedict daily calorie estimates. \
                 Call calculator_instructions first. \
                 Calculator: get_form_options, calculate_caloric_needs. \
                 Saved records: list_saved_records, get_saved_record. \
                 Status: caloric_status."
                    .into(),
            ),
        }
    }
}
