//! Caloric Needs Calculator
//!
//! An MCP server for estimating daily caloric needs.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use caloric_needs::build_info;
use caloric_needs::config::{Config, SinkConfig};
use caloric_needs::db;
use caloric_needs::mcp::CaloricService;
use caloric_needs::persistence::{HttpSink, RecordSink, SqliteSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays free for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("caloric_needs=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env();
    let db_path = config.database_path.clone();
    eprintln!("Database path: {}", db_path.display());

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    eprintln!("Initializing database...");
    let database = db::Database::new(&db_path)?;

    database.with_conn(|conn| {
        if db::migrations::needs_migration(conn)? {
            tracing::info!("Applying database migrations");
        }
        db::migrations::run_migrations(conn)?;
        let version = db::migrations::get_schema_version(conn)?;
        eprintln!("Database schema version: {}", version);
        Ok(())
    })?;

    let sink: Arc<dyn RecordSink> = match config.sink {
        SinkConfig::Sqlite => Arc::new(SqliteSink::new(database.clone())),
        SinkConfig::Http { url } => {
            tracing::info!("Saving records to remote endpoint {}", url);
            Arc::new(HttpSink::new(url))
        }
    };

    let service = CaloricService::new(db_path, database, sink);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
