use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Per-test database handle.
///
/// Each context owns its own `sqlite::memory:` database, so tests never see each
/// other's rows. The connection is opened on first use.
#[derive(Default)]
pub struct TestContext {
    /// In-memory SQLite connection, `None` until `database()` opens it.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connection, opening the in-memory database if needed.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db.as_ref().ok_or(TestError::NotConnected)
    }

    /// Runs the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; tests rarely need it directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }
}
