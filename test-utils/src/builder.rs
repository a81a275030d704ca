use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Module, Topic};
///
/// let test = TestBuilder::new()
///     .with_table(Module)
///     .with_table(Topic)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and session tables needed to authenticate a request.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(UserSession)
    }

    /// Adds every table the catalog endpoints read from.
    ///
    /// Includes the auth tables, the module → topic → chapter hierarchy and the
    /// enrollment and study group tables used for derived counts.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_catalog_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_catalog_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Module)
            .with_table(Topic)
            .with_table(Chapter)
            .with_table(UserModule)
            .with_table(StudyGroup)
            .with_table(StudyGroupMember)
    }

    /// Adds every table the notification endpoints read from.
    ///
    /// Includes the auth tables, study groups with their memberships (for group
    /// broadcast), and the notification table itself.
    pub fn with_notification_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Module)
            .with_table(StudyGroup)
            .with_table(StudyGroupMember)
            .with_table(Notification)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_catalog_tables().with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
