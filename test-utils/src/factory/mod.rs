//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let module = factory::module::create_module(&db).await?;
//!
//!     // Create an authenticated caller
//!     let (user, session) = factory::helpers::create_authenticated_user(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let module = factory::module::ModuleFactory::new(&db)
//!     .module_code("COMP1000")
//!     .university("UCL")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `user_session` - Create bearer token sessions
//! - `module` - Create module entities
//! - `topic` - Create topic entities
//! - `chapter` - Create chapter entities
//! - `user_module` - Enroll users in modules
//! - `study_group` - Create study groups and memberships
//! - `notification` - Create notification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod chapter;
pub mod helpers;
pub mod module;
pub mod notification;
pub mod study_group;
pub mod topic;
pub mod user;
pub mod user_module;
pub mod user_session;

pub use chapter::create_chapter;
pub use module::create_module;
pub use notification::create_notification;
pub use study_group::{add_member, create_study_group};
pub use topic::create_topic;
pub use user::{create_admin, create_user};
pub use user_module::enroll;
pub use user_session::create_session;
