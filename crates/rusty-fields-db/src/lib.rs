//! # rusty-fields-db
//!
//! Choice fields whose options come from database rows.
//!
//! ```rust,ignore
//! use rusty_fields::Value;
//! use rusty_fields_db::{connect, ChoiceRow, ModelChoice, Select, SqlQueryset};
//!
//! #[derive(sqlx::FromRow)]
//! struct Category { id: i64, name: String }
//!
//! impl std::fmt::Display for Category {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str(&self.name)
//!     }
//! }
//!
//! impl ChoiceRow for Category {
//!     fn id(&self) -> i64 { self.id }
//! }
//!
//! let pool = connect("sqlite:app.db").await?;
//! let categories = SqlQueryset::<Category>::select(
//!     pool,
//!     Select::table("categories").columns(["id", "name"]).order_by("name"),
//! )?;
//!
//! let field = ModelChoice::new(categories);
//! let id = field.validate_or_error(&Value::from("3")).await?;
//! ```

pub mod database;
pub mod error;
pub mod model_choice;
pub mod queryset;

pub use database::{connect, detect_database_type, DatabaseType, Order, Select, SqlQueryset};
pub use error::{Error, Result};
pub use model_choice::ModelChoice;
pub use queryset::{ChoiceRow, Queryset};
