//! Database library providing the MongoDB connector and utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017/crud_db").await?;
//! let db = client.database("crud_db");
//! let collection = db.collection::<Document>("users");
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;
