//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! [`patch`] holds the deserializer for clearable patch fields.

pub mod assignment;
pub mod book;
pub mod order;
pub mod patch;
pub mod reader_history;
pub mod status;
pub mod user;
