//! Domain rules for the médiathèque back-office.
//!
//! Pure functions and constants only: no database or HTTP dependencies, so
//! both the repository layer and the API layer can share them.

pub mod assignment;
pub mod error;
pub mod order;
pub mod pagination;
pub mod roles;
pub mod search;
pub mod status;
pub mod types;
