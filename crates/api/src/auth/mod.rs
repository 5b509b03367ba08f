//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation (and generation, for tooling
//!   and tests). Login and session management live outside this service.

pub mod jwt;
