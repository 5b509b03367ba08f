//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod book_repo;
pub mod order_repo;
pub mod reader_history_repo;
pub mod status_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepo;
pub use book_repo::BookRepo;
pub use order_repo::OrderRepo;
pub use reader_history_repo::ReaderHistoryRepo;
pub use status_repo::StatusRepo;
pub use user_repo::UserRepo;
