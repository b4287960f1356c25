//! Test doubles for the database backend seams.

pub mod mock_database;

pub use mock_database::{contact_row, MockDatabase};
