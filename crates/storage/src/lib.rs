#![forbid(unsafe_code)]

pub mod bank;
pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, QuestionRepository, Storage, StorageError};
