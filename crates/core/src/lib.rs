//! Core library for Taskboard
//!
//! This crate contains the task domain and its persistence:
//! - Task model and the done-flag parsing rule
//! - The `TaskRepository` storage contract
//! - A SQLite-backed repository

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
