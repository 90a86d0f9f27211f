mod ai_queries;
mod applications;
pub mod db;
pub mod models;
mod resumes;
mod tables;
mod users;

pub use db::{Database, DatabaseError};
pub use tables::*;
