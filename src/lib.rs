//! career-intake - intake API for a careers site
//!
//! This crate provides the submission backend behind the site's forms:
//! - Resume uploads (PDF/DOC/DOCX, measured but not stored)
//! - Developer applications with collision-free `DEV-<year>-<seq>` queue numbers
//! - Keyword-routed canned career advice for free-text queries
//! - redb embedded database for the append-only record tables

pub mod advisor;
pub mod api;
pub mod config;
pub mod credentials;
pub mod queue_number;
pub mod storage;
#[cfg(test)]
pub mod testutil;
pub mod validation;

use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
}
