//! IRIS: Incident Reporting & Intake System
//!
//! A CLI for recording workplace safety incidents as plain text files under
//! git version control, and classifying them against a configurable
//! regulatory rule set.

pub mod cli;
pub mod core;
pub mod entities;
pub mod schema;
pub mod yaml;
