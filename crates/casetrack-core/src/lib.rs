//! # casetrack-core
//!
//! Core types shared across all casetrack crates.
//!
//! This crate provides:
//! - Record structs for case-management resources (interrogations, interviews)
//!   and the collaborators they reference (cases, warrants, satkers, research)
//! - The follow-up status enum and entity kinds
//! - ID prefix constants
//! - Request payloads and response shapes used by the HTTP layer
//! - Date parsing for request fields and list filters
//! - Document URL prefixing for records stored on the file server

pub mod dates;
pub mod documents;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod requests;
pub mod responses;
