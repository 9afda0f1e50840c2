//! Repository methods, one module per record kind.
//!
//! Every module extends [`crate::service::CaseService`].

pub mod case;
pub mod interrogation;
pub mod interview;
pub mod research;
pub mod satker;
pub mod warrant;
