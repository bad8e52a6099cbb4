//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: identifier of the model a role is bound to
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
