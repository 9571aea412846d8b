//! Core use-case services.
//!
//! # Responsibility
//! - Compose stores, forms and validators into per-feature use cases.
//! - Keep the CLI and any future UI decoupled from store internals.

pub mod dashboard;
pub mod organizer;
