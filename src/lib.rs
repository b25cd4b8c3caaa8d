//! facts - command-line client for a facts server
//!
//! Categories and facts live on a remote server behind a JSON REST
//! interface. This crate resolves fuzzy search terms to records,
//! synchronizes them through a generic envelope protocol, and captures
//! content through an external-editor round trip.
//!
//! ## Key concepts
//!
//! - **Envelope**: single records travel as `{ entity: { fields } }`.
//! - **Disambiguation**: a multi-match search can be narrowed to one
//!   record by typing its numeric id as the term.
//! - **AND/OR queries**: several terms combine by id-set intersection
//!   or union, output in first-seen order.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod remote;

pub use crate::config::Config;
pub use crate::core::category::Category;
pub use crate::core::fact::Fact;
pub use crate::core::record::{RestfulRecord, SearchOptions};
pub use crate::error::{Error, Result};
pub use crate::remote::RestClient;
