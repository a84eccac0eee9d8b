//! Networking modules for the prediction API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls against same-origin paths that the host server
//! forwards upstream; `types` defines the wire schema.

pub mod api;
pub mod types;
