//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the prediction tabs and page chrome while reading/writing
//! shared state from Leptos context providers.

pub mod explorer;
pub mod header;
pub mod login_required;
pub mod predict_price;
pub mod recommendations;
