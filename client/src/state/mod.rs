//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `intent`, `navigation` and `auth_resume` carry a gated user action across
//! a sign-in detour; `session` owns the stored tokens and `prediction` the
//! per-tab view state. None of these touch the DOM, so they test natively.

pub mod auth_resume;
pub mod intent;
pub mod navigation;
pub mod prediction;
pub mod session;
