//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (arrival, carried-state pickup,
//! navigation) and delegates rendering details to `components`.

pub mod landing;
pub mod prediction;
pub mod sign_in;
pub mod sign_up;
