//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and storage decisions to `util::form_actions`.

pub mod evaluation;
pub mod timeline;
