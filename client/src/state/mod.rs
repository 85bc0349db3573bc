//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The questionnaire definition, the editable form model and user notices are
//! kept apart so pages can depend on small focused models.

pub mod form;
pub mod notice;
pub mod questionnaire;
