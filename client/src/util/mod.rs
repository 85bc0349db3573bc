//! Utility helpers shared across client pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, printing) from page
//! logic so the actions can be tested without a browser.

pub mod form_actions;
pub mod local_storage;
pub mod print;
