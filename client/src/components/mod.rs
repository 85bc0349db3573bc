//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form inputs, report slots and notices while reading and
//! writing shared state from Leptos context providers.

pub mod field_input;
pub mod notice_banner;
pub mod report_slot;
