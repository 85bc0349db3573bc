//! Evaluation report rendering for saved timeline records.
//!
//! This crate is UI-framework agnostic: it turns a [`record::Record`] into
//! named slots of text, rows and checklists that the client renders as HTML
//! and the CLI prints as plain text.

mod layout;
mod render;
mod timeline;
mod view;

pub use layout::{ChecklistItem, ConditionPart, ReportSpec, SlotKind, SlotSpec};
pub use render::{MISSING_DETAIL, MISSING_LABEL_DETAIL, MISSING_TEXT, NO_CHECKED_ITEMS, render_report};
pub use timeline::{CONTACT_ROWS, FAMILY_ROWS, TIMELINE_STEPS, timeline_report};
pub use view::{RenderedView, ReportEntry, SlotContent};
