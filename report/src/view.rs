//! Rendered report output.

use std::fmt;

use serde::Serialize;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// One checklist line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub checked: bool,
    /// Stands in for an empty checklist; neither checked nor unchecked.
    pub placeholder: bool,
}

impl ReportEntry {
    #[must_use]
    pub fn item(label: String, checked: bool) -> Self {
        Self {
            label,
            checked,
            placeholder: false,
        }
    }

    #[must_use]
    pub fn placeholder(label: &str) -> Self {
        Self {
            label: label.to_owned(),
            checked: false,
            placeholder: true,
        }
    }
}

/// Content of a single output slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SlotContent {
    Text(String),
    List(Vec<ReportEntry>),
    Rows(Vec<Vec<String>>),
}

/// Report slots in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    slots: Vec<(String, SlotContent)>,
}

impl RenderedView {
    pub(crate) fn push(&mut self, slot: &str, content: SlotContent) {
        self.slots.push((slot.to_owned(), content));
    }

    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&SlotContent> {
        self.slots.iter().find(|(slot, _)| slot == name).map(|(_, content)| content)
    }

    /// Text of a text slot.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.slot(name)? {
            SlotContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Entries of a checklist slot.
    #[must_use]
    pub fn list(&self, name: &str) -> Option<&[ReportEntry]> {
        match self.slot(name)? {
            SlotContent::List(entries) => Some(entries),
            _ => None,
        }
    }

    /// Rows of a table slot.
    #[must_use]
    pub fn rows(&self, name: &str) -> Option<&[Vec<String>]> {
        match self.slot(name)? {
            SlotContent::Rows(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SlotContent)> {
        self.slots.iter().map(|(slot, content)| (slot.as_str(), content))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Plain-text rendering, one `[slot]` header per slot.
impl fmt::Display for RenderedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (slot, content)) in self.slots.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{slot}]")?;
            match content {
                SlotContent::Text(text) => writeln!(f, "{text}")?,
                SlotContent::List(entries) => {
                    for entry in entries {
                        let mark = match (entry.placeholder, entry.checked) {
                            (true, _) => "-",
                            (false, true) => "[x]",
                            (false, false) => "[ ]",
                        };
                        writeln!(f, "{mark} {}", entry.label)?;
                    }
                }
                SlotContent::Rows(rows) => {
                    for row in rows {
                        writeln!(f, "{}", row.join(" | "))?;
                    }
                }
            }
        }
        Ok(())
    }
}
