//! Declarative description of a report: which record keys feed which slot.

/// Ordered list of output slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportSpec {
    pub slots: Vec<SlotSpec>,
}

/// One named output target and how it is computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotSpec {
    pub slot: &'static str,
    pub kind: SlotKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotKind {
    /// The record value at `key`, or `---`.
    Text { key: &'static str },
    /// Present/absent phrases driven by flags, joined with ` / `.
    Conditional { parts: Vec<ConditionPart> },
    /// Numbered rows `1..=rows`. Column keys are prefixes suffixed with the
    /// row number; a row is emitted only if its first column is filled.
    Table {
        rows: usize,
        columns: Vec<&'static str>,
    },
    /// Items marked checked or not by their flag. If none is checked the
    /// list is replaced by the placeholder alone.
    Checklist {
        items: Vec<ChecklistItem>,
        placeholder: &'static str,
    },
}

/// A phrase shown when `flag` is set, optionally followed by `(detail)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionPart {
    pub flag: &'static str,
    pub present: &'static str,
    pub detail: Option<&'static str>,
    /// Phrase shown when `flag` is not set. `None` omits the part.
    pub absent: Option<&'static str>,
}

impl ConditionPart {
    #[must_use]
    pub fn new(flag: &'static str, present: &'static str) -> Self {
        Self {
            flag,
            present,
            detail: None,
            absent: None,
        }
    }

    #[must_use]
    pub fn detail(mut self, key: &'static str) -> Self {
        self.detail = Some(key);
        self
    }

    #[must_use]
    pub fn absent(mut self, label: &'static str) -> Self {
        self.absent = Some(label);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistItem {
    pub flag: &'static str,
    pub label: &'static str,
    /// Text key appended to the label as `(value)`.
    pub detail: Option<&'static str>,
}

impl ChecklistItem {
    #[must_use]
    pub fn new(flag: &'static str, label: &'static str) -> Self {
        Self {
            flag,
            label,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(flag: &'static str, label: &'static str, detail: &'static str) -> Self {
        Self {
            flag,
            label,
            detail: Some(detail),
        }
    }
}
