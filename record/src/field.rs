//! Form field descriptors.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Input kind of a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Number,
    Phone,
    MultilineText,
    Checkbox,
    Radio,
}

impl FieldKind {
    /// Whether the field persists its `checked` flag rather than its value.
    #[must_use]
    pub fn is_checkable(self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio)
    }

    /// HTML `type` attribute for single-line inputs. Multiline text has none.
    #[must_use]
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Number => Some("number"),
            Self::Phone => Some("tel"),
            Self::MultilineText => None,
            Self::Checkbox => Some("checkbox"),
            Self::Radio => Some("radio"),
        }
    }
}

/// Position of a field within its form. This is the field's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldHandle(pub usize);

/// A single form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Stable storage key. Fields without one are presentation-only.
    pub id: Option<String>,
    pub kind: FieldKind,
    /// Mutually-exclusive group for radio fields.
    pub group_name: Option<String>,
    pub value: String,
    pub checked: bool,
}

impl Field {
    fn new(id: &str, kind: FieldKind) -> Self {
        Self {
            id: Some(id.to_owned()),
            kind,
            group_name: None,
            value: String::new(),
            checked: false,
        }
    }

    #[must_use]
    pub fn text(id: &str) -> Self {
        Self::new(id, FieldKind::Text)
    }

    #[must_use]
    pub fn number(id: &str) -> Self {
        Self::new(id, FieldKind::Number)
    }

    #[must_use]
    pub fn phone(id: &str) -> Self {
        Self::new(id, FieldKind::Phone)
    }

    #[must_use]
    pub fn multiline(id: &str) -> Self {
        Self::new(id, FieldKind::MultilineText)
    }

    #[must_use]
    pub fn checkbox(id: &str) -> Self {
        Self::new(id, FieldKind::Checkbox)
    }

    #[must_use]
    pub fn radio(id: &str, group_name: &str) -> Self {
        Self {
            group_name: Some(group_name.to_owned()),
            ..Self::new(id, FieldKind::Radio)
        }
    }

    /// A field with no storage key (skipped on save and load).
    #[must_use]
    pub fn anonymous(kind: FieldKind) -> Self {
        Self {
            id: None,
            ..Self::new("", kind)
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_owned();
        self
    }

    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// The storage key, if present and non-empty.
    #[must_use]
    pub fn stable_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Radio group name, if this is a radio with a non-empty group.
    #[must_use]
    pub fn radio_group(&self) -> Option<&str> {
        if self.kind != FieldKind::Radio {
            return None;
        }
        self.group_name.as_deref().filter(|g| !g.is_empty())
    }
}
