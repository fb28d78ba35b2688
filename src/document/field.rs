use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Class added to a field or group container while it is invalid.
pub const ERROR_CLASS: &str = "error";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Inline display style of an optional message element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DisplayStyle {
    Block,
    #[default]
    None,
}

impl DisplayStyle {
    pub const fn is_visible(self) -> bool {
        matches!(self, DisplayStyle::Block)
    }
}

/// The sibling error-message element of a field or group container.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorMessage {
    text: String,
    display: DisplayStyle,
}

impl ErrorMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            display: DisplayStyle::None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn display(&self) -> DisplayStyle {
        self.display
    }

    pub fn is_visible(&self) -> bool {
        self.display.is_visible()
    }

    pub(crate) fn set_display(&mut self, display: DisplayStyle) {
        self.display = display;
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Control {
    Text { value: String },
    Textarea { value: String },
    Checkbox { checked: bool },
}

impl Control {
    pub fn value(&self) -> Option<&str> {
        match self {
            Control::Text { value } | Control::Textarea { value } => Some(value),
            Control::Checkbox { .. } => None,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, Control::Checkbox { checked: true })
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, Control::Checkbox { .. })
    }

    fn reset(&mut self) {
        match self {
            Control::Text { value } | Control::Textarea { value } => value.clear(),
            Control::Checkbox { checked } => *checked = false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Field {
    key: FieldKey,
    control: Control,
    classes: BTreeSet<String>,
    error: Option<ErrorMessage>,
}

impl Field {
    pub fn text(key: FieldKey) -> Self {
        Self::new(key, Control::Text {
            value: String::new(),
        })
    }

    pub fn textarea(key: FieldKey) -> Self {
        Self::new(key, Control::Textarea {
            value: String::new(),
        })
    }

    pub fn checkbox(key: FieldKey) -> Self {
        Self::new(key, Control::Checkbox { checked: false })
    }

    fn new(key: FieldKey, control: Control) -> Self {
        Self {
            key,
            control,
            classes: BTreeSet::new(),
            error: None,
        }
    }

    pub fn with_error_message(mut self, text: impl Into<String>) -> Self {
        self.error = Some(ErrorMessage::new(text));
        self
    }

    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn value(&self) -> Option<&str> {
        self.control.value()
    }

    pub fn is_checked(&self) -> bool {
        self.control.is_checked()
    }

    pub fn set_value(&mut self, next: impl Into<String>) {
        match &mut self.control {
            Control::Text { value } | Control::Textarea { value } => *value = next.into(),
            Control::Checkbox { .. } => {}
        }
    }

    pub fn set_checked(&mut self, next: bool) {
        if let Control::Checkbox { checked } = &mut self.control {
            *checked = next;
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn error_message(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    pub fn error_visible(&self) -> bool {
        self.error.as_ref().is_some_and(ErrorMessage::is_visible)
    }

    /// Show the error indicator: the message element (when present) plus the
    /// marker class. A field without a message element only gets the class.
    pub(crate) fn show_error(&mut self) {
        if let Some(error) = &mut self.error {
            error.set_display(DisplayStyle::Block);
        }
        self.add_class(ERROR_CLASS);
    }

    pub(crate) fn hide_error(&mut self) {
        if let Some(error) = &mut self.error {
            error.set_display(DisplayStyle::None);
        }
        self.remove_class(ERROR_CLASS);
    }

    pub(crate) fn hide_error_message(&mut self) {
        if let Some(error) = &mut self.error {
            error.set_display(DisplayStyle::None);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.control.reset();
    }
}
