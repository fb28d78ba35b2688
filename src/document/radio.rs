use std::collections::BTreeSet;

use super::field::{DisplayStyle, ERROR_CLASS, ErrorMessage};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RadioOption {
    value: String,
    checked: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            checked: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

/// A named set of mutually exclusive radio inputs together with their grouping
/// container, which carries the group's error element and marker class.
#[derive(Clone, Debug)]
pub struct RadioGroup {
    name: String,
    options: Vec<RadioOption>,
    classes: BTreeSet<String>,
    error: Option<ErrorMessage>,
}

impl RadioGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            classes: BTreeSet::new(),
            error: None,
        }
    }

    pub fn option(mut self, value: impl Into<String>) -> Self {
        self.options.push(RadioOption::new(value));
        self
    }

    pub fn with_error_message(mut self, text: impl Into<String>) -> Self {
        self.error = Some(ErrorMessage::new(text));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[RadioOption] {
        &self.options
    }

    pub fn checked_value(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.checked)
            .map(RadioOption::value)
    }

    /// Check the option with the given value, unchecking the rest.
    /// Returns false when no option carries that value.
    pub fn check(&mut self, value: &str) -> bool {
        if !self.options.iter().any(|option| option.value == value) {
            return false;
        }
        for option in &mut self.options {
            option.checked = option.value == value;
        }
        true
    }

    pub fn clear(&mut self) {
        for option in &mut self.options {
            option.checked = false;
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn error_message(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    pub fn error_visible(&self) -> bool {
        self.error.as_ref().is_some_and(ErrorMessage::is_visible)
    }

    pub(crate) fn show_error(&mut self) {
        if let Some(error) = &mut self.error {
            error.set_display(DisplayStyle::Block);
        }
        self.classes.insert(ERROR_CLASS.to_string());
    }

    pub(crate) fn hide_error(&mut self) {
        if let Some(error) = &mut self.error {
            error.set_display(DisplayStyle::None);
        }
        self.classes.remove(ERROR_CLASS);
    }

    pub(crate) fn hide_error_message(&mut self) {
        if let Some(error) = &mut self.error {
            error.set_display(DisplayStyle::None);
        }
    }
}
