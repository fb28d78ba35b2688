mod field;
mod radio;
mod success;

pub use field::{Control, DisplayStyle, ERROR_CLASS, ErrorMessage, Field, FieldKey};
pub use radio::{RadioGroup, RadioOption};
pub use success::{ScrollBehavior, ScrollBlock, ScrollRequest, SuccessMessage};

use std::collections::BTreeMap;

/// An explicit form document: the state the browser DOM would own. Holds the
/// fields, the radio groups with their containers, and the optional success
/// element elsewhere in the page. Every part of it is ephemeral display state
/// recomputed by the validator; nothing here caches validity.
#[derive(Clone, Debug, Default)]
pub struct FormDocument {
    fields: BTreeMap<FieldKey, Field>,
    groups: BTreeMap<String, RadioGroup>,
    success: Option<SuccessMessage>,
    last_scroll: Option<ScrollRequest>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.key(), field);
        self
    }

    pub fn with_radio_group(mut self, group: RadioGroup) -> Self {
        self.groups.insert(group.name().to_string(), group);
        self
    }

    pub fn with_success_message(mut self, text: impl Into<String>) -> Self {
        self.success = Some(SuccessMessage::new(text));
        self
    }

    pub fn field(&self, key: FieldKey) -> Option<&Field> {
        self.fields.get(&key)
    }

    pub fn field_mut(&mut self, key: FieldKey) -> Option<&mut Field> {
        self.fields.get_mut(&key)
    }

    pub fn radio_group(&self, name: &str) -> Option<&RadioGroup> {
        self.groups.get(name)
    }

    pub fn radio_group_mut(&mut self, name: &str) -> Option<&mut RadioGroup> {
        self.groups.get_mut(name)
    }

    pub fn radio_group_names(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    pub fn success_message(&self) -> Option<&SuccessMessage> {
        self.success.as_ref()
    }

    pub fn success_visible(&self) -> bool {
        self.success.as_ref().is_some_and(SuccessMessage::is_visible)
    }

    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.last_scroll
    }

    pub(crate) fn show_success(&mut self) -> bool {
        let Some(success) = &mut self.success else {
            return false;
        };
        success.set_display(DisplayStyle::Block);
        self.last_scroll = Some(ScrollRequest::smooth_center());
        true
    }

    pub(crate) fn hide_success(&mut self) {
        if let Some(success) = &mut self.success {
            success.set_display(DisplayStyle::None);
        }
    }

    /// Blank every text value and uncheck the checkbox and all radios, the way
    /// a form reset restores pristine defaults. Classes are left alone.
    pub(crate) fn reset(&mut self) {
        for field in self.fields.values_mut() {
            field.reset();
        }
        for group in self.groups.values_mut() {
            group.clear();
        }
    }

    /// Hide every error-message element in the document. Display only; marker
    /// classes are untouched.
    pub(crate) fn hide_all_error_messages(&mut self) {
        for field in self.fields.values_mut() {
            field.hide_error_message();
        }
        for group in self.groups.values_mut() {
            group.hide_error_message();
        }
    }
}
