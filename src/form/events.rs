use super::controller::{FormResult, FormValidator, read_lock};
use crate::document::{ERROR_CLASS, FieldKey};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventTarget {
    Field(FieldKey),
    Radio { group: String },
}

impl EventTarget {
    pub fn radio(group: impl Into<String>) -> Self {
        EventTarget::Radio {
            group: group.into(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormEvent {
    Blur(EventTarget),
    Input(EventTarget),
    Change(EventTarget),
    Submit,
}

impl FormValidator {
    /// The event wiring a host attaches to the form. Returns the validity the
    /// event computed, or `None` when the trigger table ignores the event:
    /// a field is not nagged while first being typed into, only re-checked
    /// as-you-type after a failed blur or submit has marked it.
    pub fn dispatch(&self, event: FormEvent) -> FormResult<Option<bool>> {
        match event {
            FormEvent::Blur(EventTarget::Field(key)) => self.validate_field(key).map(Some),
            FormEvent::Blur(EventTarget::Radio { group })
            | FormEvent::Change(EventTarget::Radio { group }) => {
                self.validate_radio_group(&group).map(Some)
            }
            FormEvent::Input(EventTarget::Field(key)) => {
                if self.field_marked_invalid(key)? {
                    self.validate_field(key).map(Some)
                } else {
                    Ok(None)
                }
            }
            FormEvent::Input(EventTarget::Radio { .. }) => Ok(None),
            FormEvent::Change(EventTarget::Field(key)) => {
                if self.is_checkbox(key)? {
                    self.validate_field(key).map(Some)
                } else {
                    Ok(None)
                }
            }
            FormEvent::Submit => self.submit().map(Some),
        }
    }

    fn field_marked_invalid(&self, key: FieldKey) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading error marker for input event")?;
        Ok(document
            .field(key)
            .is_some_and(|field| field.has_class(ERROR_CLASS)))
    }

    fn is_checkbox(&self, key: FieldKey) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading control kind for change event")?;
        Ok(document
            .field(key)
            .is_some_and(|field| field.control().is_checkbox()))
    }
}
