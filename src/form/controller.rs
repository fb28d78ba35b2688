use std::fmt::{Display, Formatter};
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use log::{debug, info};

use super::banner::{Clock, HideTimer, SystemClock};
use super::rules::RuleBook;
use crate::document::{ERROR_CLASS, FieldKey, FormDocument};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidatorOptions {
    pub auto_hide_delay: Duration,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            auto_hide_delay: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FormError {
    StatePoisoned(&'static str),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::StatePoisoned(context) => {
                write!(f, "form state lock poisoned while {context}")
            }
        }
    }
}

impl std::error::Error for FormError {}

pub type FormResult<T> = Result<T, FormError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidatorSnapshot {
    pub submit_state: SubmitState,
    pub submit_count: u32,
    pub success_visible: bool,
}

pub(super) struct GateState {
    pub(super) submit_state: SubmitState,
    pub(super) submit_count: u32,
}

/// Owns one form document and gates its submission. Validity is recomputed on
/// every call from current document content; the only stored outcome is the
/// display state written back onto the document.
#[derive(Clone)]
pub struct FormValidator {
    pub(super) options: ValidatorOptions,
    pub(super) document: Arc<RwLock<FormDocument>>,
    pub(super) rules: Arc<RuleBook>,
    pub(super) gate: Arc<RwLock<GateState>>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) pending_hide: Arc<Mutex<Option<HideTimer>>>,
    pub(super) hide_generation: Arc<AtomicU64>,
}

impl FormValidator {
    pub fn new(document: FormDocument, rules: RuleBook, options: ValidatorOptions) -> Self {
        Self::with_clock(document, rules, options, Arc::new(SystemClock))
    }

    pub fn with_clock(
        document: FormDocument,
        rules: RuleBook,
        options: ValidatorOptions,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            options,
            document: Arc::new(RwLock::new(document)),
            rules: Arc::new(rules),
            gate: Arc::new(RwLock::new(GateState {
                submit_state: SubmitState::Idle,
                submit_count: 0,
            })),
            clock,
            pending_hide: Arc::new(Mutex::new(None)),
            hide_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Validate one field by identity and write its indicator state back onto
    /// the document. Unknown identities and fields missing from the document
    /// pass without touching any indicator.
    pub fn validate_field(&self, key: FieldKey) -> FormResult<bool> {
        let Some(rule) = self.rules.rule(key).cloned() else {
            return Ok(true);
        };
        let mut document = write_lock(&self.document, "validating field")?;
        let Some(field) = document.field_mut(key) else {
            return Ok(true);
        };
        let valid = rule(field.control());
        if valid {
            field.hide_error();
        } else {
            field.show_error();
        }
        Ok(valid)
    }

    /// Valid iff exactly one member of the named group is checked. A group
    /// absent from the document is invalid, but the display side degrades to
    /// a no-op rather than failing.
    pub fn validate_radio_group(&self, name: &str) -> FormResult<bool> {
        let mut document = write_lock(&self.document, "validating radio group")?;
        let Some(group) = document.radio_group_mut(name) else {
            return Ok(false);
        };
        let valid = group.checked_value().is_some();
        if valid {
            group.hide_error();
        } else {
            group.show_error();
        }
        Ok(valid)
    }

    /// Validate every ruled field in declaration order, then every radio group
    /// in the document. No short-circuit: each indicator must end up
    /// reflecting its own field, not just the first failure.
    pub fn validate_form(&self) -> FormResult<bool> {
        let mut is_valid = true;
        for key in self.rules.keys().collect::<Vec<_>>() {
            if !self.validate_field(key)? {
                is_valid = false;
            }
        }
        let group_names = {
            let document = read_lock(&self.document, "listing radio groups")?;
            document.radio_group_names()
        };
        for name in group_names {
            if !self.validate_radio_group(&name)? {
                is_valid = false;
            }
        }
        Ok(is_valid)
    }

    /// The submission gate. Submission itself never happens; a valid form
    /// shows the success banner, an invalid one leaves the indicators that
    /// `validate_form` just applied.
    pub fn submit(&self) -> FormResult<bool> {
        {
            let mut gate = write_lock(&self.gate, "preparing submit")?;
            gate.submit_count = gate.submit_count.saturating_add(1);
        }

        let is_valid = self.validate_form()?;
        {
            let mut gate = write_lock(&self.gate, "completing submit")?;
            gate.submit_state = if is_valid {
                SubmitState::Succeeded
            } else {
                SubmitState::Failed
            };
        }
        if is_valid {
            info!("form valid, showing success banner");
            self.show_success()?;
        } else {
            debug!("form has errors, submission blocked");
        }
        Ok(is_valid)
    }

    pub fn snapshot(&self) -> FormResult<ValidatorSnapshot> {
        let gate = read_lock(&self.gate, "creating snapshot")?;
        let document = read_lock(&self.document, "reading success state for snapshot")?;
        Ok(ValidatorSnapshot {
            submit_state: gate.submit_state,
            submit_count: gate.submit_count,
            success_visible: document.success_visible(),
        })
    }

    pub fn error_class_present(&self, key: FieldKey) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading field classes")?;
        Ok(document
            .field(key)
            .is_some_and(|field| field.has_class(ERROR_CLASS)))
    }

    pub fn error_message_visible(&self, key: FieldKey) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading field error display")?;
        Ok(document
            .field(key)
            .is_some_and(|field| field.error_visible()))
    }

    pub fn group_error_visible(&self, name: &str) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading group error display")?;
        Ok(document
            .radio_group(name)
            .is_some_and(|group| group.error_visible()))
    }

    pub fn group_error_class_present(&self, name: &str) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading group classes")?;
        Ok(document
            .radio_group(name)
            .is_some_and(|group| group.has_class(ERROR_CLASS)))
    }

    pub fn field_value(&self, key: FieldKey) -> FormResult<Option<String>> {
        let document = read_lock(&self.document, "reading field value")?;
        Ok(document
            .field(key)
            .and_then(|field| field.value().map(str::to_string)))
    }

    pub fn is_checked(&self, key: FieldKey) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading checked state")?;
        Ok(document.field(key).is_some_and(|field| field.is_checked()))
    }

    pub fn checked_radio(&self, name: &str) -> FormResult<Option<String>> {
        let document = read_lock(&self.document, "reading checked radio")?;
        Ok(document
            .radio_group(name)
            .and_then(|group| group.checked_value().map(str::to_string)))
    }

    pub fn success_visible(&self) -> FormResult<bool> {
        let document = read_lock(&self.document, "reading success display")?;
        Ok(document.success_visible())
    }

    pub fn last_scroll(&self) -> FormResult<Option<crate::document::ScrollRequest>> {
        let document = read_lock(&self.document, "reading scroll request")?;
        Ok(document.last_scroll())
    }

    // User-interaction helpers: mutate the document the way typing or
    // clicking would, with no validation side effects of their own.

    pub fn set_text(&self, key: FieldKey, value: impl Into<String>) -> FormResult<()> {
        let mut document = write_lock(&self.document, "writing field value")?;
        if let Some(field) = document.field_mut(key) {
            field.set_value(value);
        }
        Ok(())
    }

    pub fn set_checked(&self, key: FieldKey, checked: bool) -> FormResult<()> {
        let mut document = write_lock(&self.document, "writing checked state")?;
        if let Some(field) = document.field_mut(key) {
            field.set_checked(checked);
        }
        Ok(())
    }

    pub fn choose_radio(&self, name: &str, value: &str) -> FormResult<bool> {
        let mut document = write_lock(&self.document, "checking radio option")?;
        Ok(document
            .radio_group_mut(name)
            .is_some_and(|group| group.check(value)))
    }
}

pub(super) fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

pub(super) fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
