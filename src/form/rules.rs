use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{Control, FieldKey};

/// The permissive pattern the validator ships with: one or more non-space,
/// non-@ characters, an @, another such run, a dot, then at least two letters.
/// Deliberately looser than full address grammar; it admits exactly what the
/// inline form check admits.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[a-z]{2,}$").expect("email pattern must compile")
});

pub type RuleFn = Arc<dyn Fn(&Control) -> bool + Send + Sync>;

/// Declarative lookup table from field identity to validation predicate.
/// Declaration order is the order whole-form validation walks the fields.
/// Fields without an entry pass by default.
#[derive(Clone, Default)]
pub struct RuleBook {
    rules: Vec<(FieldKey, RuleFn)>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(
        mut self,
        key: FieldKey,
        rule: impl Fn(&Control) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.retain(|(existing, _)| *existing != key);
        self.rules.push((key, Arc::new(rule)));
        self
    }

    pub fn required(self, key: FieldKey) -> Self {
        self.with_rule(key, required_text)
    }

    pub fn email(self, key: FieldKey) -> Self {
        self.with_rule(key, email)
    }

    pub fn checked(self, key: FieldKey) -> Self {
        self.with_rule(key, checked)
    }

    pub fn rule(&self, key: FieldKey) -> Option<&RuleFn> {
        self.rules
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, rule)| rule)
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.rules.iter().map(|(key, _)| *key)
    }
}

pub fn required_text(control: &Control) -> bool {
    control
        .value()
        .is_some_and(|value| !value.trim().is_empty())
}

pub fn email(control: &Control) -> bool {
    let Some(value) = control.value() else {
        return false;
    };
    if value.trim().is_empty() {
        return false;
    }
    // Matched against the raw value, as the inline check does; the anchors
    // make padded input fail regardless.
    EMAIL_PATTERN.is_match(value)
}

pub fn checked(control: &Control) -> bool {
    control.is_checked()
}
