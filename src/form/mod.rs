mod banner;
mod controller;
mod events;
mod rules;


pub use banner::{Clock, HideTimer, SystemClock};
pub use controller::{
    FormError, FormResult, FormValidator, SubmitState, ValidatorOptions, ValidatorSnapshot,
};
pub use events::{EventTarget, FormEvent};
pub use rules::{RuleBook, RuleFn, checked, email, required_text};
