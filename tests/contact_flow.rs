use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use calmform::contact::{
    self, CONSENT, EMAIL, FIRST_NAME, LAST_NAME, MESSAGE, QUERY_GENERAL, QUERY_TYPE,
};
use calmform::prelude::*;

struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("manual clock lock");
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("manual clock lock")
    }
}

#[test]
fn full_contact_form_journey() {
    let clock = ManualClock::new();
    let validator = FormValidator::with_clock(
        contact::document(),
        contact::rules(),
        ValidatorOptions::default(),
        clock.clone(),
    );

    // First attempt: the user tabs through an empty email field.
    validator
        .dispatch(FormEvent::Blur(EventTarget::Field(EMAIL)))
        .expect("blur empty email");
    assert!(validator.error_message_visible(EMAIL).expect("email flagged"));

    // They start correcting it; feedback now follows every keystroke.
    validator.set_text(EMAIL, "ada@").expect("type");
    assert_eq!(
        validator
            .dispatch(FormEvent::Input(EventTarget::Field(EMAIL)))
            .expect("input while flagged"),
        Some(false)
    );
    validator.set_text(EMAIL, "ada@example.com").expect("type");
    assert_eq!(
        validator
            .dispatch(FormEvent::Input(EventTarget::Field(EMAIL)))
            .expect("input completes address"),
        Some(true)
    );
    assert!(!validator.error_message_visible(EMAIL).expect("email cleared"));

    // Submitting now flags everything still missing, all at once.
    assert_eq!(
        validator.dispatch(FormEvent::Submit).expect("premature submit"),
        Some(false)
    );
    for key in [FIRST_NAME, LAST_NAME, MESSAGE, CONSENT] {
        assert!(validator.error_message_visible(key).expect("field flagged"));
    }
    assert!(validator.group_error_visible(QUERY_TYPE).expect("group flagged"));
    assert_eq!(
        validator.snapshot().expect("snapshot").submit_state,
        SubmitState::Failed
    );

    // Filling the rest in and submitting succeeds.
    validator.set_text(FIRST_NAME, "Ada").expect("first name");
    validator.set_text(LAST_NAME, "Lovelace").expect("last name");
    validator.set_text(MESSAGE, "Hello!").expect("message");
    validator.set_checked(CONSENT, true).expect("consent");
    validator
        .choose_radio(QUERY_TYPE, QUERY_GENERAL)
        .expect("query type");
    validator
        .dispatch(FormEvent::Change(EventTarget::radio(QUERY_TYPE)))
        .expect("radio change");

    assert_eq!(
        validator.dispatch(FormEvent::Submit).expect("final submit"),
        Some(true)
    );
    let snapshot = validator.snapshot().expect("snapshot");
    assert_eq!(snapshot.submit_state, SubmitState::Succeeded);
    assert_eq!(snapshot.submit_count, 2);
    assert!(snapshot.success_visible);
    assert_eq!(
        validator.field_value(FIRST_NAME).expect("reset value"),
        Some(String::new())
    );
    assert_eq!(validator.checked_radio(QUERY_TYPE).expect("reset radio"), None);

    // The banner hides on its own five seconds later.
    clock.advance(Duration::from_millis(5000));
    assert!(validator.poll_auto_hide().expect("deadline reached"));
    assert!(!validator.success_visible().expect("banner hidden"));
}
