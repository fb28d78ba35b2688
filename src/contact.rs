//! The canonical contact form: the concrete schema this crate validates.

use crate::document::{Field, FieldKey, FormDocument, RadioGroup};
use crate::form::{FormValidator, RuleBook, ValidatorOptions};

pub const FIRST_NAME: FieldKey = FieldKey::new("first-name");
pub const LAST_NAME: FieldKey = FieldKey::new("last-name");
pub const EMAIL: FieldKey = FieldKey::new("email");
pub const MESSAGE: FieldKey = FieldKey::new("message");
pub const CONSENT: FieldKey = FieldKey::new("consent");

pub const QUERY_TYPE: &str = "queryType";
pub const QUERY_GENERAL: &str = "general";
pub const QUERY_SUPPORT: &str = "support";

pub fn document() -> FormDocument {
    FormDocument::new()
        .with_field(Field::text(FIRST_NAME).with_error_message("This field is required"))
        .with_field(Field::text(LAST_NAME).with_error_message("This field is required"))
        .with_field(Field::text(EMAIL).with_error_message("Please enter a valid email address"))
        .with_radio_group(
            RadioGroup::new(QUERY_TYPE)
                .option(QUERY_GENERAL)
                .option(QUERY_SUPPORT)
                .with_error_message("Please select a query type"),
        )
        .with_field(Field::textarea(MESSAGE).with_error_message("This field is required"))
        .with_field(
            Field::checkbox(CONSENT)
                .with_error_message("To submit this form, please consent to being contacted"),
        )
        .with_success_message("Thanks for completing the form. We'll be in touch soon!")
}

pub fn rules() -> RuleBook {
    RuleBook::new()
        .required(FIRST_NAME)
        .required(LAST_NAME)
        .email(EMAIL)
        .required(MESSAGE)
        .checked(CONSENT)
}

pub fn validator() -> FormValidator {
    FormValidator::new(document(), rules(), ValidatorOptions::default())
}
