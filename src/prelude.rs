pub use crate::document::{
    Control, DisplayStyle, ERROR_CLASS, ErrorMessage, Field, FieldKey, FormDocument, RadioGroup,
    RadioOption, ScrollBehavior, ScrollBlock, ScrollRequest, SuccessMessage,
};
pub use crate::form::{
    Clock, EventTarget, FormError, FormEvent, FormResult, FormValidator, RuleBook, SubmitState,
    SystemClock, ValidatorOptions, ValidatorSnapshot,
};
