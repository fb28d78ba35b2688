pub mod contact;
pub mod document;
pub mod form;
pub mod prelude;

pub use form::FormValidator;
