//! Raw form input and the rules that turn it into an attack profile

pub mod input;
pub mod validator;

pub use input::{FieldValue, RawAttackInput};
pub use validator::{
    parse, validate, FieldError, InputField, ValidatedInput, ValidationFailure,
    INCOMPLETE_PROMPT,
};
