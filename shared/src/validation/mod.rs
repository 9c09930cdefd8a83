mod registration;

pub use registration::{
    input_len, validate, AboutError, EmailError, LangError, NameError, PasswordError,
    PhoneError, RegistrationError, RegistrationValidation,
};
