mod registration;
mod validation;

use std::fmt::{self, Debug, Formatter};

use serde::Serialize;
pub use registration::{
    RegistrationForm, SubmitFailure, SubmitOutcome, SuccessTicket, TransportError,
    SUCCESS_DISPLAY_MS, SUCCESS_STATUS,
};
pub use validation::{
    input_len, validate, AboutError, EmailError, LangError, NameError, PasswordError,
    PhoneError, RegistrationError, RegistrationValidation,
};

/// Keys of the registration form, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    Lang,
    About,
}

impl Field {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Password,
        Self::Lang,
        Self::About,
    ];
}

/// Languages offered by the select control.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Language {
    En,
    Fr,
    Nl,
    It,
    De,
}

impl Language {
    pub const ALL: [Self; 5] = [Self::En, Self::Fr, Self::Nl, Self::It, Self::De];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Nl => "nl",
            Self::It => "it",
            Self::De => "de",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English (en)",
            Self::Fr => "French (fr)",
            Self::Nl => "Dutch (nl)",
            Self::It => "Italian (it)",
            Self::De => "German (de)",
        }
    }
}

/// Registration payload. Values are kept exactly as typed and are sent
/// untrimmed.
#[derive(Serialize, Clone, Eq, PartialEq, Default)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub lang: String,
    pub about: String,
}

impl RegistrationData {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::Lang => &mut self.lang,
            Field::About => &mut self.about,
        };
        *slot = value;
    }
}

// password never ends up in logs
impl Debug for RegistrationData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"***")
            .field("lang", &self.lang)
            .field("about", &self.about)
            .finish()
    }
}
