use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    sync::LazyLock,
};

use regex::Regex;

use crate::{Field, RegistrationData};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NameError {
    Empty,
    MinLength(usize, usize),
    LettersOnly,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EmailError {
    Empty,
    InvalidFormat,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PhoneError {
    DigitCount(usize),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PasswordError {
    Empty,
    MinLength(usize, usize),
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LangError {
    Empty,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AboutError {
    Empty,
    MinLength(usize, usize),
    MaxLength(usize, usize),
}

/// Error of any single field, as stored in the error mapping.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RegistrationError {
    Name(NameError),
    Email(EmailError),
    Phone(PhoneError),
    Password(PasswordError),
    Lang(LangError),
    About(AboutError),
}

const NAME_TRIMMED_MIN_LEN: usize = 2;
const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";
const PHONE_DIGITS: usize = 10;
const ABOUT_TRIMMED_MIN_LEN: usize = 50;
const ABOUT_TRIMMED_MAX_LEN: usize = 500;

#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z\s\x{FEFF}&&[^\x{85}]]+$").expect("name pattern")
});

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[^\s\x{FEFF}@]\x{85}]+@[[^\s\x{FEFF}@]\x{85}]+\.[[^\s\x{FEFF}@]\x{85}]+$")
        .expect("email pattern")
});

#[allow(clippy::expect_used)]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

// browser whitespace: BOM counts, NEL does not
fn is_web_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trims the way browsers trim form input.
#[must_use]
pub fn trim_input(v: &str) -> &str {
    v.trim_matches(is_web_space)
}

/// Length of a form value in UTF-16 code units, as browsers report it.
#[must_use]
pub fn input_len(v: &str) -> usize {
    v.encode_utf16().count()
}

/// Per-field validation result of the registration form. A field without an
/// error is valid.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct RegistrationValidation {
    pub name: Option<NameError>,
    pub email: Option<EmailError>,
    pub phone: Option<PhoneError>,
    pub password: Option<PasswordError>,
    pub lang: Option<LangError>,
    pub about: Option<AboutError>,
}

/// Validates a complete form snapshot. The phone field is only checked while
/// `phone_enabled` is set.
#[must_use]
pub fn validate(data: &RegistrationData, phone_enabled: bool) -> RegistrationValidation {
    let mut validation = RegistrationValidation::default();
    validation.check(data, phone_enabled);
    validation
}

impl RegistrationValidation {
    pub fn check(&mut self, data: &RegistrationData, phone_enabled: bool) {
        self.name = Self::check_name(&data.name);
        self.email = Self::check_email(&data.email);
        self.phone = if phone_enabled {
            Self::check_phone(&data.phone)
        } else {
            None
        };
        self.password = Self::check_password(&data.password);
        self.lang = Self::check_lang(&data.lang);
        self.about = Self::check_about(&data.about);
    }

    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.password.is_some()
            || self.lang.is_some()
            || self.about.is_some()
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.has_any()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<RegistrationError> {
        match field {
            Field::Name => self.name.map(RegistrationError::Name),
            Field::Email => self.email.map(RegistrationError::Email),
            Field::Phone => self.phone.map(RegistrationError::Phone),
            Field::Password => self.password.map(RegistrationError::Password),
            Field::Lang => self.lang.map(RegistrationError::Lang),
            Field::About => self.about.map(RegistrationError::About),
        }
    }

    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    /// Present errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, RegistrationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|e| (field, e)))
    }

    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Field, String> {
        self.iter().map(|(field, e)| (field, e.to_string())).collect()
    }

    fn check_name(v: &str) -> Option<NameError> {
        let trimmed_len = input_len(trim_input(v));

        if trimmed_len == 0 {
            Some(NameError::Empty)
        } else if trimmed_len < NAME_TRIMMED_MIN_LEN {
            Some(NameError::MinLength(trimmed_len, NAME_TRIMMED_MIN_LEN))
        } else if !NAME_PATTERN.is_match(v) {
            Some(NameError::LettersOnly)
        } else {
            None
        }
    }

    fn check_email(v: &str) -> Option<EmailError> {
        if trim_input(v).is_empty() {
            Some(EmailError::Empty)
        } else if !EMAIL_PATTERN.is_match(v) {
            Some(EmailError::InvalidFormat)
        } else {
            None
        }
    }

    fn check_phone(v: &str) -> Option<PhoneError> {
        if trim_input(v).is_empty() || PHONE_PATTERN.is_match(v) {
            None
        } else {
            Some(PhoneError::DigitCount(PHONE_DIGITS))
        }
    }

    fn check_password(v: &str) -> Option<PasswordError> {
        let len = input_len(v);

        if trim_input(v).is_empty() {
            Some(PasswordError::Empty)
        } else if len < PASSWORD_MIN_LEN {
            Some(PasswordError::MinLength(len, PASSWORD_MIN_LEN))
        } else if !v.chars().any(|c| c.is_ascii_uppercase()) {
            Some(PasswordError::MissingUppercase)
        } else if !v.chars().any(|c| c.is_ascii_lowercase()) {
            Some(PasswordError::MissingLowercase)
        } else if !v.chars().any(|c| c.is_ascii_digit()) {
            Some(PasswordError::MissingDigit)
        } else if !v.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
            Some(PasswordError::MissingSpecial)
        } else {
            None
        }
    }

    fn check_lang(v: &str) -> Option<LangError> {
        v.is_empty().then_some(LangError::Empty)
    }

    fn check_about(v: &str) -> Option<AboutError> {
        let trimmed_len = input_len(trim_input(v));

        if trimmed_len == 0 {
            Some(AboutError::Empty)
        } else if trimmed_len < ABOUT_TRIMMED_MIN_LEN {
            Some(AboutError::MinLength(trimmed_len, ABOUT_TRIMMED_MIN_LEN))
        } else if trimmed_len > ABOUT_TRIMMED_MAX_LEN {
            Some(AboutError::MaxLength(trimmed_len, ABOUT_TRIMMED_MAX_LEN))
        } else {
            None
        }
    }
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name is required"),
            Self::MinLength(_, min) => write!(f, "Name must be at least {min} characters"),
            Self::LettersOnly => write!(f, "Name can only contain letters"),
        }
    }
}

impl Display for EmailError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Email is required"),
            Self::InvalidFormat => write!(f, "Please enter a valid email address"),
        }
    }
}

impl Display for PhoneError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::DigitCount(digits) => {
                write!(f, "Phone number must be exactly {digits} digits")
            }
        }
    }
}

impl Display for PasswordError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Password is required"),
            Self::MinLength(_, min) => write!(f, "Password must be at least {min} characters"),
            Self::MissingUppercase => {
                write!(f, "Password must contain at least 1 uppercase letter")
            }
            Self::MissingLowercase => {
                write!(f, "Password must contain at least 1 lowercase letter")
            }
            Self::MissingDigit => write!(f, "Password must contain at least 1 digit"),
            Self::MissingSpecial => {
                write!(f, "Password must contain at least 1 special character")
            }
        }
    }
}

impl Display for LangError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Please select a language"),
        }
    }
}

impl Display for AboutError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "About is required"),
            Self::MinLength(current, min) => {
                write!(f, "Minimum {min} characters required (currently {current})")
            }
            Self::MaxLength(current, max) => {
                write!(f, "Maximum {max} characters allowed (currently {current})")
            }
        }
    }
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Name(e) => Display::fmt(e, f),
            Self::Email(e) => Display::fmt(e, f),
            Self::Phone(e) => Display::fmt(e, f),
            Self::Password(e) => Display::fmt(e, f),
            Self::Lang(e) => Display::fmt(e, f),
            Self::About(e) => Display::fmt(e, f),
        }
    }
}
