// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult, FieldErrors};
use crate::domain::outcome::ValueOutcome;
use crate::domain::value_object::{ValueObject, value_object};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct PersonalName {
    name: String,
    surname: String,
}

impl PersonalName {
    pub const NAME_ERROR_KEY: &'static str = "name";
    pub const SURNAME_ERROR_KEY: &'static str = "surname";

    /// Both parts are checked, so a blank name and surname report two fields.
    pub fn create(name: Option<String>, surname: Option<String>) -> ValueOutcome<Self> {
        let name = name.unwrap_or_default();
        let surname = surname.unwrap_or_default();
        let mut errors = FieldErrors::new();

        if name.trim().is_empty() {
            errors.insert(Self::NAME_ERROR_KEY, "invalid");
        }
        if surname.trim().is_empty() {
            errors.insert(Self::SURNAME_ERROR_KEY, "invalid");
        }

        ValueOutcome::create(|| Self { name, surname }, [errors])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}

impl ValueObject for PersonalName {
    type Key<'a> = (&'a str, &'a str);

    fn equality_key(&self) -> Self::Key<'_> {
        (&self.name, &self.surname)
    }
}

value_object!(PersonalName);

impl fmt::Display for PersonalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.surname)
    }
}

#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    pub const ERROR_KEY: &'static str = "email";

    pub fn create(raw: Option<String>) -> ValueOutcome<Self> {
        let raw = raw.unwrap_or_default();
        let mut errors = FieldErrors::new();

        if !is_mailbox(&raw) {
            errors.insert(Self::ERROR_KEY, "invalid");
        }

        ValueOutcome::create(|| Self(raw), [errors])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    type Key<'a> = &'a str;

    fn equality_key(&self) -> Self::Key<'_> {
        &self.0
    }
}

value_object!(Email);

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// local@domain, no whitespace, no empty domain labels
fn is_mailbox(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.split('.').all(|label| !label.is_empty())
}
