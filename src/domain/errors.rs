// src/domain/errors.rs
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Borrow;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Infrastructure-level failures raised by repository ports.
///
/// Input validation never ends up here: invalid input is described by
/// [`FieldErrors`] carried inside an outcome.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Field key used when an error is not tied to a specific field.
pub const GENERIC_FIELD: &str = "";
/// Code injected when a failure is constructed without any real error.
pub const GENERIC_CODE: &str = "error";

/// Ordered mapping from field name to the distinct error codes raised for it.
///
/// Fields keep the order in which they were first seen, as do the codes of a
/// field. A field is only present while it holds at least one code, and codes
/// are unique per field under case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, code: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, code);
        errors
    }

    /// Adds `code` under `field` unless an equal code (ignoring case) is
    /// already recorded there.
    pub fn insert(&mut self, field: impl Into<String>, code: impl Into<String>) {
        let field = field.into();
        let code = code.into();
        let position = match self.entries.iter().position(|(key, _)| *key == field) {
            Some(position) => position,
            None => {
                self.entries.push((field, Vec::new()));
                self.entries.len() - 1
            }
        };
        let codes = &mut self.entries[position].1;
        if !codes.iter().any(|existing| codes_match(existing, &code)) {
            codes.push(code);
        }
    }

    /// Union of every input map, field by field.
    ///
    /// Associative and idempotent: merging a map with itself yields the map.
    pub fn merge<I>(maps: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<FieldErrors>,
    {
        let mut merged = Self::new();
        for map in maps {
            for (field, codes) in map.borrow().iter() {
                for code in codes {
                    merged.insert(field, code.as_str());
                }
            }
        }
        merged
    }

    /// Replaces an empty map with the synthetic `{"": ["error"]}` entry.
    pub fn ensure_nonempty(self) -> Self {
        if self.code_count() > 0 {
            self
        } else {
            Self::single(GENERIC_FIELD, GENERIC_CODE)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of codes across all fields.
    pub fn code_count(&self) -> usize {
        self.entries.iter().map(|(_, codes)| codes.len()).sum()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, codes)| codes.as_slice())
    }

    pub fn contains(&self, field: &str, code: &str) -> bool {
        self.get(field)
            .is_some_and(|codes| codes.iter().any(|existing| codes_match(existing, code)))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(field, _)| field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(field, codes)| (field.as_str(), codes.as_slice()))
    }
}

/// Builds a map from raw `(field, codes)` pairs. Pairs with no codes are
/// dropped and duplicate codes collapse.
impl<F, C, I> FromIterator<(F, I)> for FieldErrors
where
    F: Into<String>,
    C: Into<String>,
    I: IntoIterator<Item = C>,
{
    fn from_iter<T: IntoIterator<Item = (F, I)>>(iter: T) -> Self {
        let mut errors = Self::new();
        for (field, codes) in iter {
            let field = field.into();
            for code in codes {
                errors.insert(field.as_str(), code);
            }
        }
        errors
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, codes) in &self.entries {
            map.serialize_entry(field, codes)?;
        }
        map.end()
    }
}

fn codes_match(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
