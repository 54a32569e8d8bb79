// src/domain/outcome.rs
//! Success/failure results whose failures are described by [`FieldErrors`].
//!
//! Every shape follows the same rule: it is successful exactly when its error
//! map is empty, and a payload is only present on success. Failures built
//! through `fail` always carry at least one code.

use crate::domain::errors::FieldErrors;

/// Behaviour shared by every outcome shape.
pub trait OutcomeBase: Sized {
    fn errors(&self) -> &FieldErrors;

    /// Builds a failing outcome from an error map, keeping its codes as they
    /// are (the synthetic code is added only when the map is empty).
    fn failure(errors: FieldErrors) -> Self;

    fn is_successful(&self) -> bool {
        self.errors().is_empty()
    }
}

/// Outcome without a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    errors: FieldErrors,
}

impl Outcome {
    pub fn success() -> Self {
        Self::default()
    }

    /// Always fails, even when every input map is empty.
    pub fn fail<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = FieldErrors>,
    {
        Self {
            errors: FieldErrors::merge(errors).ensure_nonempty(),
        }
    }

    /// Succeeds when the merged maps hold no code.
    pub fn create<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = FieldErrors>,
    {
        Self {
            errors: FieldErrors::merge(errors),
        }
    }

    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}

impl OutcomeBase for Outcome {
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn failure(errors: FieldErrors) -> Self {
        if errors.is_empty() {
            return Self::fail([]);
        }
        Self { errors }
    }
}

/// Outcome carrying a single value on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueOutcome<T> {
    value: Option<T>,
    errors: FieldErrors,
}

impl<T> ValueOutcome<T> {
    pub fn success(value: T) -> Self {
        Self {
            value: Some(value),
            errors: FieldErrors::new(),
        }
    }

    pub fn fail<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = FieldErrors>,
    {
        Self {
            value: None,
            errors: FieldErrors::merge(errors).ensure_nonempty(),
        }
    }

    /// Calls `value_factory` only when the merged maps hold no code.
    pub fn create<F, I>(value_factory: F, errors: I) -> Self
    where
        F: FnOnce() -> T,
        I: IntoIterator<Item = FieldErrors>,
    {
        let merged = FieldErrors::merge(errors);
        if merged.is_empty() {
            Self::success(value_factory())
        } else {
            Self::fail([merged])
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn into_parts(self) -> (Option<T>, FieldErrors) {
        (self.value, self.errors)
    }

    pub fn into_result(self) -> Result<T, FieldErrors> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(self.errors.ensure_nonempty()),
        }
    }

    /// Transforms the value of a successful outcome; failures pass through.
    pub fn map<U, F>(self, f: F) -> ValueOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        ValueOutcome {
            value: self.value.map(f),
            errors: self.errors,
        }
    }

    /// Pairs two outcomes. Fails with the union of both error maps when
    /// either side failed.
    pub fn zip<U>(self, other: ValueOutcome<U>) -> ValueOutcome<(T, U)> {
        match (self.value, other.value) {
            (Some(left), Some(right)) => ValueOutcome::success((left, right)),
            _ => ValueOutcome::fail([self.errors, other.errors]),
        }
    }

    /// Drops the payload, keeping success or failure as it was.
    pub fn without_value(self) -> Outcome {
        Outcome {
            errors: self.errors,
        }
    }
}

impl<T> OutcomeBase for ValueOutcome<T> {
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn failure(errors: FieldErrors) -> Self {
        Self::fail([errors])
    }
}

/// Outcome carrying one page of values together with its page coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedOutcome<T> {
    value: Option<T>,
    page: Option<u32>,
    size: Option<u32>,
    errors: FieldErrors,
}

impl<T> PagedOutcome<T> {
    pub fn success(value: T, page: u32, size: u32) -> Self {
        Self {
            value: Some(value),
            page: Some(page),
            size: Some(size),
            errors: FieldErrors::new(),
        }
    }

    pub fn fail<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = FieldErrors>,
    {
        Self {
            value: None,
            page: None,
            size: None,
            errors: FieldErrors::merge(errors).ensure_nonempty(),
        }
    }

    pub fn create<F, I>(value_factory: F, page: u32, size: u32, errors: I) -> Self
    where
        F: FnOnce() -> T,
        I: IntoIterator<Item = FieldErrors>,
    {
        let merged = FieldErrors::merge(errors);
        if merged.is_empty() {
            Self::success(value_factory(), page, size)
        } else {
            Self::fail([merged])
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn size(&self) -> Option<u32> {
        self.size
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T> OutcomeBase for PagedOutcome<T> {
    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn failure(errors: FieldErrors) -> Self {
        Self::fail([errors])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{GENERIC_CODE, GENERIC_FIELD};
    use std::cell::Cell;

    fn title_invalid() -> FieldErrors {
        FieldErrors::single("title", "invalid")
    }

    #[test]
    fn success_has_no_errors() {
        let outcome = Outcome::success();
        assert!(outcome.is_successful());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn fail_without_errors_injects_generic_code() {
        let outcomes = [
            Outcome::fail([]),
            Outcome::fail([FieldErrors::new(), FieldErrors::new()]),
        ];
        for outcome in outcomes {
            assert!(!outcome.is_successful());
            assert_eq!(outcome.errors().code_count(), 1);
            assert!(outcome.errors().contains(GENERIC_FIELD, GENERIC_CODE));
        }
    }

    #[test]
    fn fail_with_errors_keeps_them() {
        let outcome = Outcome::fail([title_invalid(), FieldErrors::single("title", "INVALID")]);
        assert_eq!(outcome.errors(), &title_invalid());
    }

    #[test]
    fn create_succeeds_only_without_codes() {
        assert!(Outcome::create([FieldErrors::new()]).is_successful());
        assert!(Outcome::create(Vec::new()).is_successful());

        let failed = Outcome::create([FieldErrors::new(), title_invalid()]);
        assert_eq!(failed.errors(), &title_invalid());
    }

    #[test]
    fn value_success_carries_value() {
        let outcome = ValueOutcome::success(7);
        assert!(outcome.is_successful());
        assert_eq!(outcome.value(), Some(&7));
    }

    #[test]
    fn value_fail_has_no_value() {
        let outcome: ValueOutcome<i32> = ValueOutcome::fail([]);
        assert!(!outcome.is_successful());
        assert!(outcome.value().is_none());
        assert!(outcome.errors().contains(GENERIC_FIELD, GENERIC_CODE));
    }

    #[test]
    fn value_create_is_lazy() {
        let calls = Cell::new(0);
        let failed = ValueOutcome::create(
            || {
                calls.set(calls.get() + 1);
                "built"
            },
            [title_invalid()],
        );
        assert!(!failed.is_successful());
        assert!(failed.value().is_none());
        assert_eq!(calls.get(), 0);

        let built = ValueOutcome::create(
            || {
                calls.set(calls.get() + 1);
                "built"
            },
            [FieldErrors::new()],
        );
        assert_eq!(built.value(), Some(&"built"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn zip_merges_both_sides() {
        let left: ValueOutcome<i32> = ValueOutcome::fail([title_invalid()]);
        let right: ValueOutcome<i32> =
            ValueOutcome::fail([FieldErrors::single("content", "invalid")]);
        let zipped = left.zip(right);
        assert_eq!(
            zipped.errors().fields().collect::<Vec<_>>(),
            vec!["title", "content"]
        );

        let ok = ValueOutcome::success(1).zip(ValueOutcome::success("a"));
        assert_eq!(ok.into_value(), Some((1, "a")));
    }

    #[test]
    fn into_result_exposes_errors() {
        let failed: ValueOutcome<i32> = ValueOutcome::fail([title_invalid()]);
        assert_eq!(failed.into_result(), Err(title_invalid()));
        assert_eq!(ValueOutcome::success(3).into_result(), Ok(3));
    }

    #[test]
    fn paged_success_carries_coordinates() {
        let outcome = PagedOutcome::success(vec![1, 2], 2, 10);
        assert!(outcome.is_successful());
        assert_eq!(outcome.value(), Some(&vec![1, 2]));
        assert_eq!(outcome.page(), Some(2));
        assert_eq!(outcome.size(), Some(10));
    }

    #[test]
    fn paged_fail_clears_everything() {
        let outcome: PagedOutcome<Vec<i32>> =
            PagedOutcome::create(Vec::new, 1, 10, [FieldErrors::single("size", "invalid")]);
        assert!(!outcome.is_successful());
        assert!(outcome.value().is_none());
        assert!(outcome.page().is_none());
        assert!(outcome.size().is_none());

        let empty: PagedOutcome<Vec<i32>> = PagedOutcome::fail([]);
        assert!(empty.errors().contains(GENERIC_FIELD, GENERIC_CODE));
    }

    #[test]
    fn failure_forwards_errors_verbatim() {
        let errors = FieldErrors::from_iter([("page", vec!["invalid"]), ("size", vec!["invalid"])]);
        let paged: PagedOutcome<()> = PagedOutcome::failure(errors.clone());
        assert_eq!(paged.errors(), &errors);

        let plain = Outcome::failure(FieldErrors::new());
        assert!(!plain.is_successful());
    }
}
