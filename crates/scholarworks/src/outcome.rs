//! Success/failure outcomes for expected error paths.
//!
//! Validation and lookup failures travel as values rather than panics. A
//! failed [`Outcome`] always carries at least one [`DomainError`]; consumers
//! branch on [`ErrorKind`], never on message text.

use std::fmt;

use serde::Serialize;

/// Stable classification for every failure the catalog can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Failure,
    NotFound,
    Validation,
    DuplicatedConflict,
    ConcurrencyConflict,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            ErrorKind::Failure => "failure",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::DuplicatedConflict => "duplicated_conflict",
            ErrorKind::ConcurrencyConflict => "concurrency_conflict",
        }
    }
}

/// Immutable error value: namespaced code, human-readable message, kind.
///
/// Two errors built from the same code and message compare equal even though
/// they are distinct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainError {
    pub code: String,
    pub message: String,
    pub kind: ErrorKind,
}

impl DomainError {
    pub fn new(code: impl Into<String>, message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind,
        }
    }

    pub fn required(field: &str) -> Self {
        Self::new(
            "Validation.Required",
            format!("{field} is required and cannot be blank"),
            ErrorKind::Validation,
        )
    }

    pub fn max_length(field: &str, max: usize) -> Self {
        Self::new(
            "Validation.MaxLength",
            format!("{field} cannot exceed {max} characters"),
            ErrorKind::Validation,
        )
    }

    pub fn invalid_information(message: impl Into<String>) -> Self {
        Self::new(
            "Validation.InvalidInformation",
            message,
            ErrorKind::Validation,
        )
    }

    pub fn invalid_number(message: impl Into<String>) -> Self {
        Self::new("Validation.InvalidNumber", message, ErrorKind::Validation)
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(
            "General.NotFound",
            format!("{entity} was not found"),
            ErrorKind::NotFound,
        )
    }

    pub fn duplicated(message: impl Into<String>) -> Self {
        Self::new(
            "Conflict.Duplicated",
            message,
            ErrorKind::DuplicatedConflict,
        )
    }

    pub fn concurrency(message: impl Into<String>) -> Self {
        Self::new(
            "Conflict.Concurrency",
            message,
            ErrorKind::ConcurrencyConflict,
        )
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new("General.Failure", message, ErrorKind::Failure)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}

/// Non-empty collection of [`DomainError`] values.
///
/// The head/tail split makes an empty failure unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors {
    head: DomainError,
    tail: Vec<DomainError>,
}

impl Errors {
    pub fn of(error: DomainError) -> Self {
        Self {
            head: error,
            tail: Vec::new(),
        }
    }

    pub fn with(head: DomainError, tail: Vec<DomainError>) -> Self {
        Self { head, tail }
    }

    /// The first error reported, for single-error consumers.
    pub fn primary(&self) -> &DomainError {
        &self.head
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainError> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// True when any contained error carries the given kind.
    pub fn has_kind(&self, kind: ErrorKind) -> bool {
        self.iter().any(|error| error.kind == kind)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for error in &self.tail {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl From<DomainError> for Errors {
    fn from(error: DomainError) -> Self {
        Self::of(error)
    }
}

/// Result alias used wherever validation or lookup can fail.
pub type Outcome<T> = Result<T, Errors>;

/// Accumulates field errors so one intake round reports every problem.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    collected: Vec<DomainError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: DomainError) {
        self.collected.push(error);
    }

    /// Unwraps an outcome into the collector, keeping the success value.
    pub fn absorb<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(errors) => {
                self.collected.extend(errors.iter().cloned());
                None
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.collected.is_empty()
    }

    /// Produces the success value only when nothing was collected.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Outcome<T> {
        if self.collected.is_empty() {
            return Ok(value());
        }
        self.into_failure()
    }

    /// Consumes the collector into a failure outcome. Callers reach for this
    /// when a required component is missing after absorption.
    pub fn into_failure<T>(self) -> Outcome<T> {
        let mut collected = self.collected;
        if collected.is_empty() {
            collected.push(DomainError::failure("validation failed without detail"));
        }
        let head = collected.remove(0);
        Err(Errors::with(head, collected))
    }
}
