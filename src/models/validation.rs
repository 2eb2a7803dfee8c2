use serde::Serialize;

use super::booking::Field;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    RequiredFieldMissing,
    InvalidFormat,
    DateInPast,
    DateTooFar,
    ShopClosed,
    SlotUnavailable,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationFailure {
    pub field: Field,
    pub kind: FailureKind,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(field: Field, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            field,
            kind,
            message: message.into(),
        }
    }
}

/// Every failing field at once, at most one failure per field.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_for(&self, field: Field) -> Option<&ValidationFailure> {
        self.failures.iter().find(|f| f.field == field)
    }

    pub fn kind_for(&self, field: Field) -> Option<FailureKind> {
        self.failure_for(field).map(|f| f.kind)
    }
}

impl FromIterator<ValidationFailure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}
