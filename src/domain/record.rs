//! Shared shape of the five reference-data record kinds.
//!
//! Every kind declares three field lists: the identity-bearing fields, the
//! text-bearing fields and the fields copied from a form onto the stored
//! record on update. Validation and merging are driven by those lists, so
//! no kind hand-writes its own predicate or copy block.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Borrowed view of a single record field, as seen by the validation predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Absent,
    Text(&'a str),
    Decimal(f64),
    Integer(i32),
    Timestamp(DateTime<Utc>),
}

impl FieldValue<'_> {
    /// The field was submitted at all (blank strings count as present).
    pub fn is_present(&self) -> bool {
        !matches!(self, FieldValue::Absent)
    }

    /// The field carries usable content: non-blank text or a non-NaN number.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Absent => false,
            FieldValue::Text(text) => !text.trim().is_empty(),
            FieldValue::Decimal(value) => !value.is_nan(),
            FieldValue::Integer(_) | FieldValue::Timestamp(_) => true,
        }
    }
}

/// Conversion from a stored field type to a [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for Option<String> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_deref().map_or(FieldValue::Absent, FieldValue::Text)
    }
}

impl AsFieldValue for Option<f64> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.map_or(FieldValue::Absent, FieldValue::Decimal)
    }
}

impl AsFieldValue for Option<i32> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.map_or(FieldValue::Absent, FieldValue::Integer)
    }
}

impl AsFieldValue for Option<DateTime<Utc>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.map_or(FieldValue::Absent, FieldValue::Timestamp)
    }
}

/// Named accessor pair for one field of record type `R`.
pub struct Field<R> {
    /// Wire name of the field, used in validation messages
    pub name: &'static str,
    pub read: for<'a> fn(&'a R) -> FieldValue<'a>,
    pub copy: fn(&mut R, &R),
}

impl<R> Field<R> {
    pub fn value<'a>(&self, record: &'a R) -> FieldValue<'a> {
        (self.read)(record)
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Declare a [`Field`] for `$record.$name`, reported under `$label`.
macro_rules! field {
    ($record:ty, $name:ident, $label:literal) => {{
        fn read(record: &$record) -> $crate::domain::FieldValue<'_> {
            $crate::domain::AsFieldValue::as_field_value(&record.$name)
        }
        fn copy(target: &mut $record, source: &$record) {
            target.$name = ::core::clone::Clone::clone(&source.$name);
        }
        $crate::domain::Field {
            name: $label,
            read,
            copy,
        }
    }};
}

pub(crate) use field;

/// Why a candidate record was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{kind}: at least one of [{fields}] is required")]
    MissingIdentity { kind: &'static str, fields: String },

    #[error("{kind}: at least one of [{fields}] must not be blank")]
    BlankText { kind: &'static str, fields: String },
}

/// A flat reference-data record owned by the persistence layer.
///
/// The identifier is `None` until the record has been saved and never changes
/// afterwards; every other field is freely mutable by an authorized update.
pub trait DomainRecord: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Human-readable kind name, e.g. "bid list"
    const KIND: &'static str;

    /// At least one of these must be present
    const IDENTITY_FIELDS: &'static [Field<Self>];

    /// When non-empty, at least one of these must be present and non-blank
    const TEXT_FIELDS: &'static [Field<Self>];

    /// Fields taken from the form on update; never includes the identifier
    const COPIED_FIELDS: &'static [Field<Self>];

    fn id(&self) -> Option<i32>;

    fn clear_id(&mut self);

    /// Apply the minimum-viable-record predicate.
    ///
    /// This is a presence check meant to refuse obviously empty submissions,
    /// not a domain-correctness check.
    fn check(&self) -> Result<(), Rejection> {
        let has_identity = Self::IDENTITY_FIELDS
            .iter()
            .any(|field| field.value(self).is_present());
        if !has_identity {
            return Err(Rejection::MissingIdentity {
                kind: Self::KIND,
                fields: field_names(Self::IDENTITY_FIELDS),
            });
        }

        if Self::TEXT_FIELDS.is_empty() {
            return Ok(());
        }

        let has_text = Self::TEXT_FIELDS
            .iter()
            .any(|field| field.value(self).is_filled());
        if !has_text {
            return Err(Rejection::BlankText {
                kind: Self::KIND,
                fields: field_names(Self::TEXT_FIELDS),
            });
        }

        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Copy the update field set from `form` onto `self`.
    fn merge_from(&mut self, form: &Self) {
        for field in Self::COPIED_FIELDS {
            (field.copy)(self, form);
        }
    }
}

fn field_names<R>(fields: &[Field<R>]) -> String {
    fields
        .iter()
        .map(|field| field.name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_present_but_not_filled() {
        let value = FieldValue::Text("   ");
        assert!(value.is_present());
        assert!(!value.is_filled());
    }

    #[test]
    fn test_nan_is_present_but_not_filled() {
        let value = FieldValue::Decimal(f64::NAN);
        assert!(value.is_present());
        assert!(!value.is_filled());
        assert!(FieldValue::Decimal(0.0).is_filled());
    }

    #[test]
    fn test_absent_values() {
        assert!(!None::<String>.as_field_value().is_present());
        assert!(!None::<f64>.as_field_value().is_present());
        assert!(Some(4).as_field_value().is_filled());
    }
}
