//! Detail form model for the selected table.
//!
//! Holds the raw text the user typed so invalid input can be reported next
//! to the field it came from instead of being rejected on entry.

use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::model::{Table, TableUpdate};

/// Editable fields of the detail form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    MinCovers,
    MaxCovers,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Table name",
            Self::MinCovers => "Minimum covers",
            Self::MaxCovers => "Maximum covers",
        };
        f.write_str(label)
    }
}

/// A single field-level validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Table name is required")]
    NameRequired,

    #[error("Minimum covers must be at least 1")]
    MinCoversTooLow,

    #[error("Maximum covers must be greater than or equal to minimum covers")]
    MaxBelowMin,

    #[error("{field} must be a whole number")]
    NotANumber { field: FormField },

    #[error("{field} is too large")]
    TooLarge { field: FormField },
}

impl FormError {
    /// The field this error is shown under.
    pub fn field(&self) -> FormField {
        match self {
            Self::NameRequired => FormField::Name,
            Self::MinCoversTooLow => FormField::MinCovers,
            Self::MaxBelowMin => FormField::MaxCovers,
            Self::NotANumber { field } | Self::TooLarge { field } => *field,
        }
    }
}

/// All validation failures of one submit, in field order.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(Vec<FormError>);

impl FormErrors {
    pub fn for_field(&self, field: FormField) -> Option<&FormError> {
        self.0.iter().find(|e| e.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormError> {
        self.0.iter()
    }
}

/// Editable copy of a table's details.
#[derive(Debug, Clone, PartialEq)]
pub struct TableForm {
    pub table_id: String,
    pub name: String,
    pub min_covers: String,
    pub max_covers: String,
    pub active: bool,
}

impl TableForm {
    pub fn from_table(table: &Table) -> Self {
        Self {
            table_id: table.id.clone(),
            name: table.name.clone(),
            min_covers: table.min_covers.to_string(),
            max_covers: table.max_covers.to_string(),
            active: table.active,
        }
    }

    /// Current text of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::MinCovers => &self.min_covers,
            FormField::MaxCovers => &self.max_covers,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::MinCovers => self.min_covers = value,
            FormField::MaxCovers => self.max_covers = value,
        }
    }

    /// Checks every field and returns the parsed cover range.
    pub fn validate(&self) -> Result<(u32, u32), FormErrors> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FormError::NameRequired);
        }

        let min = parse_count(&self.min_covers, FormField::MinCovers);
        let max = parse_count(&self.max_covers, FormField::MaxCovers);

        match &min {
            Ok(0) => errors.push(FormError::MinCoversTooLow),
            Err(e) => errors.push(e.clone()),
            _ => {}
        }
        match (&min, &max) {
            (_, Err(e)) => errors.push(e.clone()),
            (Ok(min), Ok(max)) if *min >= 1 && max < min => errors.push(FormError::MaxBelowMin),
            _ => {}
        }

        if !errors.is_empty() {
            return Err(FormErrors(errors));
        }
        match (min, max) {
            (Ok(min), Ok(max)) => Ok((min, max)),
            _ => Err(FormErrors::default()),
        }
    }

    /// Validates and builds the update to dispatch.
    ///
    /// The active flag is not included; the toggle applies on its own.
    pub fn submit(&self) -> Result<TableUpdate, FormErrors> {
        let (min, max) = self.validate()?;
        Ok(TableUpdate::new()
            .with_name(self.name.trim())
            .with_covers(min, max))
    }
}

/// Parses a cover count. Negative numbers read as 0 so the range checks
/// report them; values past `u32::MAX` are rejected.
fn parse_count(text: &str, field: FormField) -> Result<u32, FormError> {
    let text = text.trim();
    match text.parse::<u32>() {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(FormError::TooLarge { field }),
        // Anything else that is still an integer is negative
        Err(_) => match text.parse::<i64>() {
            Ok(_) => Ok(0),
            Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(0),
            Err(_) => Err(FormError::NotANumber { field }),
        },
    }
}

/// Update for a stepper button press on a cover field.
///
/// Decrements stop at 1. The other cover field is not consulted, so a
/// stepper can leave min above max until the form is submitted.
pub fn step_covers(table: &Table, field: FormField, step: i64) -> Option<TableUpdate> {
    let current = match field {
        FormField::MinCovers => table.min_covers,
        FormField::MaxCovers => table.max_covers,
        FormField::Name => return None,
    };
    let value = (current as i64 + step).clamp(1, u32::MAX as i64) as u32;
    let update = match field {
        FormField::MinCovers => TableUpdate::new().with_min_covers(value),
        _ => TableUpdate::new().with_max_covers(value),
    };
    Some(update)
}
