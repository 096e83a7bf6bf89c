//! Textual addresses of single form fields.
//!
//! ```text
//! date                      entry date
//! shift                     entry shift
//! primary.cws1              primary water block (cws1 cws2 cwr1 cwr2 mcf01 mcf04)
//! gf-ups.g1.temp            one reading of one location (g1|g2, temp|rh|noise|lux)
//! gf-ups.remark             free-text remark of one location
//! ```

use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use crate::models::entry::PrimaryWaterField;
use crate::models::reading::{Group, Measure};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    Date,
    Shift,
    PrimaryWater(PrimaryWaterField),
    Reading {
        location: String,
        group: Group,
        measure: Measure,
    },
    Remark {
        location: String,
    },
}

impl FieldPath {
    pub fn reading(location: &str, group: Group, measure: Measure) -> Self {
        FieldPath::Reading {
            location: location.to_string(),
            group,
            measure,
        }
    }
}

impl FromStr for FieldPath {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        let invalid = || AppError::InvalidField(s.to_string());

        match parts.as_slice() {
            ["date"] => Ok(FieldPath::Date),
            ["shift"] => Ok(FieldPath::Shift),
            ["primary", code] => PrimaryWaterField::from_code(code)
                .map(FieldPath::PrimaryWater)
                .ok_or_else(invalid),
            [location, "remark"] => {
                known_location(location)?;
                Ok(FieldPath::Remark {
                    location: location.to_string(),
                })
            }
            [location, group, measure] => {
                let group = Group::from_code(group).ok_or_else(invalid)?;
                let measure = Measure::from_code(measure).ok_or_else(invalid)?;
                known_location(location)?;
                Ok(FieldPath::reading(location, group, measure))
            }
            _ => Err(invalid()),
        }
    }
}

fn known_location(id: &str) -> AppResult<()> {
    catalog::find_by_id(id)
        .map(|_| ())
        .ok_or_else(|| AppError::UnknownLocation(id.to_string()))
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Date => f.write_str("date"),
            FieldPath::Shift => f.write_str("shift"),
            FieldPath::PrimaryWater(field) => write!(f, "primary.{}", field.code()),
            FieldPath::Reading {
                location,
                group,
                measure,
            } => write!(f, "{}.{}.{}", location, group.code(), measure.code()),
            FieldPath::Remark { location } => write!(f, "{location}.remark"),
        }
    }
}

/// Split a `FIELD=VALUE` assignment. The value may be empty (clears the field).
pub fn parse_assignment(raw: &str) -> AppResult<(FieldPath, String)> {
    let (path, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::InvalidField(format!("{raw} (expected FIELD=VALUE)")))?;
    Ok((path.parse()?, value.trim().to_string()))
}
