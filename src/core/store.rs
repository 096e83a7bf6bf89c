//! Form state store: owns the checklist entry being edited.
//!
//! Row count and order always equal the location catalog. Setters touch a
//! single leaf field and leave everything else as it was.

use crate::core::field::FieldPath;
use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use crate::models::entry::{ChecklistEntry, LocationReading, PrimaryWaterField, Shift};
use crate::models::reading::{Group, Measure};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    entry: ChecklistEntry,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            entry: ChecklistEntry::fresh(),
        }
    }

    pub fn from_entry(entry: ChecklistEntry) -> Self {
        Self {
            entry: entry.rekeyed(),
        }
    }

    pub fn entry(&self) -> &ChecklistEntry {
        &self.entry
    }

    /// Replace the whole entry (used by `load`).
    pub fn replace(&mut self, entry: ChecklistEntry) {
        self.entry = entry.rekeyed();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.entry.date = date.into();
    }

    pub fn set_shift(&mut self, shift: Option<Shift>) {
        self.entry.shift = shift;
    }

    pub fn set_primary_water(&mut self, field: PrimaryWaterField, value: impl Into<String>) {
        self.entry.primary_water.set(field, value.into());
    }

    pub fn set_reading(
        &mut self,
        location: &str,
        group: Group,
        measure: Measure,
        value: impl Into<String>,
    ) -> AppResult<()> {
        self.row_mut(location)?
            .group_mut(group)
            .set(measure, value.into());
        Ok(())
    }

    pub fn set_remark(&mut self, location: &str, value: impl Into<String>) -> AppResult<()> {
        self.row_mut(location)?.remark = value.into();
        Ok(())
    }

    /// Apply one textual assignment. Date and shift are validated here since
    /// they end up in the storage key.
    pub fn set(&mut self, field: &FieldPath, value: &str) -> AppResult<()> {
        match field {
            FieldPath::Date => {
                if !value.is_empty() && crate::utils::date::parse_date(value).is_none() {
                    return Err(AppError::InvalidDate(value.to_string()));
                }
                self.set_date(value);
            }
            FieldPath::Shift => {
                let shift = if value.is_empty() {
                    None
                } else {
                    Some(
                        Shift::from_code(value)
                            .ok_or_else(|| AppError::InvalidShift(value.to_string()))?,
                    )
                };
                self.set_shift(shift);
            }
            FieldPath::PrimaryWater(pw) => self.set_primary_water(*pw, value),
            FieldPath::Reading {
                location,
                group,
                measure,
            } => self.set_reading(location, *group, *measure, value)?,
            FieldPath::Remark { location } => self.set_remark(location, value)?,
        }
        Ok(())
    }

    /// Current value of a field.
    pub fn get(&self, field: &FieldPath) -> AppResult<String> {
        Ok(match field {
            FieldPath::Date => self.entry.date.clone(),
            FieldPath::Shift => self
                .entry
                .shift
                .map(|s| s.code().to_string())
                .unwrap_or_default(),
            FieldPath::PrimaryWater(pw) => self.entry.primary_water.get(*pw).to_string(),
            FieldPath::Reading {
                location,
                group,
                measure,
            } => self
                .reading_for(location)?
                .group(*group)
                .get(*measure)
                .to_string(),
            FieldPath::Remark { location } => self.reading_for(location)?.remark.clone(),
        })
    }

    pub fn reading_for(&self, location: &str) -> AppResult<&LocationReading> {
        let pos = position(location)?;
        Ok(&self.entry.readings[pos])
    }

    fn row_mut(&mut self, location: &str) -> AppResult<&mut LocationReading> {
        let pos = position(location)?;
        Ok(&mut self.entry.readings[pos])
    }

    /// Required fields still empty: every primary water field, then every
    /// group1/group2 value of every row. Remarks, date and shift are not
    /// part of the completeness rule.
    pub fn missing_fields(&self) -> Vec<FieldPath> {
        let mut out: Vec<FieldPath> = PrimaryWaterField::ALL
            .into_iter()
            .filter(|f| is_blank(self.entry.primary_water.get(*f)))
            .map(FieldPath::PrimaryWater)
            .collect();

        for row in &self.entry.readings {
            for group in Group::ALL {
                for measure in Measure::ALL {
                    if is_blank(row.group(group).get(measure)) {
                        out.push(FieldPath::reading(&row.id, group, measure));
                    }
                }
            }
        }

        out
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Number of required fields (filled or not).
    pub fn required_field_count() -> usize {
        PrimaryWaterField::ALL.len()
            + catalog::location_count() * Group::ALL.len() * Measure::ALL.len()
    }
}

fn position(location: &str) -> AppResult<usize> {
    catalog::position_of(location).ok_or_else(|| AppError::UnknownLocation(location.to_string()))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
