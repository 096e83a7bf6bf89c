//! Checklist entry: one full record for a given date and shift.

use crate::models::catalog;
use crate::models::reading::{Group, Reading};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every saved snapshot key.
pub const KEY_PREFIX: &str = "checklist-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    A,
    B,
    C,
}

impl Shift {
    pub fn code(&self) -> &'static str {
        match self {
            Shift::A => "A",
            Shift::B => "B",
            Shift::C => "C",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Shift::A),
            "B" => Some(Shift::B),
            "C" => Some(Shift::C),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Stored as `"A"`, `"B"`, `"C"` or `""` when not chosen yet.
mod shift_text {
    use super::Shift;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(shift: &Option<Shift>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(shift.map(|v| v.code()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Shift>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => Shift::from_code(code)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid shift '{code}'"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TempPair {
    pub reading1: String,
    pub reading2: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SingleTemp {
    pub reading1: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrimaryWaterBlock {
    pub chilled_water_supply: TempPair,
    pub chilled_water_return: TempPair,
    pub mcf01_supply: SingleTemp,
    pub mcf04_supply: SingleTemp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryWaterField {
    ChilledWaterSupply1,
    ChilledWaterSupply2,
    ChilledWaterReturn1,
    ChilledWaterReturn2,
    Mcf01Supply,
    Mcf04Supply,
}

impl PrimaryWaterField {
    pub const ALL: [PrimaryWaterField; 6] = [
        PrimaryWaterField::ChilledWaterSupply1,
        PrimaryWaterField::ChilledWaterSupply2,
        PrimaryWaterField::ChilledWaterReturn1,
        PrimaryWaterField::ChilledWaterReturn2,
        PrimaryWaterField::Mcf01Supply,
        PrimaryWaterField::Mcf04Supply,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PrimaryWaterField::ChilledWaterSupply1 => "cws1",
            PrimaryWaterField::ChilledWaterSupply2 => "cws2",
            PrimaryWaterField::ChilledWaterReturn1 => "cwr1",
            PrimaryWaterField::ChilledWaterReturn2 => "cwr2",
            PrimaryWaterField::Mcf01Supply => "mcf01",
            PrimaryWaterField::Mcf04Supply => "mcf04",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.code().eq_ignore_ascii_case(code))
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryWaterField::ChilledWaterSupply1 => "CHW Supply 1",
            PrimaryWaterField::ChilledWaterSupply2 => "CHW Supply 2",
            PrimaryWaterField::ChilledWaterReturn1 => "CHW Return 1",
            PrimaryWaterField::ChilledWaterReturn2 => "CHW Return 2",
            PrimaryWaterField::Mcf01Supply => "MCF-01 Supply",
            PrimaryWaterField::Mcf04Supply => "MCF-04 Supply",
        }
    }
}

impl PrimaryWaterBlock {
    pub fn get(&self, field: PrimaryWaterField) -> &str {
        match field {
            PrimaryWaterField::ChilledWaterSupply1 => &self.chilled_water_supply.reading1,
            PrimaryWaterField::ChilledWaterSupply2 => &self.chilled_water_supply.reading2,
            PrimaryWaterField::ChilledWaterReturn1 => &self.chilled_water_return.reading1,
            PrimaryWaterField::ChilledWaterReturn2 => &self.chilled_water_return.reading2,
            PrimaryWaterField::Mcf01Supply => &self.mcf01_supply.reading1,
            PrimaryWaterField::Mcf04Supply => &self.mcf04_supply.reading1,
        }
    }

    pub fn set(&mut self, field: PrimaryWaterField, value: String) {
        let slot = match field {
            PrimaryWaterField::ChilledWaterSupply1 => &mut self.chilled_water_supply.reading1,
            PrimaryWaterField::ChilledWaterSupply2 => &mut self.chilled_water_supply.reading2,
            PrimaryWaterField::ChilledWaterReturn1 => &mut self.chilled_water_return.reading1,
            PrimaryWaterField::ChilledWaterReturn2 => &mut self.chilled_water_return.reading2,
            PrimaryWaterField::Mcf01Supply => &mut self.mcf01_supply.reading1,
            PrimaryWaterField::Mcf04Supply => &mut self.mcf04_supply.reading1,
        };
        *slot = value;
    }
}

/// One row of the checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationReading {
    /// Catalog id. Empty in snapshots written before rows were keyed.
    pub id: String,
    pub location: String,
    pub group1: Reading,
    pub group2: Reading,
    pub remark: String,
}

impl LocationReading {
    pub fn blank(location: &catalog::Location) -> Self {
        Self {
            id: location.id.to_string(),
            location: location.name.to_string(),
            ..Self::default()
        }
    }

    pub fn group(&self, group: Group) -> &Reading {
        match group {
            Group::Group1 => &self.group1,
            Group::Group2 => &self.group2,
        }
    }

    pub fn group_mut(&mut self, group: Group) -> &mut Reading {
        match group {
            Group::Group1 => &mut self.group1,
            Group::Group2 => &mut self.group2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChecklistEntry {
    pub date: String,
    #[serde(with = "shift_text")]
    pub shift: Option<Shift>,
    pub primary_water: PrimaryWaterBlock,
    pub readings: Vec<LocationReading>,
}

impl Default for ChecklistEntry {
    fn default() -> Self {
        Self::fresh()
    }
}

impl ChecklistEntry {
    /// Empty entry with one row per catalog location, in catalog order.
    pub fn fresh() -> Self {
        Self {
            date: String::new(),
            shift: None,
            primary_water: PrimaryWaterBlock::default(),
            readings: catalog::locations().map(LocationReading::blank).collect(),
        }
    }

    /// Rebuild the rows against the catalog.
    ///
    /// Incoming rows are matched by id, or by display name when they carry no
    /// id. Rows matching no catalog location are dropped; catalog locations
    /// missing from the input stay blank.
    pub fn rekeyed(self) -> Self {
        let mut out = Self {
            date: self.date,
            shift: self.shift,
            primary_water: self.primary_water,
            readings: catalog::locations().map(LocationReading::blank).collect(),
        };

        for row in self.readings {
            let target = if row.id.is_empty() {
                catalog::find_by_name(&row.location)
            } else {
                catalog::find_by_id(&row.id)
            };

            let Some(location) = target else {
                continue;
            };

            if let Some(pos) = catalog::position_of(location.id) {
                let slot = &mut out.readings[pos];
                slot.group1 = row.group1;
                slot.group2 = row.group2;
                slot.remark = row.remark;
            }
        }

        out
    }

    /// Storage key of this entry, if both date and shift are set.
    pub fn storage_key(&self) -> Option<String> {
        let shift = self.shift?;
        if self.date.trim().is_empty() {
            return None;
        }
        Some(storage_key(&self.date, shift))
    }
}

/// `checklist-<date>-<shift>`
pub fn storage_key(date: &str, shift: Shift) -> String {
    format!("{KEY_PREFIX}{}-{}", date.trim(), shift.code())
}
