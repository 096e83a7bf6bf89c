use serde::{Deserialize, Serialize};

/// One measurement group. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reading {
    pub temp: String,
    pub rh: String,
    pub noise: String,
    pub lux: String,
}

impl Reading {
    pub fn get(&self, measure: Measure) -> &str {
        match measure {
            Measure::Temp => &self.temp,
            Measure::Rh => &self.rh,
            Measure::Noise => &self.noise,
            Measure::Lux => &self.lux,
        }
    }

    pub fn set(&mut self, measure: Measure, value: String) {
        match measure {
            Measure::Temp => self.temp = value,
            Measure::Rh => self.rh = value,
            Measure::Noise => self.noise = value,
            Measure::Lux => self.lux = value,
        }
    }

    /// Values in report column order.
    pub fn values(&self) -> [&str; 4] {
        [&self.temp, &self.rh, &self.noise, &self.lux]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Group1,
    Group2,
}

impl Group {
    pub const ALL: [Group; 2] = [Group::Group1, Group::Group2];

    pub fn code(&self) -> &'static str {
        match self {
            Group::Group1 => "g1",
            Group::Group2 => "g2",
        }
    }

    /// Accepts `g1`/`g2` as well as `group1`/`group2`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "g1" | "group1" => Some(Group::Group1),
            "g2" | "group2" => Some(Group::Group2),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Temp,
    Rh,
    Noise,
    Lux,
}

impl Measure {
    pub const ALL: [Measure; 4] = [Measure::Temp, Measure::Rh, Measure::Noise, Measure::Lux];

    pub fn code(&self) -> &'static str {
        match self {
            Measure::Temp => "temp",
            Measure::Rh => "rh",
            Measure::Noise => "noise",
            Measure::Lux => "lux",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "temp" => Some(Measure::Temp),
            "rh" => Some(Measure::Rh),
            "noise" => Some(Measure::Noise),
            "lux" => Some(Measure::Lux),
            _ => None,
        }
    }

    /// Column header used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Measure::Temp => "Temp °C",
            Measure::Rh => "RH %",
            Measure::Noise => "Noise dB",
            Measure::Lux => "Lux",
        }
    }
}
