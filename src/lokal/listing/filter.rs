//! Filter engine: reduces the full unit list to the subset matching every
//! active predicate (logical AND).

use crate::model::{UnitRecord, UnitStatus};

/// Raw, user-supplied filter inputs, exactly as typed.
///
/// The empty string is the "unset" sentinel throughout — crucially for
/// `floor`, where `"0"` must select the ground floor while `""` means no
/// constraint. A bound that does not parse to a finite number is treated as
/// absent, never as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFilter {
    pub search: String,
    pub status: String,
    pub floor: String,
    pub area_min: String,
    pub area_max: String,
    pub price_min: String,
    pub price_max: String,
}

/// Parsed filter specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub search: String,
    pub status: Option<UnitStatus>,
    pub floor: Option<i64>,
    pub area_min: Option<f64>,
    pub area_max: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl FilterSpec {
    pub fn parse(raw: &RawFilter) -> Self {
        Self {
            search: raw.search.trim().to_lowercase(),
            status: match raw.status.trim() {
                "" => None,
                s => Some(UnitStatus::from(s.to_string())),
            },
            floor: match raw.floor.trim() {
                "" => None,
                s => s.parse().ok(),
            },
            area_min: parse_bound(&raw.area_min),
            area_max: parse_bound(&raw.area_max),
            price_min: parse_bound(&raw.price_min),
            price_max: parse_bound(&raw.price_max),
        }
    }

    /// Whether `unit` satisfies all active predicates.
    pub fn matches(&self, unit: &UnitRecord) -> bool {
        if !self.search.is_empty()
            && !unit.id.to_lowercase().contains(&self.search)
            && !unit.building_number.to_lowercase().contains(&self.search)
            && !unit.unit_number.to_lowercase().contains(&self.search)
        {
            return false;
        }
        if let Some(status) = &self.status {
            if unit.status != *status {
                return false;
            }
        }
        if let Some(floor) = self.floor {
            if unit.floor != floor {
                return false;
            }
        }
        if let Some(min) = self.area_min {
            if unit.area < min {
                return false;
            }
        }
        if let Some(max) = self.area_max {
            if unit.area > max {
                return false;
            }
        }
        let price = unit.price as f64;
        if let Some(min) = self.price_min {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if price > max {
                return false;
            }
        }
        true
    }

    /// Applies the filter, deriving a fresh subset without touching `units`.
    pub fn apply(&self, units: &[UnitRecord]) -> Vec<UnitRecord> {
        units.iter().filter(|u| self.matches(u)).cloned().collect()
    }
}

fn parse_bound(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
