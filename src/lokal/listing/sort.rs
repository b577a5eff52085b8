//! Sort engine: comparator-based reordering of the filtered subset.

use crate::model::UnitRecord;
use std::cmp::Ordering;
use std::str::FromStr;

/// A sortable listing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Building,
    Unit,
    Floor,
    Area,
    Extras,
    Price,
    PricePerArea,
    Status,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortKey::Id),
            "building" => Ok(SortKey::Building),
            "unit" => Ok(SortKey::Unit),
            "floor" => Ok(SortKey::Floor),
            "area" => Ok(SortKey::Area),
            "extras" => Ok(SortKey::Extras),
            "price" => Ok(SortKey::Price),
            "price-per-area" => Ok(SortKey::PricePerArea),
            "status" => Ok(SortKey::Status),
            other => Err(format!("Unknown sort column: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort: column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Click semantics: the same column toggles direction, a different
    /// column resets to ascending.
    pub fn toggled(current: Option<SortSpec>, key: SortKey) -> Self {
        match current {
            Some(spec) if spec.key == key => Self {
                key,
                direction: spec.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }

    /// Reorders `units` in place.
    ///
    /// `sort_by` is stable, so equal keys keep their prior relative order;
    /// that is incidental, not contractual.
    pub fn apply(&self, units: &mut [UnitRecord]) {
        units.sort_by(|a, b| {
            let ord = compare_by(self.key, a, b);
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}

/// Ascending comparator per column: numeric columns compare numerically,
/// string columns compare as lowercase.
fn compare_by(key: SortKey, a: &UnitRecord, b: &UnitRecord) -> Ordering {
    match key {
        SortKey::Id => str_cmp(&a.id, &b.id),
        SortKey::Building => str_cmp(&a.building_number, &b.building_number),
        SortKey::Unit => str_cmp(&a.unit_number, &b.unit_number),
        SortKey::Floor => a.floor.cmp(&b.floor),
        SortKey::Area => a.area.total_cmp(&b.area),
        SortKey::Extras => str_cmp(
            a.extras.as_deref().unwrap_or(""),
            b.extras.as_deref().unwrap_or(""),
        ),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::PricePerArea => a.price_per_area.cmp(&b.price_per_area),
        SortKey::Status => str_cmp(a.status.label(), b.status.label()),
    }
}

fn str_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::test_units::sample_units;

    #[test]
    fn same_column_click_toggles_direction() {
        let first = SortSpec::toggled(None, SortKey::Price);
        assert_eq!(first.direction, SortDirection::Ascending);

        let second = SortSpec::toggled(Some(first), SortKey::Price);
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortSpec::toggled(Some(second), SortKey::Price);
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn different_column_resets_to_ascending() {
        let price_desc = SortSpec {
            key: SortKey::Price,
            direction: SortDirection::Descending,
        };
        let next = SortSpec::toggled(Some(price_desc), SortKey::Area);
        assert_eq!(next.key, SortKey::Area);
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn descending_sort_exactly_reverses_ascending() {
        // Distinct prices: with a tie, stable sorting keeps tied input
        // order in both directions, so the lists would not mirror exactly.
        let mut units = sample_units();
        units[4].price = 860_000;

        let mut asc = units.clone();
        SortSpec::ascending(SortKey::Price).apply(&mut asc);

        let mut desc = units;
        SortSpec {
            key: SortKey::Price,
            direction: SortDirection::Descending,
        }
        .apply(&mut desc);

        let asc_ids: Vec<&str> = asc.iter().map(|u| u.id.as_str()).collect();
        let mut desc_ids: Vec<&str> = desc.iter().map(|u| u.id.as_str()).collect();
        desc_ids.reverse();
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn numeric_columns_compare_numerically() {
        let mut units = sample_units();
        SortSpec::ascending(SortKey::Price).apply(&mut units);
        let prices: Vec<u64> = units.iter().map(|u| u.price).collect();
        assert_eq!(prices, vec![720_000, 850_000, 850_000, 920_000, 1_050_000]);
    }

    #[test]
    fn string_columns_compare_case_insensitively() {
        let mut units = sample_units();
        units[0].building_number = "b".into();
        units[1].building_number = "A".into();
        SortSpec::ascending(SortKey::Building).apply(&mut units);
        assert_eq!(units[0].building_number, "A");
    }

    #[test]
    fn equal_keys_keep_prior_order() {
        // Two units priced 850000: stable sort keeps their input order.
        let mut units = sample_units();
        SortSpec::ascending(SortKey::Price).apply(&mut units);
        let tied: Vec<&str> = units
            .iter()
            .filter(|u| u.price == 850_000)
            .map(|u| u.id.as_str())
            .collect();
        assert_eq!(tied, vec!["1-a-1", "5-b-2"]);
    }
}
