//! Best-effort aggregation of unit source files.
//!
//! Units live as one JSON document per file, managed by the CMS. A missing
//! directory, an unreadable file or a document that fails to parse is
//! skipped, never an error: the listing renders whatever loaded. The caller
//! replaces its unit list wholesale with the returned report, so a reload is
//! a single `Vec` swap and partially loaded state is never observable.

use crate::model::UnitRecord;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Outcome of one load pass.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub units: Vec<UnitRecord>,
    /// Files that existed but could not be read or parsed, plus records
    /// dropped for a duplicate id.
    pub skipped: usize,
}

/// Loads every `*.json` document under `dir`, ordered by id.
pub fn load_units(dir: &Path) -> LoadReport {
    let mut report = LoadReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return report,
    };

    let mut seen_ids = HashSet::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let unit = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<UnitRecord>(&content).ok());
        match unit {
            Some(unit) if seen_ids.insert(unit.id.clone()) => report.units.push(unit),
            _ => report.skipped += 1,
        }
    }

    report.units.sort_by(|a, b| compare_ids(&a.id, &b.id));
    report
}

/// Orders ids numerically when both carry a leading number ("2-a-2" before
/// "10-c-1"), falling back to a case-insensitive string compare.
fn compare_ids(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    if let (Some(an), Some(bn)) = (leading_number(&a), leading_number(&b)) {
        if an != bn {
            return an.partial_cmp(&bn).unwrap_or(Ordering::Equal);
        }
    }
    a.cmp(&b)
}

fn leading_number(id: &str) -> Option<f64> {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_unit(dir: &Path, name: &str, json: &str) {
        fs::write(dir.join(name), json).unwrap();
    }

    #[test]
    fn missing_directory_yields_empty_report() {
        let tmp = tempfile::tempdir().unwrap();
        let report = load_units(&tmp.path().join("no-such-dir"));
        assert!(report.units.is_empty());
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn skips_unparsable_files_and_keeps_the_rest() {
        let tmp = tempfile::tempdir().unwrap();
        write_unit(
            tmp.path(),
            "1-a-1.json",
            r#"{"id": "1-a-1", "status": "available", "area": 85.5, "price": 850000}"#,
        );
        write_unit(tmp.path(), "broken.json", "{not json");
        write_unit(tmp.path(), "notes.txt", "ignored");

        let report = load_units(tmp.path());
        assert_eq!(report.units.len(), 1);
        assert_eq!(report.units[0].id, "1-a-1");
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn orders_by_id_with_numeric_awareness() {
        let tmp = tempfile::tempdir().unwrap();
        for id in ["10-c-1", "2-a-2", "1-a-1"] {
            write_unit(
                tmp.path(),
                &format!("{}.json", id),
                &format!(r#"{{"id": "{}", "status": "available"}}"#, id),
            );
        }

        let report = load_units(tmp.path());
        let ids: Vec<&str> = report.units.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1-a-1", "2-a-2", "10-c-1"]);
    }

    #[test]
    fn drops_duplicate_ids() {
        let tmp = tempfile::tempdir().unwrap();
        write_unit(tmp.path(), "a.json", r#"{"id": "1-a-1", "status": "available"}"#);
        write_unit(tmp.path(), "b.json", r#"{"id": "1-a-1", "status": "sold"}"#);

        let report = load_units(tmp.path());
        assert_eq!(report.units.len(), 1);
        assert_eq!(report.skipped, 1);
    }
}
