//! View projections for the listing: table rows, cards and the pagination
//! strip. Everything here is a pure function from state to display data;
//! nothing mutates application state.

use crate::error::{LokalError, Result};
use crate::listing::{ListingState, SortDirection, SortKey, SortSpec};
use crate::model::UnitRecord;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_LISTING_MESSAGE: &str = "No units match the current filters";
pub const GROUND_FLOOR_LABEL: &str = "Ground floor";
pub const CONTACT_CTA: &str = "→ Contact the sales office";
const PLACEHOLDER: &str = "-";

/// One unit projected to its display strings.
///
/// Both the table and the cards are rendered from the same rows so the two
/// views can never drift apart.
#[derive(Debug, Clone)]
pub struct UnitRow {
    pub id: String,
    pub building: String,
    pub unit_number: String,
    pub floor: String,
    pub area: String,
    pub extras: String,
    pub price: String,
    pub price_per_area: String,
    pub status_label: String,
    pub status_class: String,
    pub plan: String,
}

impl UnitRow {
    /// Projects a record; a malformed record yields an error the caller
    /// skips, so one bad unit never blanks the whole list.
    pub fn project(unit: &UnitRecord) -> Result<Self> {
        if !unit.area.is_finite() {
            return Err(LokalError::Validation(format!(
                "unit {}: non-finite area",
                unit.id
            )));
        }
        Ok(Self {
            id: unit.id.clone(),
            building: unit.building_number.clone(),
            unit_number: unit.unit_number.clone(),
            floor: floor_label(unit.floor),
            area: format!("{} m²", unit.area),
            extras: unit
                .extras
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            price: format_price(unit.price),
            price_per_area: format_price(unit.price_per_area),
            status_label: unit.status.label().to_string(),
            status_class: unit.status.chip_class().to_string(),
            plan: unit
                .plan_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
    }
}

/// "Ground floor" for 0, the plain number otherwise.
pub fn floor_label(floor: i64) -> String {
    if floor == 0 {
        GROUND_FLOOR_LABEL.to_string()
    } else {
        floor.to_string()
    }
}

/// Formats a whole-unit amount with thousands separators, no decimals.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// One element of the pagination control strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageControl {
    Prev { enabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Builds the control strip: prev/next at the ends, a numbered window of
/// current ± 2, with first/last shortcuts and ellipses when the window
/// misses the edges. A single page (or none) suppresses the strip entirely.
pub fn pagination_controls(current: usize, total_pages: usize) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut controls = vec![PageControl::Prev {
        enabled: current > 1,
    }];

    let start = current.saturating_sub(2).max(1);
    let end = (current + 2).min(total_pages);

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            current: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            current: number == current,
        });
    }
    if end < total_pages {
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total_pages,
            current: false,
        });
    }

    controls.push(PageControl::Next {
        enabled: current < total_pages,
    });
    controls
}

const TABLE_HEADERS: [(&str, SortKey); 9] = [
    ("ID", SortKey::Id),
    ("Building", SortKey::Building),
    ("Unit", SortKey::Unit),
    ("Floor", SortKey::Floor),
    ("Area", SortKey::Area),
    ("Extras", SortKey::Extras),
    ("Price", SortKey::Price),
    ("Price/m²", SortKey::PricePerArea),
    ("Status", SortKey::Status),
];

// Area, Price and Price/m² read better right-aligned.
const RIGHT_ALIGNED: [usize; 3] = [4, 6, 7];

fn header_cells(sort: Option<SortSpec>) -> Vec<String> {
    let mut cells: Vec<String> = TABLE_HEADERS
        .iter()
        .map(|(label, key)| match sort {
            Some(spec) if spec.key == *key => {
                let marker = match spec.direction {
                    SortDirection::Ascending => "▲",
                    SortDirection::Descending => "▼",
                };
                format!("{} {}", label, marker)
            }
            _ => label.to_string(),
        })
        .collect();
    cells.push("Plan".to_string());
    cells
}

fn row_cells(row: &UnitRow) -> Vec<String> {
    vec![
        row.id.clone(),
        row.building.clone(),
        row.unit_number.clone(),
        row.floor.clone(),
        row.area.clone(),
        row.extras.clone(),
        row.price.clone(),
        row.price_per_area.clone(),
        row.status_label.clone(),
        row.plan.clone(),
    ]
}

/// Renders the table projection: a header line and one line per record,
/// columns padded to their widest cell. An empty page renders the
/// informational placeholder instead of a bare header.
pub fn render_table(rows: &[UnitRow], sort: Option<SortSpec>) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_LISTING_MESSAGE);
    }

    let header = header_cells(sort);
    let body: Vec<Vec<String>> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|c| c.width()).collect();
    for cells in &body {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&header, &widths));
    let rule_width: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"─".repeat(rule_width));
    out.push('\n');
    for cells in &body {
        out.push_str(&format_line(cells, &widths));
    }
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let pad = widths[i].saturating_sub(cell.width());
        if RIGHT_ALIGNED.contains(&i) {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            // No trailing padding on the last column.
            if i + 1 < cells.len() {
                line.push_str(&" ".repeat(pad));
            }
        }
    }
    line.push('\n');
    line
}

/// Renders the card projection: the same fields stacked vertically, one
/// block per record, each closed by the contact call-to-action.
pub fn render_cards(rows: &[UnitRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_LISTING_MESSAGE);
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Unit {}  [{}]\n", row.id, row.status_label));
        out.push_str(&format!("  Building / Unit  {} / {}\n", row.building, row.unit_number));
        out.push_str(&format!("  Floor            {}\n", row.floor));
        out.push_str(&format!("  Area             {}\n", row.area));
        out.push_str(&format!("  Price            {}\n", row.price));
        out.push_str(&format!("  Price per m²     {}\n", row.price_per_area));
        if row.extras != PLACEHOLDER {
            out.push_str(&format!("  Extras           {}\n", row.extras));
        }
        if row.plan != PLACEHOLDER {
            out.push_str(&format!("  Plan             {}\n", row.plan));
        }
        out.push_str(&format!("  {}\n", CONTACT_CTA));
    }
    out
}

/// Renders the control strip to plain text, marking the current page with
/// brackets. Disabled prev/next are dimmed by the CLI, not here.
pub fn render_pagination(controls: &[PageControl]) -> String {
    if controls.is_empty() {
        return String::new();
    }
    let tokens: Vec<String> = controls
        .iter()
        .map(|c| match c {
            PageControl::Prev { .. } => "‹ Prev".to_string(),
            PageControl::Next { .. } => "Next ›".to_string(),
            PageControl::Ellipsis => "…".to_string(),
            PageControl::Page { number, current } => {
                if *current {
                    format!("[{}]", number)
                } else {
                    number.to_string()
                }
            }
        })
        .collect();
    format!("{}\n", tokens.join("  "))
}

/// The full visual projection of the current page.
#[derive(Debug)]
pub struct PageView {
    pub rows: Vec<UnitRow>,
    pub pagination: Vec<PageControl>,
    pub page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    /// Records dropped by the per-record render guard.
    pub skipped_rows: usize,
}

/// Projects the state's visible page, skipping rows the guard rejects.
pub fn project(state: &ListingState) -> PageView {
    let visible = state.visible();
    let mut rows = Vec::with_capacity(visible.len());
    let mut skipped_rows = 0;
    for unit in &visible {
        match UnitRow::project(unit) {
            Ok(row) => rows.push(row),
            Err(_) => skipped_rows += 1,
        }
    }
    PageView {
        rows,
        pagination: pagination_controls(state.page(), state.total_pages()),
        page: state.page(),
        total_pages: state.total_pages(),
        total_filtered: state.total_filtered(),
        skipped_rows,
    }
}
