use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Sale status of a unit, normalized from the CMS vocabulary at load time.
///
/// Unrecognized source values pass through unchanged in `Other` so a CMS
/// vocabulary extension never drops records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UnitStatus {
    Available,
    Reserved,
    Sold,
    Other(String),
}

static CMS_STATUS: Lazy<HashMap<&'static str, UnitStatus>> = Lazy::new(|| {
    HashMap::from([
        ("available", UnitStatus::Available),
        ("reserved", UnitStatus::Reserved),
        ("sold", UnitStatus::Sold),
    ])
});

impl UnitStatus {
    pub fn from_cms(raw: &str) -> Self {
        CMS_STATUS
            .get(raw.to_lowercase().as_str())
            .cloned()
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }

    /// Display vocabulary shown in the table and cards.
    pub fn label(&self) -> &str {
        match self {
            UnitStatus::Available => "AVAILABLE",
            UnitStatus::Reserved => "RESERVED",
            UnitStatus::Sold => "SOLD",
            UnitStatus::Other(raw) => raw,
        }
    }

    /// Style class of the status chip; empty for passthrough values.
    pub fn chip_class(&self) -> &str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Reserved => "reserved",
            UnitStatus::Sold => "sold",
            UnitStatus::Other(_) => "",
        }
    }
}

impl From<String> for UnitStatus {
    fn from(raw: String) -> Self {
        // Accept both the CMS vocabulary and the already-normalized labels,
        // so records we wrote ourselves round-trip.
        match raw.as_str() {
            "AVAILABLE" => UnitStatus::Available,
            "RESERVED" => UnitStatus::Reserved,
            "SOLD" => UnitStatus::Sold,
            _ => UnitStatus::from_cms(&raw),
        }
    }
}

impl From<UnitStatus> for String {
    fn from(status: UnitStatus) -> Self {
        status.label().to_string()
    }
}

/// One sellable real-estate unit shown in the listing.
///
/// The numeric fields arrive loosely typed from the CMS (numbers or numeric
/// strings); deserialization goes through [`RawUnit`] which coerces them,
/// defaulting malformed input to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawUnit")]
pub struct UnitRecord {
    pub id: String,
    pub building_number: String,
    pub unit_number: String,
    pub floor: i64,
    pub area: f64,
    pub extras: Option<String>,
    pub price: u64,
    pub price_per_area: u64,
    pub status: UnitStatus,
    pub plan_url: Option<String>,
}

/// Pre-normalization shape of a unit source document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUnit {
    #[serde(default)]
    id: String,
    #[serde(default)]
    building_number: String,
    #[serde(default)]
    unit_number: String,
    #[serde(default)]
    floor: Value,
    #[serde(default)]
    area: Value,
    #[serde(default)]
    extras: Option<String>,
    #[serde(default)]
    price: Value,
    #[serde(default)]
    price_per_area: Value,
    #[serde(default)]
    status: String,
    #[serde(default)]
    plan_url: Option<String>,
}

impl From<RawUnit> for UnitRecord {
    fn from(raw: RawUnit) -> Self {
        let area = coerce_f64(&raw.area);
        let price = coerce_u64(&raw.price);
        let mut price_per_area = coerce_u64(&raw.price_per_area);
        if price_per_area == 0 && area > 0.0 {
            price_per_area = (price as f64 / area).round() as u64;
        }
        Self {
            id: raw.id,
            building_number: raw.building_number,
            unit_number: raw.unit_number,
            floor: coerce_i64(&raw.floor),
            area,
            extras: raw.extras.filter(|s| !s.is_empty()),
            price,
            price_per_area,
            status: UnitStatus::from(raw.status),
            plan_url: raw.plan_url.filter(|s| !s.is_empty()),
        }
    }
}

fn coerce_f64(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn coerce_i64(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| {
            n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0)
        }),
        Value::String(s) => s.trim().parse().unwrap_or_else(|_| {
            s.trim().parse::<f64>().map(|f| f.trunc() as i64).unwrap_or(0)
        }),
        _ => 0,
    }
}

fn coerce_u64(value: &Value) -> u64 {
    coerce_i64(value).max(0) as u64
}

/// Workflow status of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageStatus {
    New,
    InProgress,
    Resolved,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::New => "new",
            MessageStatus::InProgress => "in-progress",
            MessageStatus::Resolved => "resolved",
        }
    }
}

impl std::str::FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "new" => Ok(MessageStatus::New),
            "in-progress" => Ok(MessageStatus::InProgress),
            "resolved" => Ok(MessageStatus::Resolved),
            other => Err(format!("Unknown message status: {}", other)),
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub consent: bool,
    #[serde(default)]
    pub marketing: bool,
    pub status: MessageStatus,
    #[serde(default)]
    pub notes: String,
}

impl ContactMessage {
    pub fn new(
        name: String,
        email: String,
        phone: String,
        subject: String,
        message: String,
        consent: bool,
        marketing: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            name,
            email,
            phone,
            subject,
            message,
            consent,
            marketing,
            status: MessageStatus::New,
            notes: String::new(),
        }
    }
}
