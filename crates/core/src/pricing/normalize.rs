//! Normalization of catalog records into strict line items.
//!
//! Catalog records arrive with arbitrary extra fields and inconsistent key
//! casing (`Size`, `size`, `Faces_Count`, ...). This is the only place the
//! engine looks at raw records.

use rentboard_shared::types::BillboardId;
use serde_json::{Map, Value};

use super::error::PricingError;
use super::types::BillboardLineItem;

const ID_KEYS: &[&str] = &["id", "billboardid"];
const SIZE_KEYS: &[&str] = &["size", "sizelabel", "billboardsize"];
const FACE_KEYS: &[&str] = &["faces", "facescount", "facecount", "numberoffaces"];
const LEVEL_KEYS: &[&str] = &["level", "category", "billboardlevel"];
const PRICE_KEY_KEYS: &[&str] = &["pricekey", "basepricelookupkey", "pricingkey"];

impl BillboardLineItem {
    /// Builds a line item from a loosely-typed catalog record.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NotAnObject` for non-object values and
    /// `PricingError::MissingField("id")` when no usable id is present.
    pub fn from_record(record: &Value) -> Result<Self, PricingError> {
        let obj = record.as_object().ok_or(PricingError::NotAnObject)?;

        let id = field(obj, ID_KEYS)
            .and_then(text)
            .ok_or(PricingError::MissingField("id"))?;
        let size_label = field(obj, SIZE_KEYS).and_then(text).unwrap_or_default();
        let face_count = field(obj, FACE_KEYS).and_then(count).unwrap_or(1);
        let level = field(obj, LEVEL_KEYS).and_then(text).unwrap_or_default();
        let price_key = field(obj, PRICE_KEY_KEYS)
            .and_then(text)
            .unwrap_or_else(|| size_label.clone());

        Ok(Self {
            id: BillboardId::new(id),
            size_label,
            face_count,
            level,
            price_key,
        })
    }

    /// Normalizes a batch of records, reporting the position of the first bad one.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InBatch` wrapping the first record's failure.
    pub fn from_records(records: &[Value]) -> Result<Vec<Self>, PricingError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Self::from_record(record).map_err(|source| PricingError::InBatch {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

/// Canonical form of a key: lowercase, without separators.
fn canonical(key: &str) -> String {
    key.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds the first alias present in the record, in alias priority order.
fn field<'a>(obj: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|alias| {
        obj.iter()
            .find(|(key, value)| !value.is_null() && canonical(key) == *alias)
            .map(|(_, value)| value)
    })
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn count(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(parsed).ok().filter(|n| *n > 0)
}
