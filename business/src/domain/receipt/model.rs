use serde::Deserialize;

use super::errors::ReceiptError;
use super::value_objects::{ReceiptId, Total};

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A parsed purchase receipt. Only lives for the duration of one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: Total,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ReceiptDocument {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Option<Vec<ItemDocument>>,
    total: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ItemDocument {
    short_description: String,
    price: String,
}

impl Receipt {
    /// Parses a submitted JSON document.
    ///
    /// Missing fields default to empty values, so a receipt without a total
    /// fails on the total pattern rather than on the JSON shape.
    pub fn from_json(raw: &[u8]) -> Result<Self, ReceiptError> {
        let document: ReceiptDocument =
            serde_json::from_slice(raw).map_err(|_| ReceiptError::MalformedDocument)?;

        let total = Total::parse(&document.total)?;

        Ok(Self {
            retailer: document.retailer,
            purchase_date: document.purchase_date,
            purchase_time: document.purchase_time,
            items: document
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|item| Item {
                    short_description: item.short_description,
                    price: item.price,
                })
                .collect(),
            total,
        })
    }
}

/// Points stored for a submitted receipt. Never mutated once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
}

impl ScoreRecord {
    pub fn new(id: ReceiptId, points: u64) -> Self {
        Self { id, points }
    }
}
