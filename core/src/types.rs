//! Domain DTOs for the medicines API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Backends differ in how they encode ids and numeric fields (JSON strings
//! vs numbers), so both are accepted on input and held as text.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a medicine. Opaque to the client.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MedicineId(String);

impl MedicineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MedicineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MedicineId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text_or_number(deserializer).map(MedicineId)
    }
}

/// A single medicine record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Medicine {
    pub id: MedicineId,
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(deserialize_with = "text_or_number")]
    pub stock: String,
}

impl Medicine {
    /// The editable fields of this record, without its id.
    pub fn details(&self) -> MedicineDetails {
        MedicineDetails {
            name: self.name.clone(),
            price: self.price.clone(),
            stock: self.stock.clone(),
        }
    }
}

/// Request payload for create and update, and the state of the edit form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineDetails {
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(deserialize_with = "text_or_number")]
    pub stock: String,
}

impl MedicineDetails {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    /// True when no field is empty. Content is not checked beyond that.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.price.is_empty() && !self.stock.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Number(n) => n.to_string(),
    })
}
