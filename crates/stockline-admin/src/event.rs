//! # Change Events
//!
//! The notification payload delivered by the backing store's subscription
//! channel. The refresh agent does not interpret payloads beyond logging -
//! any event triggers a full reload - but the shape is kept so the frontend
//! bindings and future filtering have the real data.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Event Kind
// =============================================================================

/// The kind of change a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

// =============================================================================
// Table
// =============================================================================

/// Which catalog table a notification is about.
///
/// Serialized names match the persisted table names (the type table is
/// called `Type` in the schema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CatalogTable {
    Products,
    Brands,
    #[serde(rename = "Type")]
    Types,
}

// =============================================================================
// Change Event
// =============================================================================

/// A single change notification.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    /// What happened.
    #[serde(rename = "eventType")]
    pub kind: ChangeKind,

    /// Which table it happened to.
    pub table: CatalogTable,

    /// The affected row as the store serialized it, when provided.
    #[ts(type = "any | null")]
    pub payload: Option<serde_json::Value>,
}

impl ChangeEvent {
    /// Creates an event without a payload.
    pub fn new(kind: ChangeKind, table: CatalogTable) -> Self {
        ChangeEvent {
            kind,
            table,
            payload: None,
        }
    }

    /// Attaches the affected row's JSON.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let event = ChangeEvent::new(ChangeKind::Insert, CatalogTable::Products);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["eventType"], "INSERT");
        assert_eq!(json["table"], "Products");
        assert!(json["payload"].is_null());
    }

    #[test]
    fn test_type_table_keeps_legacy_name() {
        let event = ChangeEvent::new(ChangeKind::Delete, CatalogTable::Types);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["table"], "Type");
        assert_eq!(json["eventType"], "DELETE");
    }

    #[test]
    fn test_deserializes_store_payload() {
        let raw = r#"{"eventType":"UPDATE","table":"Brands","payload":{"Bid":1,"Brand":"Nyke"}}"#;
        let event: ChangeEvent = serde_json::from_str(raw).unwrap();

        assert_eq!(event.kind, ChangeKind::Update);
        assert_eq!(event.table, CatalogTable::Brands);
        assert_eq!(event.payload.unwrap()["Brand"], "Nyke");
    }
}
