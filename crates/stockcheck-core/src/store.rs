//! Domain values shared by the fetcher, the recorder, and the response payload.

use serde::{Deserialize, Deserializer, Serialize};

/// A normalized 5-digit postal code.
///
/// Held as the integer formed by the first five digits of the input, so
/// leading zeros are not preserved (`"02134"` becomes `2134`). Display and
/// serialization both use that integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostalCode(u32);

impl PostalCode {
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    pub(crate) fn from_digits(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One store entry from the availability API's `stores` array.
///
/// Field names mirror the upstream JSON so the entry can be echoed back to
/// callers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    #[serde(rename = "storeID", deserialize_with = "string_or_number")]
    pub store_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "string_or_number")]
    pub postal_code: String,
    pub store_type: String,
    #[serde(default)]
    pub min_pickup_hours: Option<f64>,
    pub low_stock: bool,
    pub distance: f64,
}

/// Accepts `"1118"` and `1118` alike; the upstream API is not consistent
/// about quoting numeric identifiers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_record_parses_upstream_shape() {
        let raw = serde_json::json!({
            "storeID": "1118",
            "name": "Richmond West Broad",
            "address": "9901 W Broad St",
            "city": "Glen Allen",
            "state": "VA",
            "postalCode": "23060",
            "storeType": "Big Box",
            "minPickupHours": 1,
            "lowStock": true,
            "distance": 7.83
        });
        let store: StoreRecord = serde_json::from_value(raw).expect("should parse");
        assert_eq!(store.store_id, "1118");
        assert_eq!(store.postal_code, "23060");
        assert_eq!(store.min_pickup_hours, Some(1.0));
        assert!(store.low_stock);
    }

    #[test]
    fn numeric_store_id_is_accepted() {
        let raw = serde_json::json!({
            "storeID": 281,
            "name": "Short Pump",
            "address": "11000 W Broad St",
            "city": "Glen Allen",
            "state": "VA",
            "postalCode": 23060,
            "storeType": "Big Box",
            "lowStock": false,
            "distance": 9.1
        });
        let store: StoreRecord = serde_json::from_value(raw).expect("should parse");
        assert_eq!(store.store_id, "281");
        assert_eq!(store.postal_code, "23060");
        assert!(store.min_pickup_hours.is_none());
    }

    #[test]
    fn store_record_serializes_with_upstream_field_names() {
        let store = StoreRecord {
            store_id: "1118".to_string(),
            name: "Richmond West Broad".to_string(),
            address: "9901 W Broad St".to_string(),
            city: "Glen Allen".to_string(),
            state: "VA".to_string(),
            postal_code: "23060".to_string(),
            store_type: "Big Box".to_string(),
            min_pickup_hours: None,
            low_stock: false,
            distance: 7.5,
        };
        let json = serde_json::to_value(&store).expect("serialize");
        assert_eq!(json["storeID"], "1118");
        assert_eq!(json["postalCode"], "23060");
        assert_eq!(json["storeType"], "Big Box");
        assert_eq!(json["lowStock"], false);
    }

    #[test]
    fn postal_code_displays_without_padding() {
        assert_eq!(PostalCode::from_digits(2134).to_string(), "2134");
        assert_eq!(
            serde_json::to_value(PostalCode::from_digits(23223)).expect("serialize"),
            serde_json::json!(23223)
        );
    }
}
