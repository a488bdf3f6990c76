use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::{null_as_default, Currency};

/// Fraud-scoring payload attached to a payment.
///
/// The common block is typed. Vertical-specific sections such as
/// `retail_transaction_data` or `travel_transaction_data` are kept in
/// `extra` as raw JSON and re-emitted unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudDetectionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_cs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_unique_id: Option<String>,
    /// Scoring outcome, only present in service responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_to: Option<BillTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_totals: Option<PurchaseTotals>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_in_site: Option<CustomerInSite>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseTotals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInSite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_in_site: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_guest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_of_transactions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cellphone_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vertical_sections_survive_round_trip() {
        let raw = json!({
            "send_to_cs": true,
            "channel": "Web",
            "bill_to": { "city": "Buenos Aires", "country": "AR" },
            "purchase_totals": { "currency": "ARS", "amount": 12444 },
            "retail_transaction_data": {
                "ship_to": { "city": "Buenos Aires" },
                "items": [{ "code": "popblacksabbat2016", "quantity": 1 }]
            }
        });

        let data: FraudDetectionData = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(data.send_to_cs, Some(true));
        assert_eq!(data.channel.as_deref(), Some("Web"));
        assert_eq!(
            data.purchase_totals,
            Some(PurchaseTotals {
                currency: Some(Currency::Ars),
                amount: 12444,
            })
        );
        assert!(data.extra.contains_key("retail_transaction_data"));

        assert_eq!(serde_json::to_value(&data).unwrap(), raw);
    }

    #[test]
    fn test_purchase_totals_accept_any_currency_and_null_amount() {
        let totals: PurchaseTotals =
            serde_json::from_value(json!({ "currency": "EUR", "amount": null })).unwrap();
        assert_eq!(totals.currency, Some(Currency::Other("EUR".to_string())));
        assert_eq!(totals.amount, 0);
    }

    #[test]
    fn test_empty_payload_serializes_to_empty_object() {
        let json = serde_json::to_value(FraudDetectionData::default()).unwrap();
        assert_eq!(json, json!({}));
    }
}
