use serde::{Deserialize, Serialize};
use std::fmt;

use super::{null_as_default, Currency, FraudDetectionData, SubPayment, User};

/// Payment exchanged with the Decidir payment service.
///
/// Plain data: every field is public and independent, nothing is validated.
/// `id` stays `0` until the service assigns one in its response. An explicit
/// `null` on the wire decodes like a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collector: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Minor units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub installments: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    /// Only meaningful for distributed payment types.
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub sub_payments: Vec<SubPayment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fraud_detection: Option<FraudDetectionData>,
}

impl Payment {
    pub fn new() -> Self {
        Self::default()
    }
}

/// How `sub_payments` are interpreted.
///
/// Unrecognised strings are kept verbatim in `Other` so they survive a
/// decode/encode cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentType {
    Single,
    /// `distributed%`: sub-payment amounts are percentages.
    DistributedPercentage,
    /// `distributed$`: sub-payment amounts are minor units.
    DistributedAmount,
    Other(String),
}

impl PaymentType {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentType::Single => "single",
            PaymentType::DistributedPercentage => "distributed%",
            PaymentType::DistributedAmount => "distributed$",
            PaymentType::Other(raw) => raw,
        }
    }

    pub fn is_distributed(&self) -> bool {
        matches!(
            self,
            PaymentType::DistributedPercentage | PaymentType::DistributedAmount
        )
    }
}

impl From<String> for PaymentType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "single" => PaymentType::Single,
            "distributed%" => PaymentType::DistributedPercentage,
            "distributed$" => PaymentType::DistributedAmount,
            _ => PaymentType::Other(raw),
        }
    }
}

impl From<&str> for PaymentType {
    fn from(raw: &str) -> Self {
        PaymentType::from(raw.to_string())
    }
}

impl From<PaymentType> for String {
    fn from(payment_type: PaymentType) -> Self {
        match payment_type {
            PaymentType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
