use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One leg of a distributed payment.
///
/// `amount` is a percentage for `distributed%` payments and minor units for
/// `distributed$` payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: i64,
}
