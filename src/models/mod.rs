pub mod currency;
pub mod fraud_detection;
pub mod payment;
pub mod sub_payment;
pub mod user;

pub use currency::{Currency, UnknownCurrency};
pub use fraud_detection::{BillTo, CustomerInSite, FraudDetectionData, PurchaseTotals};
pub use payment::{Payment, PaymentType};
pub use sub_payment::SubPayment;
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
