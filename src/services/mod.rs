pub mod payment_client;
pub mod wire;

pub use payment_client::{ClientError, PaymentClient};
pub use wire::WireError;
