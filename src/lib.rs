pub mod app;
pub mod models;
pub mod services;
pub mod utils;

pub use app::config::Config;
pub use models::{
    BillTo, Currency, CustomerInSite, FraudDetectionData, Payment, PaymentType, PurchaseTotals,
    SubPayment, User,
};
pub use services::{ClientError, PaymentClient, WireError};
