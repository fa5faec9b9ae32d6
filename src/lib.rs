pub mod checkout;
pub mod config;
pub mod error;
pub mod server;
pub mod tools;

pub use checkout::{build, validate_currency, FormDescriptor, MerchantConfig, OrderContext, UrlResolver};
pub use error::CheckoutError;
