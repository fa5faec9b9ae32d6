pub mod amount;
pub mod currency;
pub mod form;
pub mod order;
pub mod resolver;

pub use currency::{supported_currencies, validate_currency};
pub use form::{build, FormDescriptor, FormMethod};
pub use order::{MerchantConfig, OrderContext, OrderItem};
pub use resolver::{CallbackUrlResolver, CallbackUrls, StaticUrlResolver, UrlResolver};
