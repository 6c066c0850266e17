pub mod app_config;
pub mod categories;
pub mod config;
mod de;
pub mod enquiry;
pub mod fulfilled_orders;
pub mod products;
pub mod reference;

pub use app_config::{AppConfig, Environment};
pub use categories::{Category, CategoryWithSubs, Subcategory};
pub use config::{load_app_config, load_app_config_from_env};
pub use enquiry::EnquiryLinks;
pub use fulfilled_orders::FulfilledOrder;
pub use products::{Product, ProductImage};
pub use reference::{slug_from_reference, slugify};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
