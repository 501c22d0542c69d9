mod admin;
mod aem;
mod config;
mod refresh;

pub use admin::AdminConfig;
pub use aem::AemConfig;
pub use config::Config;
pub use refresh::RefreshConfig;
