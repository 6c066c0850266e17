use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Root holding `categories/`, `subcategories/`, `products/` and
    /// `fulfilled-orders/`.
    pub content_dir: PathBuf,
    /// Public base URL used to build absolute product links, without a
    /// trailing slash.
    pub site_url: String,
    /// Contact number for enquiry deep links. Empty leaves the number out
    /// of the link and lets the messaging app ask for a recipient.
    pub whatsapp_number: String,
    /// Static regeneration interval advertised through `Cache-Control`.
    pub revalidate_secs: u64,
    pub serve_inactive_by_slug: bool,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("content_dir", &self.content_dir)
            .field("site_url", &self.site_url)
            .field(
                "whatsapp_number",
                &if self.whatsapp_number.is_empty() {
                    "[unset]"
                } else {
                    "[redacted]"
                },
            )
            .field("revalidate_secs", &self.revalidate_secs)
            .field("serve_inactive_by_slug", &self.serve_inactive_by_slug)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
