/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | CATALOG_URL | (empty) | Published CSV source for the menu catalog |
/// | CATALOG_PROXIES | three public CORS proxies | Comma-separated proxy prefixes tried before the direct URL |
/// | REQUEST_TIMEOUT_MS | 30000 | Outbound request timeout |
/// | EMAILJS_ENDPOINT | api.emailjs.com send URL | Email delivery endpoint |
/// | EMAILJS_SERVICE_ID | (empty) | Email service id |
/// | EMAILJS_TEMPLATE_ID | (empty) | Email template id |
/// | EMAILJS_PUBLIC_KEY | (empty) | Email public key |
/// | WHATSAPP_NUMBER | (empty) | Destination number for wa.me links |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 CATALOG_URL=https://example.com/menu.csv cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,

    // === Catalog retrieval ===
    /// Direct URL of the published CSV catalog
    pub catalog_url: String,
    /// Proxy prefixes tried in order before the direct URL
    pub catalog_proxies: Vec<String>,
    /// Outbound request timeout (milliseconds)
    pub request_timeout_ms: u64,

    // === Submission channels ===
    pub emailjs_endpoint: String,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,
    pub whatsapp_number: String,
}

const DEFAULT_PROXIES: &[&str] = &[
    "https://corsproxy.io/?",
    "https://api.allorigins.win/raw?url=",
    "https://api.codetabs.com/v1/proxy?quest=",
];

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            catalog_url: std::env::var("CATALOG_URL").unwrap_or_default(),
            catalog_proxies: std::env::var("CATALOG_PROXIES")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| DEFAULT_PROXIES.iter().map(|s| s.to_string()).collect()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),

            emailjs_endpoint: std::env::var("EMAILJS_ENDPOINT")
                .unwrap_or_else(|_| "https://api.emailjs.com/api/v1.0/email/send".into()),
            emailjs_service_id: std::env::var("EMAILJS_SERVICE_ID").unwrap_or_default(),
            emailjs_template_id: std::env::var("EMAILJS_TEMPLATE_ID").unwrap_or_default(),
            emailjs_public_key: std::env::var("EMAILJS_PUBLIC_KEY").unwrap_or_default(),
            whatsapp_number: std::env::var("WHATSAPP_NUMBER").unwrap_or_default(),
        }
    }

    /// Override selected values, typically for tests
    pub fn with_overrides(http_port: u16, catalog_url: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.catalog_url = catalog_url.into();
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Whether the email channel has the credentials it needs
    pub fn email_configured(&self) -> bool {
        !self.emailjs_service_id.is_empty()
            && !self.emailjs_template_id.is_empty()
            && !self.emailjs_public_key.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
