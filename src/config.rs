use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "rxlens";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the HTTP API.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8600";

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{}=info,tower=warn", APP_NAME)
}

/// Bind address: `RXLENS_ADDR` or the default.
pub fn bind_addr() -> SocketAddr {
    std::env::var("RXLENS_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| DEFAULT_ADDR.parse().expect("default addr is valid"))
}

/// NER endpoint URL (`RXLENS_NER_URL`). None means run without a model:
/// the pipeline degrades to regex-only extraction.
pub fn ner_url() -> Option<String> {
    std::env::var("RXLENS_NER_URL").ok().filter(|s| !s.is_empty())
}

/// Bearer token for the NER endpoint (`RXLENS_NER_TOKEN`), if any.
pub fn ner_token() -> Option<String> {
    std::env::var("RXLENS_NER_TOKEN").ok().filter(|s| !s.is_empty())
}

/// Optional JSON drug table override path (`RXLENS_DRUG_TABLE`).
pub fn drug_table_path() -> Option<std::path::PathBuf> {
    std::env::var("RXLENS_DRUG_TABLE")
        .ok()
        .filter(|s| !s.is_empty())
        .map(std::path::PathBuf::from)
}
