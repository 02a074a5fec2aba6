use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rxlens::api;
use rxlens::config;
use rxlens::core_state::CoreState;
use rxlens::knowledge::DrugTable;
use rxlens::pipeline::{EntityProvider, HfNerClient, NullProvider};

// State is built before the runtime starts: the NER client is a
// blocking reqwest client and must not be constructed on a runtime
// thread.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let table = match config::drug_table_path() {
        Some(path) => match DrugTable::from_json_file(&path) {
            Ok(table) => {
                tracing::info!(path = %path.display(), drugs = table.len(), "Loaded drug table");
                table
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot load drug table, using builtin");
                DrugTable::builtin()
            }
        },
        None => DrugTable::builtin(),
    };

    let provider: Arc<dyn EntityProvider> = match config::ner_url() {
        Some(url) => {
            tracing::info!(url = %url, "Using hosted NER endpoint");
            Arc::new(HfNerClient::new(&url, config::ner_token(), 60))
        }
        None => {
            tracing::info!("No NER endpoint configured, extraction is regex-only");
            Arc::new(NullProvider)
        }
    };

    let core = Arc::new(CoreState::new(table, provider));

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = runtime.block_on(api::serve(config::bind_addr(), core)) {
        tracing::error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
