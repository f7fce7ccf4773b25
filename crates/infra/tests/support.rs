use std::sync::{Arc, Once};

use ranksync_domain::Config;
use ranksync_infra::{HttpSyncClient, StaticConfigStore};

pub const TEST_TOKEN: &str = "test-token";

static TRACING: Once = Once::new();

/// Route client logs to the test harness output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("ranksync=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Config pointing at `endpoint` with a known token and API call logging on.
pub fn config_for(endpoint: &str) -> Config {
    let mut config = Config::default();
    config.api.endpoint = endpoint.to_owned();
    config.api.token = TEST_TOKEN.to_owned();
    config.logging.log_api_calls = true;
    config
}

/// Client plus the store backing it, so tests can swap config mid-run.
pub fn client(endpoint: &str) -> (HttpSyncClient, Arc<StaticConfigStore>) {
    init_tracing();
    let store = Arc::new(StaticConfigStore::new(config_for(endpoint)));
    let client = HttpSyncClient::new(store.clone()).expect("http sync client");
    (client, store)
}
