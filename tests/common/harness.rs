use std::net::SocketAddr;
use std::sync::Arc;

use chrono::NaiveTime;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use nearbite::gateway::Clock;
use nearbite::{
    Catalog, HandlerState, MockCacheBackend, MockRestaurantStore, RestaurantService,
    ServiceSettings, create_router_with_state,
};

pub struct TestServerConfig {
    pub catalog: Catalog,
    pub cache_available: bool,
    pub settings: ServiceSettings,
    pub clock: Clock,
}

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).expect("valid time")
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            catalog: super::fixtures::catalog(),
            cache_available: true,
            settings: ServiceSettings::default(),
            clock: noon,
        }
    }
}

pub struct TestServer {
    addr: SocketAddr,
    pub store: Arc<MockRestaurantStore>,
    pub cache: Arc<MockCacheBackend>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_test_server(config: TestServerConfig) -> anyhow::Result<TestServer> {
    let store = Arc::new(MockRestaurantStore::from_catalog(config.catalog));
    let cache = Arc::new(MockCacheBackend::new());
    cache.set_available(config.cache_available);

    let service =
        RestaurantService::with_settings(Arc::clone(&cache), Arc::clone(&store), config.settings);
    let app = create_router_with_state(HandlerState::with_clock(Arc::new(service), config.clock));

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestServer {
        addr,
        store,
        cache,
        handle,
    })
}
