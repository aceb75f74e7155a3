#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use kortlink::application::services::{LinkService, LinkServiceSettings};
use kortlink::domain::entities::ShortLink;
use kortlink::infrastructure::cache::MemoryCache;
use kortlink::infrastructure::persistence::MemoryLinkRepository;
use kortlink::routes::build_router;
use kortlink::state::AppState;
use std::sync::Arc;

/// Application state over in-memory backends, with handles to both so tests
/// can inspect or tamper with them directly.
pub struct TestContext {
    pub repository: Arc<MemoryLinkRepository>,
    pub cache: Arc<MemoryCache>,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let repository = Arc::new(MemoryLinkRepository::new());
        let cache = Arc::new(MemoryCache::new());

        let link_service = Arc::new(LinkService::new(
            repository.clone(),
            cache.clone(),
            LinkServiceSettings::default(),
        ));

        Self {
            repository,
            cache,
            state: AppState::new(link_service),
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Creates a link through the service, which also warms the cache.
    pub async fn create_link(&self, original_url: &str) -> ShortLink {
        self.state
            .link_service
            .create_short_link(original_url)
            .await
            .unwrap()
    }
}
