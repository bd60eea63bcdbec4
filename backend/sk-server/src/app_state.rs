use crate::Metrics;

use sk_auth::{Authenticator, LoginRateLimiter, TokenService};
use sk_config::PaginationConfig;
use sk_db::UserRepository;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state for every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub tokens: Arc<TokenService>,
    pub authenticator: Arc<Authenticator<UserRepository>>,
    pub login_limiter: Arc<LoginRateLimiter>,
    pub pagination: PaginationConfig,
    pub metrics: Metrics,
    /// Set when a Prometheus recorder is installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        tokens: TokenService,
        login_limiter: LoginRateLimiter,
        pagination: PaginationConfig,
    ) -> Self {
        let users = UserRepository::new(pool.clone());
        let tokens = Arc::new(tokens);
        let authenticator = Arc::new(Authenticator::new(users.clone(), Arc::clone(&tokens)));

        Self {
            pool,
            users,
            tokens,
            authenticator,
            login_limiter: Arc::new(login_limiter),
            pagination,
            metrics: Metrics::new(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
