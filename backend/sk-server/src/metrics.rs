use metrics::{counter, gauge};

/// Counters for the authentication and user endpoints
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "sk_server" }
    }

    pub fn login_succeeded(&self) {
        counter!(format!("{}.login.succeeded", self.prefix)).increment(1);
    }

    pub fn login_failed(&self) {
        counter!(format!("{}.login.failed", self.prefix)).increment(1);
    }

    pub fn login_rate_limited(&self) {
        counter!(format!("{}.login.rate_limited", self.prefix)).increment(1);
    }

    /// `reason` is the auth error code, or `missing_header`
    pub fn auth_rejected(&self, reason: &str) {
        counter!(format!("{}.auth.rejected", self.prefix)).increment(1);
        counter!(format!("{}.auth.rejected.{}", self.prefix, reason.to_lowercase())).increment(1);
    }

    pub fn user_created(&self) {
        counter!(format!("{}.users.created", self.prefix)).increment(1);
    }

    /// Record a limiter sweep
    pub fn rate_limit_swept(&self, removed: usize, remaining: usize) {
        counter!(format!("{}.rate_limit.swept", self.prefix)).increment(removed as u64);
        gauge!(format!("{}.rate_limit.tracked_keys", self.prefix)).set(remaining as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
