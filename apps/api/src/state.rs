use std::sync::Arc;

use tokio::sync::RwLock;

use crate::applications::store::ApplicationStore;
use crate::auth::accounts::AccountStore;
use crate::auth::token::TokenService;
use crate::config::Config;
use crate::faq::FaqBot;
use crate::matching::client::ResumeMatcher;
use crate::profiles::ProfileStore;
use crate::store::seed::seed_demo_data;
use crate::store::JobBoard;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Handlers needing both the board and the application list lock the board first.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<JobBoard>>,
    pub accounts: Arc<RwLock<AccountStore>>,
    pub profiles: Arc<RwLock<ProfileStore>>,
    pub applications: Arc<RwLock<ApplicationStore>>,
    pub tokens: TokenService,
    /// Pluggable matcher. Default: HttpResumeMatcher pointed at AI_MATCH_URL.
    pub matcher: Arc<dyn ResumeMatcher>,
    pub faq: Arc<FaqBot>,
}

impl AppState {
    pub fn new(config: &Config, matcher: Arc<dyn ResumeMatcher>) -> anyhow::Result<Self> {
        let tokens = TokenService::new(&config.jwt_secret, config.jwt_ttl_hours)?;

        let mut board = JobBoard::default();
        if config.seed_demo_data {
            seed_demo_data(&mut board);
        }

        Ok(Self {
            board: Arc::new(RwLock::new(board)),
            accounts: Arc::new(RwLock::new(AccountStore::default())),
            profiles: Arc::new(RwLock::new(ProfileStore::default())),
            applications: Arc::new(RwLock::new(ApplicationStore::default())),
            tokens,
            matcher,
            faq: Arc::new(FaqBot),
        })
    }
}
