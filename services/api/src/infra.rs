use job_board::board::accounts::{AccountService, PasswordHasher};
use job_board::board::applications::ApplicationService;
use job_board::board::jobs::JobService;
use job_board::board::memory::{
    InMemoryApplicationRepository, InMemoryJobRepository, InMemoryUserRepository,
};
use job_board::config::{AuthConfig, BoardConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type Jobs = JobService<InMemoryJobRepository, InMemoryApplicationRepository>;
pub(crate) type Applications =
    ApplicationService<InMemoryJobRepository, InMemoryApplicationRepository>;
pub(crate) type Accounts = AccountService<InMemoryUserRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Services wired over one set of in-memory stores.
#[derive(Clone)]
pub(crate) struct Board {
    pub(crate) jobs: Arc<Jobs>,
    pub(crate) applications: Arc<Applications>,
    pub(crate) accounts: Arc<Accounts>,
}

impl Board {
    pub(crate) fn in_memory(auth: AuthConfig, board: BoardConfig) -> Self {
        let job_store = Arc::new(InMemoryJobRepository::default());
        let application_store = Arc::new(InMemoryApplicationRepository::default());
        let user_store = Arc::new(InMemoryUserRepository::default());

        Self {
            jobs: Arc::new(JobService::new(
                job_store.clone(),
                application_store.clone(),
                board.page_size,
            )),
            applications: Arc::new(ApplicationService::new(job_store, application_store)),
            accounts: Arc::new(AccountService::new(user_store, PasswordHasher::new(auth))),
        }
    }
}
