//! Mutex-guarded in-memory repositories for local runs, demos and tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use super::accounts::{User, UserId, UserRepository};
use super::applications::{ApplicationRecord, ApplicationRepository};
use super::jobs::{Job, JobId, JobPage, JobQuery, JobRepository, SortOrder};
use super::RepositoryError;

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
}

#[derive(Default, Clone)]
pub struct InMemoryJobRepository {
    jobs: Arc<Mutex<Vec<Job>>>,
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = lock(&self.jobs)?;
        if guard
            .iter()
            .any(|existing| existing.id == job.id || existing.same_opening(&job))
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(job.clone());
        Ok(job)
    }

    fn fetch(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        let guard = lock(&self.jobs)?;
        Ok(guard.iter().find(|job| &job.id == id).cloned())
    }

    fn search(&self, query: &JobQuery) -> Result<JobPage, RepositoryError> {
        let guard = lock(&self.jobs)?;
        let mut matching: Vec<&Job> = guard
            .iter()
            .filter(|job| job.matches_search(&query.search))
            .collect();

        matching.sort_by(|a, b| {
            let ordering = a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id));
            match query.sort {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matching.len();
        let jobs = matching
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();

        Ok(JobPage { jobs, total })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryApplicationRepository {
    records: Arc<Mutex<Vec<ApplicationRecord>>>,
}

impl InMemoryApplicationRepository {
    pub fn len(&self) -> usize {
        self.records.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.iter().any(|existing| {
            existing.job_id == record.job_id && existing.candidate_id == record.candidate_id
        }) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn exists(&self, job_id: &JobId, candidate_id: &UserId) -> Result<bool, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard
            .iter()
            .any(|record| &record.job_id == job_id && &record.candidate_id == candidate_id))
    }

    fn for_job(&self, job_id: &JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard
            .iter()
            .filter(|record| &record.job_id == job_id)
            .cloned()
            .collect())
    }

    fn applied_jobs(&self, candidate_id: &UserId) -> Result<HashSet<JobId>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard
            .iter()
            .filter(|record| &record.candidate_id == candidate_id)
            .map(|record| record.job_id)
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<HashMap<UserId, User>>>,
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = lock(&self.users)?;
        if guard.contains_key(&user.id)
            || guard
                .values()
                .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(user.id, user.clone());
        Ok(user)
    }

    fn fetch(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let guard = lock(&self.users)?;
        Ok(guard.get(id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let email = email.trim();
        let guard = lock(&self.users)?;
        Ok(guard
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }
}
