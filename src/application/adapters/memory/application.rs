//! In-memory repository for job applications.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::application::{
    domain::{ApplicationId, ApplicationStatus, DailyApplicationCount, JobApplication},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};
use crate::calendar::{Calendar, TimeRange};
use crate::owner::UserId;

type ApplicationMap = HashMap<ApplicationId, JobApplication>;

/// Thread-safe in-memory application repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRepository {
    state: Arc<RwLock<ApplicationMap>>,
}

impl InMemoryApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> ApplicationRepositoryResult<RwLockReadGuard<'_, ApplicationMap>> {
        self.state.read().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ApplicationRepositoryResult<RwLockWriteGuard<'_, ApplicationMap>> {
        self.state.write().map_err(|err| {
            ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn count_where(
        &self,
        owner: UserId,
        predicate: impl Fn(&JobApplication) -> bool,
    ) -> ApplicationRepositoryResult<u64> {
        let applications = self.read()?;
        let matching = applications
            .values()
            .filter(|application| application.owner() == owner && predicate(application))
            .count();
        u64::try_from(matching).map_err(ApplicationRepositoryError::persistence)
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn store(&self, application: &JobApplication) -> ApplicationRepositoryResult<()> {
        let mut applications = self.write()?;
        if applications.contains_key(&application.id()) {
            return Err(ApplicationRepositoryError::DuplicateApplication(
                application.id(),
            ));
        }
        applications.insert(application.id(), application.clone());
        Ok(())
    }

    async fn update(&self, application: &JobApplication) -> ApplicationRepositoryResult<()> {
        let mut applications = self.write()?;
        let stored = applications
            .get_mut(&application.id())
            .filter(|stored| stored.owner() == application.owner())
            .ok_or(ApplicationRepositoryError::NotFound(application.id()))?;
        *stored = application.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<JobApplication>> {
        let applications = self.read()?;
        Ok(applications
            .get(&id)
            .filter(|application| application.owner() == owner)
            .cloned())
    }

    async fn list(&self, owner: UserId) -> ApplicationRepositoryResult<Vec<JobApplication>> {
        let applications = self.read()?;
        let mut owned: Vec<JobApplication> = applications
            .values()
            .filter(|application| application.owner() == owner)
            .cloned()
            .collect();
        owned.sort_by(|left, right| right.date_applied().cmp(&left.date_applied()));
        Ok(owned)
    }

    async fn delete(&self, owner: UserId, id: ApplicationId) -> ApplicationRepositoryResult<bool> {
        let mut applications = self.write()?;
        let is_owned = applications
            .get(&id)
            .is_some_and(|application| application.owner() == owner);
        if is_owned {
            applications.remove(&id);
        }
        Ok(is_owned)
    }

    async fn count_all(&self, owner: UserId) -> ApplicationRepositoryResult<u64> {
        self.count_where(owner, |_| true)
    }

    async fn count_applied_between(
        &self,
        owner: UserId,
        range: TimeRange,
    ) -> ApplicationRepositoryResult<u64> {
        self.count_where(owner, |application| {
            range.contains(application.date_applied())
        })
    }

    async fn count_by_status(
        &self,
        owner: UserId,
    ) -> ApplicationRepositoryResult<BTreeMap<ApplicationStatus, u64>> {
        let applications = self.read()?;
        let mut counts = BTreeMap::new();
        for application in applications
            .values()
            .filter(|application| application.owner() == owner)
        {
            let slot = counts.entry(application.status()).or_insert(0_u64);
            *slot = slot.saturating_add(1);
        }
        Ok(counts)
    }

    async fn daily_counts(
        &self,
        owner: UserId,
        since: DateTime<Utc>,
        calendar: &Calendar,
    ) -> ApplicationRepositoryResult<Vec<DailyApplicationCount>> {
        let applications = self.read()?;
        let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for application in applications.values().filter(|application| {
            application.owner() == owner && application.date_applied() >= since
        }) {
            let slot = per_day
                .entry(calendar.local_date(application.date_applied()))
                .or_insert(0);
            *slot = slot.saturating_add(1);
        }
        Ok(per_day
            .into_iter()
            .map(|(date, count)| DailyApplicationCount { date, count })
            .collect())
    }
}
