//! Job application orchestration, including the goal fan-out trigger.

use crate::application::{
    domain::{
        ApplicationDetails, ApplicationDomainError, ApplicationId, ApplicationStatus,
        JobApplication,
    },
    ports::{ApplicationRepository, ApplicationRepositoryError},
};
use crate::error::{ClassifiedError, FailureKind};
use crate::goal::{
    ports::{GoalRepository, GoalRepositoryError},
    services::GoalProgressService,
};
use crate::owner::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Request to record a new job application.
///
/// The status arrives as its canonical string and is validated before
/// anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordApplicationRequest {
    company_name: String,
    role: String,
    tech_stack: Vec<String>,
    application_link: Option<String>,
    date_applied: Option<DateTime<Utc>>,
    status: Option<String>,
    notes: Option<String>,
}

impl RecordApplicationRequest {
    /// Creates a request with the required company name and role.
    #[must_use]
    pub fn new(company_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            role: role.into(),
            tech_stack: Vec::new(),
            application_link: None,
            date_applied: None,
            status: None,
            notes: None,
        }
    }

    /// Sets the technologies listed for the role.
    #[must_use]
    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech_stack.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the posting link.
    #[must_use]
    pub fn with_application_link(mut self, link: impl Into<String>) -> Self {
        self.application_link = Some(link.into());
        self
    }

    /// Sets the application date. Defaults to the time of recording.
    #[must_use]
    pub const fn with_date_applied(mut self, date_applied: DateTime<Utc>) -> Self {
        self.date_applied = Some(date_applied);
        self
    }

    /// Sets the initial status. Defaults to `applied`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    fn into_details(self) -> Result<ApplicationDetails, ApplicationDomainError> {
        let Self {
            company_name,
            role,
            tech_stack,
            application_link,
            date_applied,
            status,
            notes,
        } = self;

        let mut details = ApplicationDetails::new(company_name, role)?.with_tech_stack(tech_stack);
        if let Some(raw_status) = status {
            details = details.with_status(ApplicationStatus::try_from(raw_status.as_str())?);
        }
        if let Some(link) = application_link {
            details = details.with_application_link(link);
        }
        if let Some(date) = date_applied {
            details = details.applied_at(date);
        }
        if let Some(text) = notes {
            details = details.with_notes(text);
        }
        Ok(details)
    }
}

/// Partial update for an existing application. Unset fields are left
/// unchanged; the owner never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateApplicationRequest {
    company_name: Option<String>,
    role: Option<String>,
    tech_stack: Option<Vec<String>>,
    application_link: Option<Option<String>>,
    date_applied: Option<DateTime<Utc>>,
    status: Option<String>,
    notes: Option<Option<String>>,
}

impl UpdateApplicationRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the company name.
    #[must_use]
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Replaces the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Replaces the technology list.
    #[must_use]
    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = Some(tech_stack.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces or clears (`None`) the posting link.
    #[must_use]
    pub fn with_application_link(mut self, link: Option<String>) -> Self {
        self.application_link = Some(link);
        self
    }

    /// Moves the application date.
    #[must_use]
    pub const fn with_date_applied(mut self, date_applied: DateTime<Utc>) -> Self {
        self.date_applied = Some(date_applied);
        self
    }

    /// Moves the application through the pipeline.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Replaces or clears (`None`) the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    fn apply_to(self, application: &mut JobApplication) -> Result<(), ApplicationDomainError> {
        let Self {
            company_name,
            role,
            tech_stack,
            application_link,
            date_applied,
            status,
            notes,
        } = self;

        let mut edited = application.clone();
        if let Some(new_company) = company_name {
            edited.set_company_name(new_company)?;
        }
        if let Some(new_role) = role {
            edited.set_role(new_role)?;
        }
        if let Some(raw_status) = status {
            edited.set_status(ApplicationStatus::try_from(raw_status.as_str())?);
        }
        if let Some(new_stack) = tech_stack {
            edited.set_tech_stack(new_stack);
        }
        if let Some(new_link) = application_link {
            edited.set_application_link(new_link);
        }
        if let Some(new_date) = date_applied {
            edited.set_date_applied(new_date);
        }
        if let Some(new_notes) = notes {
            edited.set_notes(new_notes);
        }

        *application = edited;
        Ok(())
    }
}

/// Service-level errors for job application operations.
#[derive(Debug, Error)]
pub enum ApplicationServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ApplicationDomainError),
    /// The application does not exist for the acting user.
    #[error("job application not found: {0}")]
    NotFound(ApplicationId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ApplicationRepositoryError),
    /// The application was saved but goal progress could not be advanced.
    #[error("goal progress not updated for application {application_id}: {source}")]
    GoalProgressLagging {
        /// The application that was persisted.
        application_id: ApplicationId,
        /// The goal store failure.
        #[source]
        source: GoalRepositoryError,
    },
}

impl ClassifiedError for ApplicationServiceError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Domain(_) => FailureKind::Validation,
            Self::NotFound(_) | Self::Repository(ApplicationRepositoryError::NotFound(_)) => {
                FailureKind::NotFound
            }
            Self::Repository(_) | Self::GoalProgressLagging { .. } => FailureKind::Store,
        }
    }
}

/// Result type for application service operations.
pub type ApplicationServiceResult<T> = Result<T, ApplicationServiceError>;

/// Job application management service.
#[derive(Clone)]
pub struct ApplicationService<A, G, C>
where
    A: ApplicationRepository,
    G: GoalRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<A>,
    progress: GoalProgressService<G, C>,
    clock: Arc<C>,
}

impl<A, G, C> ApplicationService<A, G, C>
where
    A: ApplicationRepository,
    G: GoalRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new application service that feeds `progress`.
    #[must_use]
    pub const fn new(
        repository: Arc<A>,
        progress: GoalProgressService<G, C>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            repository,
            progress,
            clock,
        }
    }

    /// Validates and persists a new application, then advances every open
    /// job-application goal whose window contains the current instant.
    ///
    /// The application stays persisted when the fan-out fails.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationServiceError::Domain`] before any write when a
    /// field is invalid, [`ApplicationServiceError::Repository`] when the
    /// application cannot be stored, and
    /// [`ApplicationServiceError::GoalProgressLagging`] when it was stored
    /// but goal progress could not be updated.
    pub async fn record(
        &self,
        owner: UserId,
        request: RecordApplicationRequest,
    ) -> ApplicationServiceResult<JobApplication> {
        let details = request.into_details()?;
        let application = JobApplication::new(owner, details, &*self.clock);
        self.repository.store(&application).await?;
        debug!(
            application_id = %application.id(),
            %owner,
            status = %application.status(),
            "job application recorded"
        );

        match self
            .progress
            .on_application_recorded(owner, self.clock.utc())
            .await
        {
            Ok(report) => {
                debug!(
                    application_id = %application.id(),
                    incremented = report.incremented,
                    completed = report.completed,
                    "goal progress updated"
                );
                Ok(application)
            }
            Err(source) => {
                warn!(
                    application_id = %application.id(),
                    %owner,
                    error = %source,
                    "goal progress lagging behind recorded application"
                );
                Err(ApplicationServiceError::GoalProgressLagging {
                    application_id: application.id(),
                    source,
                })
            }
        }
    }

    /// Lists the owner's applications, most recently applied first.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, owner: UserId) -> ApplicationServiceResult<Vec<JobApplication>> {
        Ok(self.repository.list(owner).await?)
    }

    /// Retrieves one of the owner's applications.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationServiceError::NotFound`] when the application
    /// does not exist or belongs to another user.
    pub async fn get(
        &self,
        owner: UserId,
        id: ApplicationId,
    ) -> ApplicationServiceResult<JobApplication> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(ApplicationServiceError::NotFound(id))
    }

    /// Applies a partial update. Editing never triggers the goal fan-out.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationServiceError::NotFound`] for a missing or foreign
    /// application, [`ApplicationServiceError::Domain`] for an invalid field,
    /// or [`ApplicationServiceError::Repository`] when persistence fails.
    pub async fn update(
        &self,
        owner: UserId,
        id: ApplicationId,
        request: UpdateApplicationRequest,
    ) -> ApplicationServiceResult<JobApplication> {
        let mut application = self.get(owner, id).await?;
        request.apply_to(&mut application)?;
        self.repository.update(&application).await?;
        Ok(application)
    }

    /// Deletes one of the owner's applications. Goal progress is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationServiceError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, owner: UserId, id: ApplicationId) -> ApplicationServiceResult<()> {
        if self.repository.delete(owner, id).await? {
            Ok(())
        } else {
            Err(ApplicationServiceError::NotFound(id))
        }
    }
}
