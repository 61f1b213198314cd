//! Job application aggregate.

use super::{ApplicationDomainError, ApplicationId, ApplicationStatus};
use crate::{
    owner::UserId,
    text::{trimmed, trimmed_list},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated user input describing a new application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationDetails {
    company_name: String,
    role: String,
    tech_stack: Vec<String>,
    application_link: Option<String>,
    date_applied: Option<DateTime<Utc>>,
    status: ApplicationStatus,
    notes: Option<String>,
}

impl ApplicationDetails {
    /// Creates details with the two required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::EmptyCompanyName`] or
    /// [`ApplicationDomainError::EmptyRole`] when either is blank.
    pub fn new(
        company_name: impl AsRef<str>,
        role: impl AsRef<str>,
    ) -> Result<Self, ApplicationDomainError> {
        Ok(Self {
            company_name: trimmed(company_name.as_ref())
                .ok_or(ApplicationDomainError::EmptyCompanyName)?,
            role: trimmed(role.as_ref()).ok_or(ApplicationDomainError::EmptyRole)?,
            tech_stack: Vec::new(),
            application_link: None,
            date_applied: None,
            status: ApplicationStatus::default(),
            notes: None,
        })
    }

    /// Sets the technologies listed for the role.
    #[must_use]
    pub fn with_tech_stack<I, S>(mut self, tech_stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tech_stack = trimmed_list(tech_stack);
        self
    }

    /// Sets the posting or portal link.
    #[must_use]
    pub fn with_application_link(mut self, link: impl AsRef<str>) -> Self {
        self.application_link = trimmed(link.as_ref());
        self
    }

    /// Backdates (or postdates) the application. Defaults to creation time.
    #[must_use]
    pub const fn applied_at(mut self, date_applied: DateTime<Utc>) -> Self {
        self.date_applied = Some(date_applied);
        self
    }

    /// Sets the initial pipeline status. Defaults to applied.
    #[must_use]
    pub const fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets free-form notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl AsRef<str>) -> Self {
        self.notes = trimmed(notes.as_ref());
        self
    }
}

/// Job application aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    id: ApplicationId,
    owner: UserId,
    company_name: String,
    role: String,
    tech_stack: Vec<String>,
    application_link: Option<String>,
    date_applied: DateTime<Utc>,
    status: ApplicationStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedApplicationData {
    /// Persisted application identifier.
    pub id: ApplicationId,
    /// Owning user.
    pub owner: UserId,
    /// Persisted company name.
    pub company_name: String,
    /// Persisted role.
    pub role: String,
    /// Persisted technology list.
    pub tech_stack: Vec<String>,
    /// Persisted link, if any.
    pub application_link: Option<String>,
    /// Persisted application date.
    pub date_applied: DateTime<Utc>,
    /// Persisted pipeline status.
    pub status: ApplicationStatus,
    /// Persisted notes, if any.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    /// Creates a new application, dated now unless the details say otherwise.
    #[must_use]
    pub fn new(owner: UserId, details: ApplicationDetails, clock: &impl Clock) -> Self {
        let ApplicationDetails {
            company_name,
            role,
            tech_stack,
            application_link,
            date_applied,
            status,
            notes,
        } = details;
        let now = clock.utc();

        Self {
            id: ApplicationId::new(),
            owner,
            company_name,
            role,
            tech_stack,
            application_link,
            date_applied: date_applied.unwrap_or(now),
            status,
            notes,
            created_at: now,
        }
    }

    /// Reconstructs an application from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedApplicationData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            company_name: data.company_name,
            role: data.role,
            tech_stack: data.tech_stack,
            application_link: data.application_link,
            date_applied: data.date_applied,
            status: data.status,
            notes: data.notes,
            created_at: data.created_at,
        }
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the company name.
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Returns the role applied for.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the technologies listed for the role, in entry order.
    #[must_use]
    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    /// Returns the posting link, if any.
    #[must_use]
    pub fn application_link(&self) -> Option<&str> {
        self.application_link.as_deref()
    }

    /// Returns when the application was submitted.
    #[must_use]
    pub const fn date_applied(&self) -> DateTime<Utc> {
        self.date_applied
    }

    /// Returns the pipeline status.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns when the record was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the company name.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::EmptyCompanyName`] if it is blank.
    pub fn set_company_name(
        &mut self,
        company_name: impl AsRef<str>,
    ) -> Result<(), ApplicationDomainError> {
        self.company_name =
            trimmed(company_name.as_ref()).ok_or(ApplicationDomainError::EmptyCompanyName)?;
        Ok(())
    }

    /// Replaces the role.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::EmptyRole`] if it is blank.
    pub fn set_role(&mut self, role: impl AsRef<str>) -> Result<(), ApplicationDomainError> {
        self.role = trimmed(role.as_ref()).ok_or(ApplicationDomainError::EmptyRole)?;
        Ok(())
    }

    /// Replaces the technology list.
    pub fn set_tech_stack<I, S>(&mut self, tech_stack: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tech_stack = trimmed_list(tech_stack);
    }

    /// Replaces or clears the posting link.
    pub fn set_application_link(&mut self, link: Option<String>) {
        self.application_link = link.as_deref().and_then(trimmed);
    }

    /// Moves the application date.
    pub const fn set_date_applied(&mut self, date_applied: DateTime<Utc>) {
        self.date_applied = date_applied;
    }

    /// Moves the application through the pipeline.
    pub const fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    /// Replaces or clears the notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.as_deref().and_then(trimmed);
    }
}
