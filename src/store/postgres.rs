//! PostgreSQL-backed application store.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::models::{APPLICATION_COLUMNS, ApplicationRow, into_records};
use crate::config::AdminConfig;
use crate::domain::{
    ApplicationFilter, ApplicationId, ApplicationRecord, ApplicationStatus, NewApplication,
};
use crate::error::AdminError;

/// Application store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresApplicationStore {
    pool: PgPool,
}

impl PostgresApplicationStore {
    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] if the database cannot be
    /// reached within the configured timeout.
    pub async fn connect(config: &AdminConfig) -> Result<Self, AdminError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies pending schema migrations from `migrations/`.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), AdminError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AdminError::PersistenceError(e.to_string()))
    }

    /// Returns every record in ID order.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] on database failure.
    pub async fn list_all(&self) -> Result<Vec<ApplicationRecord>, AdminError> {
        let sql = format!("SELECT {APPLICATION_COLUMNS} FROM applications ORDER BY id ASC");
        let rows = sqlx::query_as::<_, ApplicationRow>(&sql)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    /// Returns records matching `filter`, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] on database failure.
    pub async fn list(
        &self,
        filter: &ApplicationFilter,
    ) -> Result<Vec<ApplicationRecord>, AdminError> {
        let sql = format!(
            "SELECT {APPLICATION_COLUMNS} FROM applications \
             WHERE ($1::text IS NULL OR full_name ILIKE $1 OR cwid ILIKE $1 OR user_id ILIKE $1) \
             AND (cardinality($2::text[]) = 0 OR status = ANY($2)) \
             ORDER BY updated_at DESC, id DESC"
        );
        let statuses: Vec<String> = filter
            .statuses()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect();
        let rows = sqlx::query_as::<_, ApplicationRow>(&sql)
            .bind(filter.like_pattern())
            .bind(statuses)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    /// Returns a single record.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ApplicationNotFound`] if no row has `id`, or
    /// [`AdminError::PersistenceError`] on database failure.
    pub async fn get(&self, id: ApplicationId) -> Result<ApplicationRecord, AdminError> {
        let sql = format!("SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1");
        let row = sqlx::query_as::<_, ApplicationRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AdminError::ApplicationNotFound(id.get()))?;
        ApplicationRecord::try_from(row)
    }

    /// Inserts a record and returns it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] on database failure.
    pub async fn insert(&self, new: NewApplication) -> Result<ApplicationRecord, AdminError> {
        let row = insert_row(&self.pool, &new).await?;
        ApplicationRecord::try_from(row)
    }

    /// Inserts all records in one transaction; nothing is stored if any
    /// insert fails.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] on database failure.
    pub async fn insert_many(
        &self,
        batch: Vec<NewApplication>,
    ) -> Result<Vec<ApplicationRecord>, AdminError> {
        let mut tx = self.pool.begin().await?;
        let mut rows = Vec::with_capacity(batch.len());
        for new in &batch {
            rows.push(insert_row(&mut *tx, new).await?);
        }
        tx.commit().await?;
        into_records(rows)
    }

    /// Sets a record's status and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ApplicationNotFound`] if no row has `id`, or
    /// [`AdminError::PersistenceError`] on database failure.
    pub async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<ApplicationRecord, AdminError> {
        let sql = format!(
            "UPDATE applications SET status = $1, updated_at = now() WHERE id = $2 \
             RETURNING {APPLICATION_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ApplicationRow>(&sql)
            .bind(status.as_str())
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AdminError::ApplicationNotFound(id.get()))?;
        ApplicationRecord::try_from(row)
    }

    /// Returns the number of stored records.
    ///
    /// # Errors
    ///
    /// Returns a [`AdminError::PersistenceError`] on database failure.
    pub async fn count(&self) -> Result<usize, AdminError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

async fn insert_row<'e, E>(executor: E, new: &NewApplication) -> Result<ApplicationRow, AdminError>
where
    E: sqlx::PgExecutor<'e>,
{
    let sql = format!(
        "INSERT INTO applications (user_id, cwid, full_name, discord, skill_level, \
         hackathon_experience, hear_about_us, why_attend, project_experience, future_plans, \
         fun_fact, self_description, links, teammates, referral_email, \
         dietary_restrictions_extra, tshirt_size, agree_to_terms, status, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
         $18, $19, $20) RETURNING {APPLICATION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, ApplicationRow>(&sql)
        .bind(new.user_id.as_deref())
        .bind(new.cwid.as_deref())
        .bind(new.full_name.as_deref())
        .bind(new.discord.as_deref())
        .bind(new.skill_level.as_deref())
        .bind(new.hackathon_experience.as_deref())
        .bind(new.hear_about_us.as_deref())
        .bind(new.why_attend.as_deref())
        .bind(new.project_experience.as_deref())
        .bind(new.future_plans.as_deref())
        .bind(new.fun_fact.as_deref())
        .bind(new.self_description.as_deref())
        .bind(new.links.as_deref())
        .bind(new.teammates.as_deref())
        .bind(new.referral_email.as_deref())
        .bind(new.dietary_restrictions_extra.as_deref())
        .bind(new.tshirt_size.as_deref())
        .bind(new.agree_to_terms)
        .bind(new.status.as_str())
        .bind(new.created_at)
        .fetch_one(executor)
        .await?;
    Ok(row)
}
