//! Profile repository implementation.
//!
//! All methods take a caller-owned connection: profiles are tenant-scoped,
//! so every access runs inside a tenant-bound transaction where the row
//! security policy re-checks the scoping independently of the application.

use sqlx::PgConnection;
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};
use varanbook_core::result::AppResult;
use varanbook_core::types::pagination::{PageRequest, PageResponse};
use varanbook_entity::profile::model::Gender;
use varanbook_entity::profile::{CreateProfile, Profile, ProfileStatus, UpdateProfile};

/// Repository for matrimonial profiles.
#[derive(Debug, Clone)]
pub struct ProfileRepository;

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new() -> Self {
        Self
    }

    /// Find a profile by primary key.
    pub async fn find_by_id(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Find the profile owned by a user.
    pub async fn find_by_user(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find profile by user", e)
            })
    }

    /// Create a profile for a user. One per user; duplicates conflict.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        user_id: Uuid,
        tenant_id: Uuid,
        status: ProfileStatus,
        data: &CreateProfile,
    ) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (user_id, tenant_id, gender, date_of_birth, height_cm, \
                                   marital_status, religion, caste, mother_tongue, education, \
                                   occupation, annual_income_inr, city, state, country, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     COALESCE($15::varchar, 'India'), $16) \
             RETURNING *",
        )
        .bind(user_id)
        .bind(tenant_id)
        .bind(data.gender)
        .bind(data.date_of_birth)
        .bind(data.height_cm)
        .bind(data.marital_status)
        .bind(&data.religion)
        .bind(&data.caste)
        .bind(&data.mother_tongue)
        .bind(&data.education)
        .bind(&data.occupation)
        .bind(data.annual_income_inr)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.country)
        .bind(status)
        .fetch_one(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("profiles_user_id_key") =>
            {
                AppError::conflict("Profile already exists for this user")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create profile", e),
        })
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        data: &UpdateProfile,
    ) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET gender = COALESCE($2, gender), \
                                 date_of_birth = COALESCE($3, date_of_birth), \
                                 height_cm = COALESCE($4, height_cm), \
                                 marital_status = COALESCE($5, marital_status), \
                                 religion = COALESCE($6, religion), \
                                 caste = COALESCE($7, caste), \
                                 mother_tongue = COALESCE($8, mother_tongue), \
                                 education = COALESCE($9, education), \
                                 occupation = COALESCE($10, occupation), \
                                 annual_income_inr = COALESCE($11, annual_income_inr), \
                                 city = COALESCE($12, city), \
                                 state = COALESCE($13, state), \
                                 country = COALESCE($14, country), \
                                 status = COALESCE($15, status), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.gender)
        .bind(data.date_of_birth)
        .bind(data.height_cm)
        .bind(data.marital_status)
        .bind(&data.religion)
        .bind(&data.caste)
        .bind(&data.mother_tongue)
        .bind(&data.education)
        .bind(&data.occupation)
        .bind(data.annual_income_inr)
        .bind(&data.city)
        .bind(&data.state)
        .bind(&data.country)
        .bind(data.status)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| AppError::not_found("Profile not found"))
    }

    /// Record a photo object key against a profile.
    pub async fn append_photo_key(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        key: &str,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE profiles SET photo_keys = array_append(COALESCE(photo_keys, '{}'), $2), \
                                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(key)
        .execute(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append photo key", e))?;
        Ok(())
    }

    /// Record the horoscope document key against a profile.
    pub async fn set_horoscope_key(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        key: &str,
    ) -> AppResult<()> {
        sqlx::query("UPDATE profiles SET horoscope_key = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(key)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set horoscope key", e)
            })?;
        Ok(())
    }

    /// Delete a profile.
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete profile", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// List profiles within a tenant with optional filters and pagination.
    pub async fn find_by_tenant(
        &self,
        conn: &mut PgConnection,
        tenant_id: Uuid,
        gender: Option<Gender>,
        status: Option<ProfileStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Profile>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM profiles WHERE tenant_id = $1 \
             AND ($2::gender IS NULL OR gender = $2) \
             AND ($3::profile_status IS NULL OR status = $3)",
        )
        .bind(tenant_id)
        .bind(gender)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count profiles", e))?;

        let profiles = sqlx::query_as::<_, Profile>(
            "SELECT * FROM profiles WHERE tenant_id = $1 \
             AND ($2::gender IS NULL OR gender = $2) \
             AND ($3::profile_status IS NULL OR status = $3) \
             ORDER BY created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(tenant_id)
        .bind(gender)
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list profiles", e))?;

        Ok(PageResponse::new(
            profiles,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}

impl Default for ProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}
