//! Tenant repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};
use varanbook_core::result::AppResult;
use varanbook_core::types::pagination::{PageRequest, PageResponse};
use varanbook_entity::tenant::{CreateTenant, Tenant, UpdateTenant};

/// Repository for the tenant registry.
#[derive(Debug, Clone)]
pub struct TenantRepository {
    pool: PgPool,
}

impl TenantRepository {
    /// Create a new tenant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a tenant by primary key regardless of activation state.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tenant", e))
    }

    /// Find an **active** tenant by ID. Deactivated tenants resolve to None,
    /// which is how deactivation takes effect network-wide without touching
    /// existing rows.
    pub async fn find_active_by_id(&self, id: Uuid) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = $1 AND is_active = TRUE")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find active tenant", e)
            })
    }

    /// Find an **active** tenant by slug.
    pub async fn find_active_by_slug(&self, slug: &str) -> AppResult<Option<Tenant>> {
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE slug = $1 AND is_active = TRUE")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find tenant by slug", e)
            })
    }

    /// List tenants with pagination, optionally filtered by activation state.
    pub async fn find_all(
        &self,
        is_active: Option<bool>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Tenant>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM tenants WHERE ($1::boolean IS NULL OR is_active = $1)",
        )
        .bind(is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tenants", e))?;

        let tenants = sqlx::query_as::<_, Tenant>(
            "SELECT * FROM tenants WHERE ($1::boolean IS NULL OR is_active = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(is_active)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tenants", e))?;

        Ok(PageResponse::new(
            tenants,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new tenant.
    pub async fn create(&self, data: &CreateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "INSERT INTO tenants (name, slug, domain, contact_email, contact_phone, address, plan, max_users, max_admins) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.slug)
        .bind(&data.domain)
        .bind(&data.contact_email)
        .bind(&data.contact_phone)
        .bind(&data.address)
        .bind(data.plan)
        .bind(data.max_users)
        .bind(data.max_admins)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("tenants_slug_key") => {
                AppError::conflict(format!("Tenant with slug '{}' already exists", data.slug))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create tenant", e),
        })
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateTenant) -> AppResult<Tenant> {
        sqlx::query_as::<_, Tenant>(
            "UPDATE tenants SET name = COALESCE($2, name), \
                                domain = COALESCE($3, domain), \
                                contact_email = COALESCE($4, contact_email), \
                                contact_phone = COALESCE($5, contact_phone), \
                                address = COALESCE($6, address), \
                                plan = COALESCE($7, plan), \
                                max_users = COALESCE($8, max_users), \
                                max_admins = COALESCE($9, max_admins), \
                                is_active = COALESCE($10, is_active), \
                                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.domain)
        .bind(&data.contact_email)
        .bind(&data.contact_phone)
        .bind(&data.address)
        .bind(data.plan)
        .bind(data.max_users)
        .bind(data.max_admins)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update tenant", e))?
        .ok_or_else(|| AppError::not_found("Tenant not found"))
    }

    /// Soft-deactivate a tenant. Tenants are never hard-deleted.
    pub async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE tenants SET is_active = FALSE, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to deactivate tenant", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Tenant not found"));
        }
        Ok(())
    }
}
