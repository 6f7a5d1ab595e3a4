//! Tenant-bound transactions for row-level security.
//!
//! Every authenticated request that touches tenant-scoped tables opens its
//! transaction here. The resolved tenant ID is bound as the transaction-local
//! `app.current_tenant_id` setting, which the row security policies created
//! in the migrations read via `current_setting(…, true)`. Super admins carry
//! no tenant and open an unbound transaction; their rows pass the policy
//! through the `tenant_id IS NULL` arm paired with the application-level
//! policy evaluator.
//!
//! A dropped (uncommitted) transaction rolls back, so a caller disconnecting
//! mid-request can never leave partial writes behind.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use varanbook_core::error::{AppError, ErrorKind};

/// Begin a transaction bound to the given tenant.
///
/// `SET LOCAL` cannot take bind parameters, so the binding goes through
/// `set_config(…, …, true)`, which is its parameterized equivalent and is
/// equally transaction-scoped.
pub async fn begin_tenant_tx(
    pool: &PgPool,
    tenant_id: Option<Uuid>,
) -> Result<Transaction<'static, Postgres>, AppError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

    if let Some(tenant_id) = tenant_id {
        sqlx::query("SELECT set_config('app.current_tenant_id', $1, true)")
            .bind(tenant_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to bind tenant context", e)
            })?;
    }

    Ok(tx)
}
