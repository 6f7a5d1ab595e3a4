//! Request context carrying the authenticated identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use varanbook_auth::policy::evaluator::Actor;
use varanbook_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the auth extractor from verified token claims plus a fresh user
/// lookup, and passed explicitly into service methods — there is no
/// request-scoped mutable bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's tenant; `None` for super admins.
    pub tenant_id: Option<Uuid>,
    /// The user's role.
    pub role: UserRole,
    /// The user's login email.
    pub email: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, tenant_id: Option<Uuid>, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            tenant_id,
            role,
            email,
        }
    }

    /// The policy actor for this context.
    pub fn actor(&self) -> Actor {
        Actor {
            user_id: self.user_id,
            tenant_id: self.tenant_id,
            role: self.role,
        }
    }

    /// Whether the current user is the platform operator.
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}
