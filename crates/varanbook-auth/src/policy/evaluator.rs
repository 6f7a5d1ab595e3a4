//! Role and tenant scoping rules for resource access.
//!
//! Role hierarchy, most to least privileged:
//! super_admin ⊃ admin ⊃ member.
//!
//! For any tenant-scoped resource:
//! - super_admin: always permitted, regardless of tenant.
//! - admin: permitted iff the resource's tenant equals their own.
//! - member: permitted iff they own the resource, or the resource is an
//!   `active` profile in their own tenant and the action is a read.
//!
//! Cross-tenant refusals are reported as `NotFound` across the board, so a
//! caller cannot enumerate another tenant's resources by probing error
//! codes. Same-tenant refusals are `AccessDenied`.

use uuid::Uuid;

use varanbook_core::error::AppError;
use varanbook_entity::interest::Interest;
use varanbook_entity::profile::{Profile, ProfileStatus};
use varanbook_entity::user::{User, UserRole};

/// The acting identity, taken from verified token claims.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// Acting user.
    pub user_id: Uuid,
    /// Acting user's tenant; `None` for super admins.
    pub tenant_id: Option<Uuid>,
    /// Acting user's role.
    pub role: UserRole,
}

/// What the actor wants to do with the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// View the resource.
    Read,
    /// Mutate or delete the resource.
    Write,
}

/// A resource under evaluation, reduced to what the policy needs.
#[derive(Debug, Clone, Copy)]
pub struct ResourceRef {
    /// Tenant the resource is scoped to; `None` for platform-level rows.
    pub tenant_id: Option<Uuid>,
    /// Owning user, when ownership applies.
    pub owner_user_id: Option<Uuid>,
    /// Visibility status, when the resource is a profile.
    pub profile_status: Option<ProfileStatus>,
}

impl ResourceRef {
    /// A profile resource.
    pub fn profile(profile: &Profile) -> Self {
        Self {
            tenant_id: Some(profile.tenant_id),
            owner_user_id: Some(profile.user_id),
            profile_status: Some(profile.status),
        }
    }

    /// An interest resource. Sender/recipient rules beyond tenant scoping
    /// live in the interest service.
    pub fn interest(interest: &Interest) -> Self {
        Self {
            tenant_id: Some(interest.tenant_id),
            owner_user_id: None,
            profile_status: None,
        }
    }

    /// A user account resource.
    pub fn user(user: &User) -> Self {
        Self {
            tenant_id: user.tenant_id,
            owner_user_id: Some(user.id),
            profile_status: None,
        }
    }
}

/// Evaluates role and tenant scoping for resource access.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Creates a new policy evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Authorize `actor` to perform `action` on `resource`.
    pub fn authorize(
        &self,
        actor: &Actor,
        action: Action,
        resource: &ResourceRef,
    ) -> Result<(), AppError> {
        if actor.role == UserRole::SuperAdmin {
            return Ok(());
        }

        // Non-operators never cross tenants; report as non-existence.
        if resource.tenant_id != actor.tenant_id {
            return Err(AppError::not_found("Resource not found"));
        }

        if actor.role == UserRole::Admin {
            return Ok(());
        }

        // Member: own resources fully, published profiles read-only.
        if resource.owner_user_id == Some(actor.user_id) {
            return Ok(());
        }

        if action == Action::Read
            && resource
                .profile_status
                .is_some_and(|status| status.is_browsable())
        {
            return Ok(());
        }

        Err(AppError::access_denied("Access denied"))
    }

    /// Require the actor to hold at least the given role.
    pub fn require_min_role(&self, actor: &Actor, minimum: UserRole) -> Result<(), AppError> {
        if actor.role.has_at_least(&minimum) {
            Ok(())
        } else {
            Err(AppError::access_denied(format!(
                "Requires {minimum} role or above"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varanbook_core::error::ErrorKind;

    fn actor(role: UserRole, tenant_id: Option<Uuid>) -> Actor {
        Actor {
            user_id: Uuid::new_v4(),
            tenant_id,
            role,
        }
    }

    fn profile_ref(tenant_id: Uuid, owner: Uuid, status: ProfileStatus) -> ResourceRef {
        ResourceRef {
            tenant_id: Some(tenant_id),
            owner_user_id: Some(owner),
            profile_status: Some(status),
        }
    }

    #[test]
    fn super_admin_crosses_tenants() {
        let policy = AccessPolicy::new();
        let operator = actor(UserRole::SuperAdmin, None);
        let resource = profile_ref(Uuid::new_v4(), Uuid::new_v4(), ProfileStatus::Draft);

        assert!(policy.authorize(&operator, Action::Write, &resource).is_ok());
    }

    #[test]
    fn admin_is_confined_to_own_tenant() {
        let policy = AccessPolicy::new();
        let t1 = Uuid::new_v4();
        let t2 = Uuid::new_v4();
        let admin = actor(UserRole::Admin, Some(t1));

        let own = profile_ref(t1, Uuid::new_v4(), ProfileStatus::Draft);
        assert!(policy.authorize(&admin, Action::Write, &own).is_ok());

        // Cross-tenant access reads as non-existence, not as forbidden.
        let foreign = profile_ref(t2, Uuid::new_v4(), ProfileStatus::Active);
        let err = policy.authorize(&admin, Action::Read, &foreign).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn member_reads_active_profiles_in_own_tenant() {
        let policy = AccessPolicy::new();
        let tenant = Uuid::new_v4();
        let member = actor(UserRole::Member, Some(tenant));
        let other = profile_ref(tenant, Uuid::new_v4(), ProfileStatus::Active);

        assert!(policy.authorize(&member, Action::Read, &other).is_ok());

        let err = policy.authorize(&member, Action::Write, &other).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);
    }

    #[test]
    fn member_cannot_read_unpublished_profiles_of_others() {
        let policy = AccessPolicy::new();
        let tenant = Uuid::new_v4();
        let member = actor(UserRole::Member, Some(tenant));

        for status in [ProfileStatus::Draft, ProfileStatus::Suspended, ProfileStatus::Matched] {
            let other = profile_ref(tenant, Uuid::new_v4(), status);
            let err = policy.authorize(&member, Action::Read, &other).unwrap_err();
            assert_eq!(err.kind, ErrorKind::AccessDenied);
        }
    }

    #[test]
    fn member_owns_their_draft() {
        let policy = AccessPolicy::new();
        let tenant = Uuid::new_v4();
        let member = actor(UserRole::Member, Some(tenant));
        let own = profile_ref(tenant, member.user_id, ProfileStatus::Draft);

        assert!(policy.authorize(&member, Action::Read, &own).is_ok());
        assert!(policy.authorize(&member, Action::Write, &own).is_ok());
    }

    #[test]
    fn member_cross_tenant_reads_as_not_found() {
        let policy = AccessPolicy::new();
        let member = actor(UserRole::Member, Some(Uuid::new_v4()));
        let foreign = profile_ref(Uuid::new_v4(), Uuid::new_v4(), ProfileStatus::Active);

        let err = policy.authorize(&member, Action::Read, &foreign).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn min_role_check() {
        let policy = AccessPolicy::new();
        let member = actor(UserRole::Member, Some(Uuid::new_v4()));
        let admin = actor(UserRole::Admin, Some(Uuid::new_v4()));

        assert!(policy.require_min_role(&admin, UserRole::Admin).is_ok());
        let err = policy.require_min_role(&member, UserRole::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);
    }
}
