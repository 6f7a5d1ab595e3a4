//! Request DTOs with validation.
//!
//! Password strength is enforced by the auth-layer policy, not here; the
//! validator annotations cover payload shape only.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use varanbook_core::traits::object_store::UploadPurpose;
use varanbook_entity::interest::InterestStatus;
use varanbook_entity::profile::model::Gender;
use varanbook_entity::profile::ProfileStatus;
use varanbook_entity::tenant::PlanTier;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Logout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token to revoke.
    pub refresh_token: String,
}

/// Forgot-password request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    /// Account email. Existence is never revealed by the response.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

/// Reset-password request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// Raw reset token from the emailed link.
    #[validate(length(min = 32, max = 128))]
    pub token: String,
    /// New password.
    pub new_password: String,
}

/// Authenticated password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1))]
    pub current_password: String,
    /// New password.
    pub new_password: String,
}

/// Member self-registration request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterMemberRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password, checked against the strength policy.
    pub password: String,
    /// Full name.
    #[validate(length(min = 2, max = 200))]
    pub full_name: String,
    /// Phone (E.164).
    pub phone: Option<String>,
}

/// Admin onboarding request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardAdminRequest {
    /// Tenant the admin belongs to.
    pub tenant_id: Uuid,
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password, checked against the strength policy.
    pub password: String,
    /// Full name.
    #[validate(length(min = 2, max = 200))]
    pub full_name: String,
    /// Phone (E.164).
    pub phone: Option<String>,
}

/// Self-service account update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMeRequest {
    /// New full name.
    #[validate(length(min = 2, max = 200))]
    pub full_name: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New push token.
    pub push_token: Option<String>,
}

/// Tenant onboarding request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTenantRequest {
    /// Centre name.
    #[validate(length(min = 2, max = 200))]
    pub name: String,
    /// Unique URL-safe slug.
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    /// Custom domain.
    pub domain: Option<String>,
    /// Contact email.
    #[validate(email)]
    pub contact_email: String,
    /// Contact phone.
    pub contact_phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Subscription plan.
    #[serde(default = "default_plan")]
    pub plan: PlanTier,
    /// Member quota.
    #[serde(default = "default_max_users")]
    pub max_users: i32,
    /// Admin quota.
    #[serde(default = "default_max_admins")]
    pub max_admins: i32,
}

/// Partial tenant update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTenantRequest {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    pub plan: Option<PlanTier>,
    pub max_users: Option<i32>,
    pub max_admins: Option<i32>,
    pub is_active: Option<bool>,
}

/// Tenant listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenantListQuery {
    /// Filter by activation state.
    pub is_active: Option<bool>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
}

/// Profile listing filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileListQuery {
    /// Filter by gender.
    pub gender: Option<Gender>,
    /// Filter by visibility status.
    pub status: Option<ProfileStatus>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
}

/// Interest listing window.
#[derive(Debug, Clone, Deserialize)]
pub struct InterestListQuery {
    /// Maximum entries to return.
    pub limit: Option<i64>,
    /// Entries to skip.
    pub offset: Option<i64>,
}

/// Accept or reject a received interest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondInterestRequest {
    /// `accepted` or `rejected`.
    pub status: InterestStatus,
}

/// Pre-signed upload request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PresignUploadRequest {
    /// What the upload is for.
    pub purpose: UploadPurpose,
    /// Original filename.
    #[validate(length(min = 1, max = 255))]
    pub filename: String,
    /// MIME type the client will PUT with.
    #[validate(length(min = 1, max = 100))]
    pub content_type: String,
}

/// Attach an uploaded object to a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AttachUploadRequest {
    /// What the upload was for.
    pub purpose: UploadPurpose,
    /// Object key returned by the presign endpoint.
    #[validate(length(min = 1, max = 512))]
    pub key: String,
}

fn default_plan() -> PlanTier {
    PlanTier::Starter
}

fn default_max_users() -> i32 {
    500
}

fn default_max_admins() -> i32 {
    5
}
