//! Matrimonial profile entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ProfileStatus;

/// Gender of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Marital status of the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "marital_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    NeverMarried,
    Divorced,
    Widowed,
    AwaitingDivorce,
}

/// A candidate's biodata profile. One per user, always tenant-scoped.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Owning user (unique; one profile per user).
    pub user_id: Uuid,
    /// Owning tenant. Row security filters on this column.
    pub tenant_id: Uuid,
    /// Gender.
    pub gender: Option<Gender>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Height in centimetres.
    pub height_cm: Option<f64>,
    /// Marital status.
    pub marital_status: MaritalStatus,
    /// Religion.
    pub religion: Option<String>,
    /// Caste community.
    pub caste: Option<String>,
    /// Mother tongue.
    pub mother_tongue: Option<String>,
    /// Highest education.
    pub education: Option<String>,
    /// Occupation.
    pub occupation: Option<String>,
    /// Annual income in INR.
    pub annual_income_inr: Option<i32>,
    /// City of residence.
    pub city: Option<String>,
    /// State of residence.
    pub state: Option<String>,
    /// Country of residence.
    pub country: String,
    /// Object keys of uploaded photos.
    pub photo_keys: Option<Vec<String>>,
    /// Object key of the horoscope document.
    pub horoscope_key: Option<String>,
    /// Visibility status.
    pub status: ProfileStatus,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfile {
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub marital_status: MaritalStatus,
    pub religion: Option<String>,
    pub caste: Option<String>,
    pub mother_tongue: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub annual_income_inr: Option<i32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// Data for a partial profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub height_cm: Option<f64>,
    pub marital_status: Option<MaritalStatus>,
    pub religion: Option<String>,
    pub caste: Option<String>,
    pub mother_tongue: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub annual_income_inr: Option<i32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub status: Option<ProfileStatus>,
}
