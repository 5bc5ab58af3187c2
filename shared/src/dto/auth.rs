//! Authentication and user management DTOs.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(
        rename = "codigoEstudiante",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_code: Option<String>,
}

/// Authentication response (login/register success)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

/// User information (public, safe to cache client-side)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: i64,
    #[serde(rename = "nombre", alias = "first_name")]
    pub first_name: String,
    #[serde(rename = "apellido", alias = "last_name", default)]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "rol", alias = "role", default)]
    pub role: UserRole,
    #[serde(
        rename = "codigoEstudiante",
        alias = "student_code",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub student_code: Option<String>,
}

impl UserInfo {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// User roles recognized by the client.
///
/// The backend historically emits both `USER` and `STUDENT` for the student
/// role; unrecognized tags fall back to `Student`, the least privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Student,
    Coordinator,
    Admin,
}

impl UserRole {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ADMIN" | "ADMINISTRADOR" => UserRole::Admin,
            "COORDINATOR" | "COORDINADOR" => UserRole::Coordinator,
            _ => UserRole::Student,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            UserRole::Student => "STUDENT",
            UserRole::Coordinator => "COORDINATOR",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl Serialize for UserRole {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(UserRole::from_tag(&tag))
    }
}

/// Token refresh request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Token refresh response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

/// Token verification response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Error response body used across the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub message: String,
}
