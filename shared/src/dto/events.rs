//! University event DTOs.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Event lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ongoing" | "en_curso" => EventStatus::Ongoing,
            "completed" | "finalizado" => EventStatus::Completed,
            "cancelled" | "cancelado" => EventStatus::Cancelled,
            _ => EventStatus::Upcoming,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "UPCOMING",
            EventStatus::Ongoing => "ONGOING",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Serialize for EventStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(EventStatus::from_tag(&tag))
    }
}

/// Registration state of the current user for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Confirmed,
    Attended,
    Cancelled,
}

impl RegistrationStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "confirmed" | "confirmada" => RegistrationStatus::Confirmed,
            "attended" | "asistio" | "asistió" => RegistrationStatus::Attended,
            "cancelled" | "cancelada" => RegistrationStatus::Cancelled,
            _ => RegistrationStatus::Pending,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "PENDING",
            RegistrationStatus::Confirmed => "CONFIRMED",
            RegistrationStatus::Attended => "ATTENDED",
            RegistrationStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Serialize for RegistrationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for RegistrationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(RegistrationStatus::from_tag(&tag))
    }
}

/// A university event that rewards DUNAB for attendance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i64,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "descripcion", alias = "description", default)]
    pub description: String,
    #[serde(rename = "fecha", alias = "date", default)]
    pub date: String,
    #[serde(rename = "lugar", alias = "location", default)]
    pub location: String,
    #[serde(rename = "recompensa", alias = "reward", default)]
    pub reward: f64,
    #[serde(rename = "cupos", alias = "capacity", default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "estado", alias = "status", default)]
    pub status: EventStatus,
    #[serde(
        rename = "estadoInscripcion",
        alias = "registration_status",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_status: Option<RegistrationStatus>,
}

/// Response to registering for or confirming attendance at an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationResponse {
    #[serde(rename = "eventoId", alias = "event_id")]
    pub event_id: i64,
    #[serde(rename = "estado", alias = "status", default)]
    pub status: RegistrationStatus,
    #[serde(
        rename = "recompensa",
        alias = "reward",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reward: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_defaults() {
        let json = r#"{"id": 1, "nombre": "Feria de emprendimiento"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.registration_status, None);
        assert_eq!(event.reward, 0.0);
    }

    #[test]
    fn test_registration_status_tags() {
        assert_eq!(RegistrationStatus::from_tag("CONFIRMADA"), RegistrationStatus::Confirmed);
        assert_eq!(RegistrationStatus::from_tag("attended"), RegistrationStatus::Attended);
        assert_eq!(RegistrationStatus::from_tag("otro"), RegistrationStatus::Pending);
    }
}
