//! Notification DTOs.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Notification categories used across the system.
///
/// Wire tags are the historical SCREAMING_SNAKE set; unknown tags fall back
/// to `Info` so a new backend tag never breaks deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
    /// DUNAB credited to the account (`DUNAB_RECEIVED` / `CREDITO`).
    CurrencyCredit,
    /// DUNAB debited from the account (`DUNAB_SPENT` / `DEBITO`).
    CurrencyDebit,
    EventReminder,
    EventRegistered,
    EventCancelled,
    BalanceLow,
    Achievement,
    TransactionFailed,
    System,
}

impl NotificationKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "SUCCESS" => NotificationKind::Success,
            "WARNING" => NotificationKind::Warning,
            "ERROR" => NotificationKind::Error,
            "DUNAB_RECEIVED" | "CREDITO" => NotificationKind::CurrencyCredit,
            "DUNAB_SPENT" | "DEBITO" => NotificationKind::CurrencyDebit,
            "EVENT_REMINDER" | "EVENTO" => NotificationKind::EventReminder,
            "EVENT_REGISTERED" => NotificationKind::EventRegistered,
            "EVENT_CANCELLED" => NotificationKind::EventCancelled,
            "BALANCE_LOW" => NotificationKind::BalanceLow,
            "ACHIEVEMENT_UNLOCKED" | "LOGRO" => NotificationKind::Achievement,
            "TRANSACTION_FAILED" => NotificationKind::TransactionFailed,
            "SYSTEM" | "SISTEMA" => NotificationKind::System,
            _ => NotificationKind::Info,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Info => "INFO",
            NotificationKind::Warning => "WARNING",
            NotificationKind::Error => "ERROR",
            NotificationKind::CurrencyCredit => "DUNAB_RECEIVED",
            NotificationKind::CurrencyDebit => "DUNAB_SPENT",
            NotificationKind::EventReminder => "EVENT_REMINDER",
            NotificationKind::EventRegistered => "EVENT_REGISTERED",
            NotificationKind::EventCancelled => "EVENT_CANCELLED",
            NotificationKind::BalanceLow => "BALANCE_LOW",
            NotificationKind::Achievement => "ACHIEVEMENT_UNLOCKED",
            NotificationKind::TransactionFailed => "TRANSACTION_FAILED",
            NotificationKind::System => "SYSTEM",
        }
    }
}

impl Serialize for NotificationKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(NotificationKind::from_tag(&tag))
    }
}

/// A user notification.
///
/// Server-issued notifications arrive with an id and timestamp; locally
/// synthesized ones may leave both zero/empty and have defaults assigned
/// when enqueued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "mensaje", alias = "message")]
    pub message: String,
    #[serde(rename = "tipo", alias = "type", alias = "kind", default)]
    pub kind: NotificationKind,
    #[serde(rename = "leida", alias = "read", default)]
    pub read: bool,
    #[serde(
        rename = "fechaCreacion",
        alias = "timestamp",
        alias = "created_at",
        default
    )]
    pub created_at: String,
}

impl Notification {
    /// A bare notification with only a kind and message; id and timestamp
    /// are assigned by the queue on insertion.
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Notification {
            id: 0,
            message: message.into(),
            kind,
            read: false,
            created_at: String::new(),
        }
    }
}

/// Unread counter response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnreadCountResponse {
    #[serde(alias = "unreadCount")]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            NotificationKind::Success,
            NotificationKind::CurrencyCredit,
            NotificationKind::EventReminder,
            NotificationKind::System,
        ] {
            assert_eq!(NotificationKind::from_tag(kind.as_tag()), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_info() {
        assert_eq!(NotificationKind::from_tag("NEW_SHINY_TAG"), NotificationKind::Info);
    }

    #[test]
    fn test_backend_shape() {
        let json = r#"{
            "id": 3,
            "tipo": "CREDITO",
            "mensaje": "Recibiste 100 DUNAB",
            "leida": false,
            "fechaCreacion": "2024-05-10T08:00:00"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::CurrencyCredit);
        assert!(!n.read);
    }
}
