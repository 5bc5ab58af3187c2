//! DUNAB accounts, transactions, categories and statistics DTOs.
//!
//! This module is the normalization boundary for the transaction wire
//! format. The backend (and older fixtures) spell the direction of a
//! transaction several ways (`INGRESO`, `EGRESO`, `CREDITO`, `DEBITO`,
//! `credit`, `income`, ...); everything past this module only ever sees
//! [`TransactionKind`]. Amounts are unsigned magnitudes, the sign is always
//! derived from the kind.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Direction of a transaction, normalized from the wire's synonym soup.
///
/// Any tag not recognized as a credit is treated as a debit. That
/// default-to-debit policy is deliberate and matches how aggregates have
/// always been computed; see `DESIGN.md` for the rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Credit,
    Debit,
}

impl TransactionKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ingreso" | "credito" | "crédito" | "credit" | "income" | "abono" => {
                TransactionKind::Credit
            }
            _ => TransactionKind::Debit,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "CREDITO",
            TransactionKind::Debit => "DEBITO",
        }
    }

    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Credit)
    }
}

impl Serialize for TransactionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for TransactionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(TransactionKind::from_tag(&tag))
    }
}

/// Transaction lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionStatus {
    Active,
    #[default]
    Completed,
    Pending,
    Cancelled,
}

impl TransactionStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "activa" | "active" => TransactionStatus::Active,
            "pendiente" | "pending" => TransactionStatus::Pending,
            "anulada" | "cancelada" | "cancelled" | "canceled" => TransactionStatus::Cancelled,
            _ => TransactionStatus::Completed,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            TransactionStatus::Active => "ACTIVA",
            TransactionStatus::Completed => "COMPLETADA",
            TransactionStatus::Pending => "PENDIENTE",
            TransactionStatus::Cancelled => "ANULADA",
        }
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(TransactionStatus::from_tag(&tag))
    }
}

/// A DUNAB transaction as cached client-side.
///
/// `timestamp` keeps the raw string the backend sent; it is parsed leniently
/// only when compared (filters, sorting, stack ordering) so one malformed
/// date cannot break rendering of the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "cuentaId", alias = "account_id", default)]
    pub account_id: i64,
    #[serde(rename = "tipo", alias = "type", alias = "kind")]
    pub kind: TransactionKind,
    #[serde(rename = "monto", alias = "amount", deserialize_with = "de_amount", default)]
    pub amount: f64,
    #[serde(
        rename = "categoriaNombre",
        alias = "categoria",
        alias = "category",
        deserialize_with = "de_text",
        default
    )]
    pub category: String,
    #[serde(rename = "descripcion", alias = "description", default)]
    pub description: String,
    #[serde(
        rename = "referencia",
        alias = "reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<String>,
    #[serde(
        rename = "fechaCreacion",
        alias = "fecha",
        alias = "date",
        alias = "timestamp",
        default
    )]
    pub timestamp: String,
    #[serde(rename = "estado", alias = "status", default)]
    pub status: TransactionStatus,
    /// When this record entered the client-side recent-activity stack.
    /// Never sent by the backend; assigned on push and carried through
    /// snapshots.
    #[serde(
        rename = "pushedAt",
        alias = "pushed_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub pushed_at: Option<String>,
}

/// Accept a JSON number or a numeric string for amounts.
///
/// A string that does not parse becomes NaN rather than a deserialization
/// error; downstream comparisons and aggregates degrade instead of failing
/// the whole fetch.
fn de_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        Raw::Null => 0.0,
    })
}

/// Accept a string or a numeric id for free-text-ish fields (category).
fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

/// Request body for creating a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTransactionRequest {
    #[serde(rename = "cuentaId")]
    pub account_id: i64,
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "categoriaId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "referencia", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl AccountStatus {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "inactiva" | "inactive" => AccountStatus::Inactive,
            "suspendida" | "suspended" => AccountStatus::Suspended,
            _ => AccountStatus::Active,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            AccountStatus::Active => "ACTIVA",
            AccountStatus::Inactive => "INACTIVA",
            AccountStatus::Suspended => "SUSPENDIDA",
        }
    }
}

impl Serialize for AccountStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for AccountStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(AccountStatus::from_tag(&tag))
    }
}

/// A student's DUNAB account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    #[serde(rename = "estudianteId", alias = "owner_id", default)]
    pub owner_id: i64,
    #[serde(rename = "saldo", alias = "balance", deserialize_with = "de_amount", default)]
    pub balance: f64,
    #[serde(rename = "estado", alias = "status", default)]
    pub status: AccountStatus,
}

/// Balance query response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BalanceResponse {
    #[serde(rename = "cuentaId", alias = "account_id", default)]
    pub account_id: i64,
    #[serde(rename = "saldo", alias = "balance", deserialize_with = "de_amount", default)]
    pub balance: f64,
}

/// Transaction category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "tipo", alias = "kind", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(
        rename = "descripcion",
        alias = "description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// Request body for creating or updating a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRequest {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Per-account aggregate totals from the statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionTotals {
    #[serde(rename = "totalCreditos", alias = "total_credit", default)]
    pub total_credit: f64,
    #[serde(rename = "totalDebitos", alias = "total_debit", default)]
    pub total_debit: f64,
    #[serde(rename = "cantidadCreditos", alias = "credit_count", default)]
    pub credit_count: u64,
    #[serde(rename = "cantidadDebitos", alias = "debit_count", default)]
    pub debit_count: u64,
}

impl TransactionTotals {
    pub fn net(&self) -> f64 {
        self.total_credit - self.total_debit
    }
}

/// One row of the monthly summary endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySummary {
    #[serde(rename = "mes", alias = "month")]
    pub month: String,
    #[serde(rename = "totalCreditos", alias = "total_credit", default)]
    pub total_credit: f64,
    #[serde(rename = "totalDebitos", alias = "total_debit", default)]
    pub total_debit: f64,
}
