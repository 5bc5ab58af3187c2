//! Admin reporting and export DTOs.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use super::currency::TransactionTotals;

/// What a report aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Transactions,
    Students,
    Events,
}

impl ReportKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ReportKind::Transactions => "TRANSACTIONS",
            ReportKind::Students => "STUDENTS",
            ReportKind::Events => "EVENTS",
        }
    }
}

impl Serialize for ReportKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for ReportKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.trim().to_ascii_uppercase().as_str() {
            "STUDENTS" | "ESTUDIANTES" => ReportKind::Students,
            "EVENTS" | "EVENTOS" => ReportKind::Events,
            _ => ReportKind::Transactions,
        })
    }
}

/// Binary export format for generated reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn as_query(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Report generation request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRequest {
    #[serde(rename = "tipo")]
    pub kind: ReportKind,
    #[serde(rename = "fechaInicio", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(rename = "fechaFin", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// One entry of the DUNAB balance ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingEntry {
    #[serde(rename = "estudianteId", alias = "student_id")]
    pub student_id: i64,
    #[serde(rename = "nombre", alias = "name", default)]
    pub name: String,
    #[serde(rename = "saldo", alias = "balance", default)]
    pub balance: f64,
    #[serde(rename = "puesto", alias = "rank", default)]
    pub rank: u32,
}

/// System-wide statistics for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GlobalStatistics {
    #[serde(rename = "totalEstudiantes", alias = "total_students", default)]
    pub total_students: u64,
    #[serde(rename = "totalEventos", alias = "total_events", default)]
    pub total_events: u64,
    #[serde(flatten)]
    pub totals: TransactionTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_tags() {
        let kind: ReportKind = serde_json::from_str(r#""ESTUDIANTES""#).unwrap();
        assert_eq!(kind, ReportKind::Students);
        let kind: ReportKind = serde_json::from_str(r#""anything""#).unwrap();
        assert_eq!(kind, ReportKind::Transactions);
    }

    #[test]
    fn test_global_statistics_flatten() {
        let json = r#"{
            "totalEstudiantes": 120,
            "totalEventos": 8,
            "totalCreditos": 5000.0,
            "totalDebitos": 1200.0
        }"#;
        let stats: GlobalStatistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_students, 120);
        assert_eq!(stats.totals.net(), 3800.0);
    }
}
