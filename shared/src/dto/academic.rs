//! Student profile and academic progress DTOs.

use serde::{Deserialize, Serialize};

/// Student profile as returned by the students endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    pub id: i64,
    #[serde(rename = "nombre", alias = "first_name")]
    pub first_name: String,
    #[serde(rename = "apellido", alias = "last_name", default)]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "codigoEstudiante", alias = "student_code", default)]
    pub student_code: String,
    #[serde(rename = "programa", alias = "program", default)]
    pub program: String,
    #[serde(rename = "semestre", alias = "semester", default)]
    pub semester: u32,
}

/// One graduation requirement and whether it has been met.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Requirement {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "cumplido", alias = "completed", default)]
    pub completed: bool,
}

/// Academic progress for a student: credits, GPA, and requirement flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcademicProgress {
    #[serde(rename = "estudianteId", alias = "student_id", default)]
    pub student_id: i64,
    #[serde(rename = "creditosAprobados", alias = "credits_earned", default)]
    pub credits_earned: u32,
    #[serde(rename = "creditosRequeridos", alias = "credits_required", default)]
    pub credits_required: u32,
    #[serde(rename = "promedio", alias = "gpa", default)]
    pub gpa: f64,
    #[serde(rename = "requisitos", alias = "requirements", default)]
    pub requirements: Vec<Requirement>,
}

impl AcademicProgress {
    /// Completion as a fraction in `[0, 1]`; zero required credits reads as
    /// no progress rather than a division by zero.
    pub fn completion(&self) -> f64 {
        if self.credits_required == 0 {
            0.0
        } else {
            (self.credits_earned as f64 / self.credits_required as f64).min(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_bounds() {
        let mut progress = AcademicProgress {
            student_id: 1,
            credits_earned: 60,
            credits_required: 120,
            gpa: 4.1,
            requirements: vec![],
        };
        assert_eq!(progress.completion(), 0.5);

        progress.credits_earned = 150;
        assert_eq!(progress.completion(), 1.0);

        progress.credits_required = 0;
        assert_eq!(progress.completion(), 0.0);
    }
}
