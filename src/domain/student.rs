//! Student report record.

use serde::{Deserialize, Serialize};

/// One row of the student reports table.
///
/// Records are fetched by an external collaborator and handed to the reports
/// view as props; the portal never mutates them. Field names on the wire
/// follow the reports endpoint (`studentID`, `averageGrade`, `group`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "studentID")]
    pub student_id: String,
    #[serde(rename = "averageGrade")]
    pub average_grade: f64,
    pub group: String,
}

impl StudentRecord {
    #[must_use]
    pub fn new(student_id: impl Into<String>, average_grade: f64, group: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            average_grade,
            group: group.into(),
        }
    }

    /// Parses a JSON array of records as produced by the reports endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Json`](crate::PortalError::Json) if the payload is
    /// not an array of records.
    pub fn list_from_json(payload: &str) -> crate::Result<Vec<Self>> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_field_names() {
        let records = StudentRecord::list_from_json(
            r#"[{"studentID": "S1", "averageGrade": 88, "group": "A"}]"#,
        )
        .unwrap();
        assert_eq!(records, vec![StudentRecord::new("S1", 88.0, "A")]);
    }

    #[test]
    fn rejects_non_array_payload() {
        assert!(StudentRecord::list_from_json(r#"{"studentID": "S1"}"#).is_err());
    }
}
