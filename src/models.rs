use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::RulesError;
use crate::rules;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub semester: String,
}

impl Student {
    pub fn new(id: &str, name: &str, roll_number: &str, email: &str, semester: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            roll_number: roll_number.to_string(),
            email: email.to_string(),
            semester: semester.to_string(),
        }
    }

    /// Username shown once logged in, e.g. `@rahul_sharma`.
    pub fn handle(&self) -> String {
        format!("@{}", self.name.to_lowercase().replacen(' ', "_", 1))
    }

    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or(&self.name)
    }
}

/// Attendance record for one course.
///
/// Counts are only settable through [`Subject::new`], which enforces
/// `attended <= total` and derives `percentage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    attended: u32,
    total: u32,
    percentage: u8,
}

impl Subject {
    pub fn new(
        id: &str,
        name: &str,
        abbreviation: &str,
        attended: u32,
        total: u32,
    ) -> Result<Self, RulesError> {
        if attended > total {
            return Err(RulesError::AttendedExceedsTotal {
                id: id.to_string(),
                attended,
                total,
            });
        }

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            attended,
            total,
            percentage: rules::percentage(u64::from(attended), u64::from(total)),
        })
    }

    pub fn attended(&self) -> u32 {
        self.attended
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AggregateStats {
    pub total_attended: u64,
    pub total_classes: u64,
    pub overall_percentage: u8,
    pub classes_needed: u64,
}

/// Five-band scale driving the reminder feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderBand {
    Excellent,
    Safe,
    Warning,
    Critical,
    Danger,
}

/// Three-band scale shown on the subject breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectStatus {
    Safe,
    Warning,
    Critical,
}

impl SubjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubjectStatus::Safe => "Safe",
            SubjectStatus::Warning => "Warning",
            SubjectStatus::Critical => "Critical",
        }
    }
}

/// Dashboard-level scale for overall attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallBand {
    Healthy,
    Caution,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: String,
    pub subject: String,
    pub band: Option<ReminderBand>,
    pub message: String,
    pub emoji: &'static str,
}

impl Reminder {
    pub fn category(&self) -> &'static str {
        match self.band {
            Some(ReminderBand::Excellent) => "positive",
            Some(ReminderBand::Safe) => "neutral",
            Some(ReminderBand::Warning) => "warning",
            Some(ReminderBand::Critical) => "critical",
            Some(ReminderBand::Danger) => "danger",
            None => "fun",
        }
    }
}

impl Serialize for Reminder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reminder", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("subject", &self.subject)?;
        state.serialize_field("band", &self.band)?;
        state.serialize_field("category", self.category())?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("emoji", self.emoji)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_derived_from_counts() {
        let subject = Subject::new("wt", "Web Technologies", "WT", 22, 28).unwrap();
        assert_eq!(subject.percentage(), 79);
    }

    #[test]
    fn rejects_attended_above_total() {
        let err = Subject::new("cn", "Computer Networks", "CN", 27, 26).unwrap_err();
        assert_eq!(
            err,
            RulesError::AttendedExceedsTotal {
                id: "cn".to_string(),
                attended: 27,
                total: 26,
            }
        );
    }

    #[test]
    fn zero_total_yields_zero_percent() {
        let subject = Subject::new("new", "New Elective", "NE", 0, 0).unwrap();
        assert_eq!(subject.percentage(), 0);
    }

    #[test]
    fn reminder_json_carries_category() {
        let reminder = Reminder {
            id: "cn-critical".to_string(),
            subject: "CN".to_string(),
            band: Some(ReminderBand::Critical),
            message: "CN hates you right now".to_string(),
            emoji: "🚨",
        };
        let value = serde_json::to_value(&reminder).unwrap();
        assert_eq!(value["band"], "critical");
        assert_eq!(value["category"], "critical");

        let general = Reminder { band: None, ..reminder };
        let value = serde_json::to_value(&general).unwrap();
        assert!(value["band"].is_null());
        assert_eq!(value["category"], "fun");
    }

    #[test]
    fn handle_replaces_first_space_only() {
        let student = Student::new("1", "Rahul Sharma", "21CS001", "r@college.edu", "6th");
        assert_eq!(student.handle(), "@rahul_sharma");
        assert_eq!(student.first_name(), "Rahul");

        let student = Student::new("2", "Mary Ann Lee", "21CS099", "m@college.edu", "6th");
        assert_eq!(student.handle(), "@mary_ann lee");
    }
}
