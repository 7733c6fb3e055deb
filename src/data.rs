use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::RulesError;
use crate::models::{Student, Subject};

#[derive(Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    roll_number: String,
    email: String,
    semester: String,
}

#[derive(Deserialize)]
struct SubjectRow {
    id: String,
    name: String,
    abbreviation: String,
    attended: u32,
    total: u32,
    percentage: Option<f64>,
}

pub fn load_roster(path: &Path) -> anyhow::Result<Vec<Student>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open roster {}", path.display()))?;
    read_roster(reader).with_context(|| format!("invalid roster {}", path.display()))
}

pub fn load_subjects(path: &Path) -> anyhow::Result<Vec<Subject>> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open subjects {}", path.display()))?;
    read_subjects(reader).with_context(|| format!("invalid subjects {}", path.display()))
}

pub fn read_roster<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Student>> {
    let mut students = Vec::new();

    for (line, result) in reader.deserialize::<RosterRow>().enumerate() {
        let row = result.with_context(|| format!("roster row {}", line + 1))?;
        students.push(Student {
            id: row.id,
            name: row.name,
            roll_number: row.roll_number,
            email: row.email,
            semester: row.semester,
        });
    }

    tracing::debug!(count = students.len(), "loaded roster");
    Ok(students)
}

pub fn read_subjects<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Subject>> {
    let mut subjects = Vec::new();
    let mut seen = HashSet::new();

    for (line, result) in reader.deserialize::<SubjectRow>().enumerate() {
        let row = result.with_context(|| format!("subject row {}", line + 1))?;
        if !seen.insert(row.id.clone()) {
            return Err(RulesError::DuplicateSubject(row.id).into());
        }

        let subject = Subject::new(&row.id, &row.name, &row.abbreviation, row.attended, row.total)?;
        if let Some(stored) = row.percentage {
            if stored != f64::from(subject.percentage()) {
                tracing::warn!(
                    subject = %subject.id,
                    stored,
                    derived = subject.percentage(),
                    "ignoring stored percentage that disagrees with counts"
                );
            }
        }
        subjects.push(subject);
    }

    tracing::debug!(count = subjects.len(), "loaded subjects");
    Ok(subjects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::Reader::from_reader(input.as_bytes())
    }

    #[test]
    fn reads_subjects_and_derives_percentage() {
        let input = "id,name,abbreviation,attended,total,percentage\n\
                     cn,Computer Networks,CN,15,26,90\n\
                     ai,Artificial Intelligence,AI,20,24,\n";
        let subjects = read_subjects(reader(input)).unwrap();
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].percentage(), 58);
        assert_eq!(subjects[1].percentage(), 83);
    }

    #[test]
    fn percentage_column_is_optional() {
        let input = "id,name,abbreviation,attended,total\nwt,Web Technologies,WT,22,28\n";
        let subjects = read_subjects(reader(input)).unwrap();
        assert_eq!(subjects[0].percentage(), 79);
    }

    #[test]
    fn stale_percentage_values_do_not_fail_the_load() {
        let input = "id,name,abbreviation,attended,total,percentage\n\
                     se,Software Engineering,SE,18,25,72.5\n\
                     wt,Web Technologies,WT,22,28,300\n";
        let subjects = read_subjects(reader(input)).unwrap();
        assert_eq!(subjects[0].percentage(), 72);
        assert_eq!(subjects[1].percentage(), 79);
    }

    #[test]
    fn rejects_duplicate_subject_ids() {
        let input = "id,name,abbreviation,attended,total\n\
                     se,Software Engineering,SE,18,25\n\
                     se,Software Engineering,SE,18,25\n";
        let err = read_subjects(reader(input)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<RulesError>(),
            Some(&RulesError::DuplicateSubject("se".to_string()))
        );
    }

    #[test]
    fn rejects_inconsistent_counts() {
        let input = "id,name,abbreviation,attended,total\nse,Software Engineering,SE,30,25\n";
        let err = read_subjects(reader(input)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RulesError>(),
            Some(RulesError::AttendedExceedsTotal { .. })
        ));
    }

    #[test]
    fn rejects_negative_counts() {
        let input = "id,name,abbreviation,attended,total\nse,Software Engineering,SE,-1,25\n";
        assert!(read_subjects(reader(input)).is_err());
    }

    #[test]
    fn reads_roster() {
        let input = "id,name,roll_number,email,semester\n\
                     1,Rahul Sharma,21CS001,rahul.sharma@college.edu,6th\n";
        let roster = read_roster(reader(input)).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].roll_number, "21CS001");
    }
}
