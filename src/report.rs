use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::{Student, Subject};
use crate::reminders;
use crate::rules;

pub fn breakdown_line(subject: &Subject) -> String {
    let status = rules::subject_status(subject.percentage());
    let mut line = format!(
        "{} ({}) [{}] {}% ({}/{})",
        subject.name,
        subject.abbreviation,
        status.label(),
        subject.percentage(),
        subject.attended(),
        subject.total(),
    );

    // A rounded 75% can still be a class short, so both notes may apply.
    if let Some(label) = rules::classes_needed_label(rules::classes_needed(subject)) {
        let _ = write!(line, ", to reach 75%: {label}");
    }
    if subject.percentage() >= rules::TARGET_PERCENTAGE {
        let _ = write!(line, ", Great job! You're above the 75% requirement");
    }

    line
}

pub fn build_report(student: Option<&Student>, generated_on: NaiveDate, subjects: &[Subject]) -> String {
    let stats = rules::aggregate(subjects);
    let feed = reminders::reminder_feed(subjects);

    let mut output = String::new();
    let student_label = student
        .map(|s| format!("{} ({})", s.name, s.roll_number))
        .unwrap_or_else(|| "all students".to_string());

    let _ = writeln!(output, "# Attendance Report");
    let _ = writeln!(output, "Generated for {} on {}", student_label, generated_on);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Dashboard");
    let _ = writeln!(output, "- Overall: {}%", stats.overall_percentage);
    let _ = writeln!(output, "- Classes attended: {}", stats.total_attended);
    let _ = writeln!(output, "- Total classes: {}", stats.total_classes);
    let _ = writeln!(output);
    let _ = writeln!(output, "{}", rules::dashboard_message(&stats));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Subject Breakdown");

    if subjects.is_empty() {
        let _ = writeln!(output, "No subjects recorded.");
    } else {
        for subject in subjects {
            let _ = writeln!(output, "- {}", breakdown_line(subject));
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Reminders");

    for reminder in feed.iter() {
        let _ = writeln!(
            output,
            "- {} **{}**: {}",
            reminder.emoji, reminder.subject, reminder.message
        );
    }

    output
}
