use crate::models::{AggregateStats, OverallBand, ReminderBand, Subject, SubjectStatus};

/// Minimum attendance, in percent, a subject must reach.
pub const TARGET_PERCENTAGE: u8 = 75;

/// `round(100 * attended / total)` rounding halves up, or 0 when nothing was held.
pub fn percentage(attended: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * attended + total) / (2 * total)).min(100) as u8
}

/// Classes that must be attended to reach the target with `total` held fixed.
pub fn classes_needed(subject: &Subject) -> u32 {
    required_classes(u64::from(subject.total()), u64::from(subject.attended())) as u32
}

fn required_classes(total: u64, attended: u64) -> u64 {
    let required = (total * u64::from(TARGET_PERCENTAGE)).div_ceil(100);
    required.saturating_sub(attended)
}

pub fn classify_subject(percentage: u8) -> ReminderBand {
    match percentage {
        80.. => ReminderBand::Excellent,
        75..=79 => ReminderBand::Safe,
        65..=74 => ReminderBand::Warning,
        50..=64 => ReminderBand::Critical,
        _ => ReminderBand::Danger,
    }
}

pub fn subject_status(percentage: u8) -> SubjectStatus {
    match percentage {
        75.. => SubjectStatus::Safe,
        65..=74 => SubjectStatus::Warning,
        _ => SubjectStatus::Critical,
    }
}

pub fn overall_band(percentage: u8) -> OverallBand {
    match percentage {
        75.. => OverallBand::Healthy,
        65..=74 => OverallBand::Caution,
        _ => OverallBand::Alert,
    }
}

pub fn aggregate(subjects: &[Subject]) -> AggregateStats {
    let total_attended: u64 = subjects.iter().map(|s| u64::from(s.attended())).sum();
    let total_classes: u64 = subjects.iter().map(|s| u64::from(s.total())).sum();

    AggregateStats {
        total_attended,
        total_classes,
        overall_percentage: percentage(total_attended, total_classes),
        classes_needed: required_classes(total_classes, total_attended),
    }
}

pub fn dashboard_message(stats: &AggregateStats) -> String {
    let pct = stats.overall_percentage;
    let needed = stats.classes_needed;
    match overall_band(pct) {
        OverallBand::Healthy => {
            format!("Amazing! You're at {pct}%! Keep up the great work! 🎉")
        }
        OverallBand::Caution => {
            format!("You're at {pct}%! Attend {needed} more classes to stay above 75%! 💪")
        }
        OverallBand::Alert => {
            format!("Alert! You're at {pct}%. Attend {needed} more classes urgently! 🚨")
        }
    }
}

pub fn classes_needed_label(needed: u32) -> Option<String> {
    match needed {
        0 => None,
        1 => Some("Attend 1 more class".to_string()),
        n => Some(format!("Attend {n} more classes")),
    }
}
