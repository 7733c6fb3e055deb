use crate::models::{Reminder, ReminderBand, Subject};
use crate::rules;

pub fn build_reminder(subject: &Subject) -> Reminder {
    let abbr = &subject.abbreviation;
    let pct = subject.percentage();
    let needed = rules::classes_needed(subject);
    let band = rules::classify_subject(pct);

    let (suffix, message, emoji) = match band {
        ReminderBand::Excellent => (
            "good",
            format!("{abbr} loves you ❤️ You're rocking {pct}% attendance!"),
            "🎉",
        ),
        ReminderBand::Safe => (
            "ok",
            format!("{abbr} is proud of you! You're safely at {pct}% 😊"),
            "👍",
        ),
        ReminderBand::Warning => (
            "warning",
            format!("{abbr} is getting worried 😰 – attend {needed} more classes to fix this!"),
            "⚠️",
        ),
        ReminderBand::Critical => (
            "critical",
            format!("{abbr} hates you right now 🤡 – attend {needed} more classes to fix this!"),
            "🚨",
        ),
        ReminderBand::Danger => (
            "danger",
            format!("{abbr} has given up on you 💀 Time for some serious catching up!"),
            "☠️",
        ),
    };

    Reminder {
        id: format!("{}-{suffix}", subject.id),
        subject: abbr.clone(),
        band: Some(band),
        message,
        emoji,
    }
}

pub fn general_reminders() -> Vec<Reminder> {
    vec![
        Reminder {
            id: "general-1".to_string(),
            subject: "General".to_string(),
            band: None,
            message: "Remember: Attending class is like going to the gym, but for your brain! 🧠💪"
                .to_string(),
            emoji: "💡",
        },
        Reminder {
            id: "general-2".to_string(),
            subject: "Tip".to_string(),
            band: None,
            message: "Pro tip: Sitting in the front row makes it harder to skip class 😉"
                .to_string(),
            emoji: "🎯",
        },
    ]
}

/// One reminder per subject in input order, followed by the general ones.
pub fn reminder_feed(subjects: &[Subject]) -> Vec<Reminder> {
    let mut feed: Vec<Reminder> = subjects.iter().map(build_reminder).collect();
    feed.extend(general_reminders());
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn sample(abbreviation: &str, attended: u32, total: u32) -> Subject {
        Subject::new("cn", "Computer Networks", abbreviation, attended, total).unwrap()
    }

    #[test]
    fn critical_subject_gets_critical_template() {
        let reminder = build_reminder(&sample("CN", 15, 26));
        assert_eq!(reminder.band, Some(ReminderBand::Critical));
        assert_eq!(reminder.id, "cn-critical");
        assert_eq!(reminder.category(), "critical");
        assert_eq!(reminder.emoji, "🚨");
        assert_eq!(
            reminder.message,
            "CN hates you right now 🤡 – attend 5 more classes to fix this!"
        );
    }

    #[test]
    fn templates_per_band() {
        let excellent = build_reminder(&sample("AI", 20, 24));
        assert_eq!(excellent.message, "AI loves you ❤️ You're rocking 83% attendance!");
        assert_eq!(excellent.category(), "positive");

        let safe = build_reminder(&sample("WT", 22, 28));
        assert_eq!(safe.message, "WT is proud of you! You're safely at 79% 😊");
        assert_eq!(safe.id, "cn-ok");

        let warning = build_reminder(&sample("SE Lab", 10, 15));
        assert_eq!(
            warning.message,
            "SE Lab is getting worried 😰 – attend 2 more classes to fix this!"
        );

        let danger = build_reminder(&sample("CN", 5, 26));
        assert_eq!(danger.band, Some(ReminderBand::Danger));
        assert_eq!(
            danger.message,
            "CN has given up on you 💀 Time for some serious catching up!"
        );
        assert_eq!(danger.emoji, "☠️");
    }

    #[test]
    fn feed_appends_general_reminders() {
        let subjects = seed::subjects().unwrap();
        let feed = reminder_feed(&subjects);
        assert_eq!(feed.len(), subjects.len() + 2);
        assert_eq!(feed[0].id, "daa-good");
        assert_eq!(feed[feed.len() - 2].subject, "General");
        assert_eq!(feed[feed.len() - 1].subject, "Tip");
        assert!(feed[feed.len() - 1].band.is_none());
        assert_eq!(feed[feed.len() - 1].category(), "fun");
    }

    #[test]
    fn empty_subjects_still_get_general_reminders() {
        assert_eq!(reminder_feed(&[]), general_reminders());
    }
}
