use std::path::PathBuf;

use anyhow::Context;
use attendance_tracker::models::{Student, Subject};
use attendance_tracker::{data, reminders, report, roster, rules, seed};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "attendance-tracker")]
#[command(about = "Student attendance tracker: stay on track, stay ahead", long_about = None)]
struct Cli {
    /// Subjects CSV (id,name,abbreviation,attended,total); built-in sample when omitted
    #[arg(long, global = true, env = "ATTENDANCE_SUBJECTS_CSV")]
    subjects: Option<PathBuf>,
    /// Roster CSV (id,name,roll_number,email,semester); built-in sample when omitted
    #[arg(long, global = true, env = "ATTENDANCE_ROSTER_CSV")]
    roster: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find students by name or roll number
    Search { query: String },
    /// Log in as a student by roll number
    Login { roll_number: String },
    /// Overall attendance summary
    Dashboard {
        #[arg(long)]
        json: bool,
    },
    /// Per-subject breakdown
    Subjects {
        #[arg(long)]
        json: bool,
    },
    /// Reminder feed
    Reminders {
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("attendance_tracker=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query } => {
            let students = load_roster(cli.roster.as_ref())?;
            let mut matches = roster::search_students(&students, &query).peekable();

            if matches.peek().is_none() {
                println!("No students found matching \"{query}\"");
                return Ok(());
            }

            for student in matches {
                println!(
                    "- {} ({} • {} Semester)",
                    student.name, student.roll_number, student.semester
                );
            }
        }
        Commands::Login { roll_number } => {
            let students = load_roster(cli.roster.as_ref())?;
            let student = lookup(&students, &roll_number)?;
            println!("{}", roster::greeting(student));
            println!("📧 {}", student.email);
            println!("🎓 {} Semester", student.semester);
            println!("{}", student.handle());
        }
        Commands::Dashboard { json } => {
            let subjects = load_subjects(cli.subjects.as_ref())?;
            let stats = rules::aggregate(&subjects);
            let message = rules::dashboard_message(&stats);

            if json {
                let value = serde_json::json!({
                    "stats": stats,
                    "band": rules::overall_band(stats.overall_percentage),
                    "message": message,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("Overall: {}%", stats.overall_percentage);
            println!("Classes attended: {}", stats.total_attended);
            println!("Total classes: {}", stats.total_classes);
            println!("{message}");
        }
        Commands::Subjects { json } => {
            let subjects = load_subjects(cli.subjects.as_ref())?;

            if json {
                let rows: Vec<serde_json::Value> = subjects
                    .iter()
                    .map(|subject| {
                        serde_json::json!({
                            "subject": subject,
                            "status": rules::subject_status(subject.percentage()),
                            "classes_needed": rules::classes_needed(subject),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }

            if subjects.is_empty() {
                println!("No subjects recorded.");
            }
            for subject in subjects.iter() {
                println!("- {}", report::breakdown_line(subject));
            }
        }
        Commands::Reminders { json } => {
            let subjects = load_subjects(cli.subjects.as_ref())?;
            let feed = reminders::reminder_feed(&subjects);

            if json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
                return Ok(());
            }

            for reminder in feed.iter() {
                println!("{} [{}] {}", reminder.emoji, reminder.subject, reminder.message);
            }
        }
        Commands::Report { student, out } => {
            let subjects = load_subjects(cli.subjects.as_ref())?;
            let students = load_roster(cli.roster.as_ref())?;
            let student = student
                .as_deref()
                .map(|roll| lookup(&students, roll))
                .transpose()?;

            let generated_on = chrono::Local::now().date_naive();
            let output = report::build_report(student, generated_on, &subjects);

            match out {
                Some(path) => {
                    std::fs::write(&path, output)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "report written");
                    println!("Report written to {}.", path.display());
                }
                None => print!("{output}"),
            }
        }
    }

    Ok(())
}

fn load_subjects(path: Option<&PathBuf>) -> anyhow::Result<Vec<Subject>> {
    match path {
        Some(path) => data::load_subjects(path),
        None => Ok(seed::subjects()?),
    }
}

fn load_roster(path: Option<&PathBuf>) -> anyhow::Result<Vec<Student>> {
    match path {
        Some(path) => data::load_roster(path),
        None => Ok(seed::roster()),
    }
}

fn lookup<'a>(students: &'a [Student], roll_number: &str) -> anyhow::Result<&'a Student> {
    roster::find_by_roll_number(students, roll_number)
        .with_context(|| format!("no student with roll number {roll_number}"))
}
