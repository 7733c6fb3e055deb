use crate::error::RulesError;
use crate::models::{Student, Subject};

pub fn roster() -> Vec<Student> {
    let students = [
        ("1", "Rahul Sharma", "21CS001", "rahul.sharma@college.edu"),
        ("2", "Priya Patel", "21CS002", "priya.patel@college.edu"),
        ("3", "Amit Kumar", "21CS003", "amit.kumar@college.edu"),
        ("4", "Sneha Reddy", "21CS004", "sneha.reddy@college.edu"),
        ("5", "Vikram Singh", "21CS005", "vikram.singh@college.edu"),
        ("6", "Anisha Gupta", "21CS006", "anisha.gupta@college.edu"),
        ("7", "Rohan Mehta", "21CS007", "rohan.mehta@college.edu"),
        ("8", "Kavya Joshi", "21CS008", "kavya.joshi@college.edu"),
        ("9", "Arjun Nair", "21CS009", "arjun.nair@college.edu"),
        ("10", "Ishita Agarwal", "21CS010", "ishita.agarwal@college.edu"),
    ];

    students
        .into_iter()
        .map(|(id, name, roll_number, email)| Student::new(id, name, roll_number, email, "6th"))
        .collect()
}

pub fn subjects() -> Result<Vec<Subject>, RulesError> {
    let subjects = [
        ("daa", "Design and Analysis of Algorithms", "DAA", 24, 30),
        ("se", "Software Engineering", "SE", 18, 25),
        ("wt", "Web Technologies", "WT", 22, 28),
        ("cn", "Computer Networks", "CN", 15, 26),
        ("se-lab", "Software Engineering Lab", "SE Lab", 10, 15),
        ("ai", "Artificial Intelligence", "AI", 20, 24),
        (
            "aecs-lab",
            "Advanced English Communication Skills Lab",
            "AECS Lab",
            8,
            12,
        ),
    ];

    subjects
        .into_iter()
        .map(|(id, name, abbreviation, attended, total)| {
            Subject::new(id, name, abbreviation, attended, total)
        })
        .collect()
}
