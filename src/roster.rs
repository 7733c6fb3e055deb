use crate::models::Student;

/// Students whose name or roll number contains `query`, ignoring case.
///
/// The returned iterator is lazy and preserves roster order; clone it to
/// walk the matches again. An empty query matches everyone.
pub fn search_students<'a>(
    roster: &'a [Student],
    query: &str,
) -> impl Iterator<Item = &'a Student> + Clone + 'a {
    let needle = query.to_lowercase();
    roster.iter().filter(move |student| {
        student.name.to_lowercase().contains(&needle)
            || student.roll_number.to_lowercase().contains(&needle)
    })
}

pub fn find_by_roll_number<'a>(roster: &'a [Student], roll_number: &str) -> Option<&'a Student> {
    roster
        .iter()
        .find(|student| student.roll_number.eq_ignore_ascii_case(roll_number))
}

pub fn greeting(student: &Student) -> String {
    format!("Continue as {}", student.first_name())
}
