//! CGPA command handler

use super::read;
use markify::core::gpa::calculate_cgpa;
use markify::core::input::{MAX_GPA, MAX_SEMESTER_CREDITS};
use markify::core::models::Semester;
use markify::{error, info, verbose};

/// Calculate the CGPA for the given `GPA[:CREDITS]` semesters
pub fn run(entries: &[String]) {
    let semesters = match entries
        .iter()
        .map(|s| parse_semester(s))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(semesters) => semesters,
        Err(e) => {
            eprintln!("✗ {e}");
            error!("{e}");
            std::process::exit(1);
        }
    };

    if semesters.iter().any(|s| s.credits.is_none()) && semesters.iter().any(|s| s.credits.is_some()) {
        verbose!("Semesters without credits carry no weight when others have credits");
    }

    let cgpa = calculate_cgpa(&semesters);
    info!("CGPA over {} semesters: {cgpa:.2}", semesters.len());
    println!("CGPA: {cgpa:.2}");
}

/// Parse `GPA[:CREDITS]`. A blank or invalid GPA counts as 0.
///
/// # Errors
/// Returns an error if the text has more than two parts.
pub fn parse_semester(entry: &str) -> Result<Semester, String> {
    let mut parts = entry.split(':');
    let gpa = read("GPA", parts.next(), MAX_GPA).unwrap_or(0.0);
    let credits = read("Credits", parts.next(), MAX_SEMESTER_CREDITS);
    if parts.next().is_some() {
        return Err(format!(
            "Semester '{entry}' has too many parts (expected GPA[:CREDITS])"
        ));
    }

    Ok(Semester { gpa, credits })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_semester() {
        assert_eq!(parse_semester("8.5:22"), Ok(Semester::new(8.5, 22.0)));
        assert_eq!(parse_semester("9"), Ok(Semester::without_credits(9.0)));
        assert_eq!(parse_semester("12:40"), Ok(Semester::new(10.0, 30.0)));
        assert_eq!(parse_semester("abc"), Ok(Semester::without_credits(0.0)));
        assert!(parse_semester("8:20:1").is_err());
    }
}
