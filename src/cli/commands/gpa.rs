//! GPA command handler

use super::read;
use markify::core::gpa::{mark_to_grade_point, paper_final_mark, predict_gpa};
use markify::core::input::{max_internal, MAX_EXTERNAL, MAX_PAPER_CREDITS};
use markify::core::models::{Layout, Paper};
use markify::{error, info, verbose};

/// Predict the semester GPA for the given `TYPE:CREDITS:INTERNAL:EXTERNAL` papers
pub fn run(entries: &[String]) {
    let papers = match entries
        .iter()
        .map(|s| parse_paper(s))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(papers) => papers,
        Err(e) => {
            eprintln!("✗ {e}");
            error!("{e}");
            std::process::exit(1);
        }
    };

    for (i, paper) in papers.iter().enumerate() {
        let final_mark = paper_final_mark(paper);
        verbose!(
            "Paper {} ({}, {} credits): final {final_mark:.1} -> grade point {}",
            i + 1,
            paper.layout,
            paper.credit_weight(),
            mark_to_grade_point(final_mark)
        );
    }

    let gpa = predict_gpa(&papers);
    info!("Predicted GPA over {} papers: {gpa:.2}", papers.len());
    println!("Predicted GPA: {gpa:.2}");
}

/// Parse `TYPE:CREDITS:INTERNAL:EXTERNAL`; trailing parts may be omitted.
///
/// # Errors
/// Returns an error if the paper type is missing or unknown.
pub fn parse_paper(entry: &str) -> Result<Paper, String> {
    let mut parts = entry.split(':');
    let layout: Layout = parts
        .next()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| format!("Paper '{entry}' has no type"))?
        .trim()
        .parse()?;

    let credits = read("Credits", parts.next(), MAX_PAPER_CREDITS);
    let internal = read("Internal", parts.next(), max_internal(layout));
    let external = read("External", parts.next(), MAX_EXTERNAL);
    if parts.next().is_some() {
        return Err(format!(
            "Paper '{entry}' has too many parts (expected TYPE:CREDITS:INTERNAL:EXTERNAL)"
        ));
    }

    Ok(Paper::new(layout, credits, internal, external))
}
