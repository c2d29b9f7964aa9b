use cgpa_common::course::{CourseRecord, Summary};
use cgpa_common::grade::Grade;
use colored::*;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::APlus | Grade::A => colors::GRADE_TOP,
        Grade::BPlus | Grade::B => colors::GRADE_MID,
        Grade::CPlus | Grade::C | Grade::D => colors::GRADE_LOW,
        Grade::F => colors::GRADE_FAIL,
    }
}

pub fn grade_badge(grade: Grade) -> ColoredString {
    format!("[{grade}]").color(grade_color(grade)).bold()
}

pub fn points(value: f64) -> String {
    format!("{value:.1}")
}

/// Credit hours as entered: `3` stays `3`, `1.5` stays `1.5`.
pub fn credits(value: f64) -> String {
    format!("{value}")
}

pub fn course_to_details(record: &CourseRecord) -> Vec<Detail> {
    vec![
        (
            String::from("Credits"),
            credits(record.credits()).color(colors::TEXT_DEFAULT),
        ),
        (String::from("Grade"), grade_badge(record.grade())),
        (
            String::from("Points"),
            points(record.grade_point()).color(colors::SECONDARY),
        ),
    ]
}

/// `Based on 1 course` / `Based on 3 courses`.
pub fn course_count(count: usize) -> String {
    let unit = if count == 1 { "course" } else { "courses" };
    format!("Based on {count} {unit}")
}

pub fn summary_to_details(summary: &Summary) -> Vec<Detail> {
    vec![
        (
            String::from("Courses"),
            summary.course_count.to_string().color(colors::TEXT_DEFAULT),
        ),
        (
            String::from("Credits"),
            credits(summary.total_credits).color(colors::TEXT_DEFAULT),
        ),
    ]
}
