use std::{cell::Cell, fmt::Display};

use cgpa_common::course::{CourseRecord, Summary};
use cgpa_common::grade::Grade;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 64;
/// Widest grade symbol (`A+`).
const GRADE_KEY_WIDTH: usize = 2;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(8) }
}

#[macro_export]
macro_rules! cprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn print(msg: &str) {
    info!(target: "cgpa::print", raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ CGPA CALCULATOR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = dot_leader(key);
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

fn dot_leader(key: &str) -> String {
    ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()))
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn tree_head(id: impl Display, name: &str) {
    let id_str: String = format!("[{}]", id.to_string().color(colors::ACCENT));
    let output: String = format!(
        "{} {}",
        id_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
    print(&output);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(7usize.saturating_sub(key.len()));
        let key: ColoredString = key.color(colors::TEXT_DEFAULT);
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key,
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// The inline error banner.
pub fn error_banner(msg: &str) {
    let prefix: ColoredString = "!".color(colors::ERROR).bold();
    print(&format!("{} {}", prefix, msg.color(colors::ERROR)));
}

/// One tree per course, in ledger order, keyed by the id used for removal.
pub fn courses(records: &[CourseRecord], q_level: u8) {
    header("your courses", q_level);

    if records.is_empty() {
        no_courses();
        return;
    }

    for (idx, record) in records.iter().enumerate() {
        tree_head(record.id(), record.name());
        as_tree_one_level(format::course_to_details(record));
        if idx + 1 != records.len() {
            print("");
        }
    }
}

/// The result panel. Quiet level 2 prints the bare value only.
pub fn result_panel(summary: &Summary, q_level: u8) {
    if q_level > 1 {
        print(&summary.cgpa.to_string());
        return;
    }

    header("your cgpa", q_level);
    let value: ColoredString = summary.cgpa.to_string().color(colors::RESULT).bold();
    centerln(&format!("{value}"));
    centerln(&format!(
        "{}",
        format::course_count(summary.course_count).color(colors::TEXT_DEFAULT)
    ));
    if q_level == 0 {
        fat_separator();
    }
    as_tree_one_level(format::summary_to_details(summary));
}

/// `A+.: 4.0` down to `F..: 0.0`, whatever key width the caller left set.
pub fn grade_reference() {
    let previous: usize = GLOBAL_KEY_WIDTH.replace(GRADE_KEY_WIDTH);
    for grade in Grade::ALL {
        aligned_line(grade.symbol(), format::points(grade.points()));
    }
    GLOBAL_KEY_WIDTH.set(previous);
}

pub fn no_courses() {
    print_status("No courses yet. Use 'add' to enter one.");
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_leader_follows_key_width() {
        assert_eq!(dot_leader("Credits"), "..");
        assert_eq!(dot_leader("Name"), ".....");

        GLOBAL_KEY_WIDTH.set(GRADE_KEY_WIDTH);
        assert_eq!(dot_leader("A+"), ".");
        assert_eq!(dot_leader("A"), "..");
        GLOBAL_KEY_WIDTH.set(8);
    }

    #[test]
    fn test_grade_reference_restores_key_width() {
        GLOBAL_KEY_WIDTH.set(5);
        grade_reference();
        assert_eq!(GLOBAL_KEY_WIDTH.get(), 5);
        GLOBAL_KEY_WIDTH.set(8);
    }
}
