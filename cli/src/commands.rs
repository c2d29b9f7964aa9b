pub mod calc;
pub mod grades;
pub mod shell;

use std::str::FromStr;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cgpa")]
#[command(about = "A credit-weighted grade point average calculator.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print less (-q hides headers, -qq prints the bare result)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print diagnostics (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session
    #[command(alias = "s")]
    Shell,
    /// Compute the CGPA of the given courses and exit
    #[command(alias = "c")]
    Calc {
        /// A course as NAME:CREDITS:GRADE, e.g. "Data Structures:3:A"
        #[arg(short, long = "course", value_name = "NAME:CREDITS:GRADE")]
        courses: Vec<CourseArg>,
        /// Print the ledger and result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the grade point of every letter grade
    #[command(alias = "g")]
    Grades,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// The raw fields of one course. Validation happens in the session, so
/// missing parts are kept as empty strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseArg {
    pub name: String,
    pub credits: String,
    pub grade: String,
}

impl FromStr for CourseArg {
    type Err = String;

    /// Splits from the right, so the name may itself contain `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts: Vec<&str> = s.rsplitn(3, ':').collect();
        parts.reverse();

        let (name, credits, grade) = match parts.as_slice() {
            [name, credits, grade] => (*name, *credits, *grade),
            [name, credits] => (*name, *credits, ""),
            [name] => (*name, "", ""),
            _ => return Err(format!("invalid course: {s}")),
        };

        Ok(Self {
            name: name.to_string(),
            credits: credits.to_string(),
            grade: grade.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(name: &str, credits: &str, grade: &str) -> CourseArg {
        CourseArg {
            name: name.to_string(),
            credits: credits.to_string(),
            grade: grade.to_string(),
        }
    }

    #[test]
    fn test_course_arg_parsing() {
        assert_eq!("Data Structures:3:A".parse::<CourseArg>(), Ok(arg("Data Structures", "3", "A")));
        assert_eq!("Lab:0.5:b+".parse::<CourseArg>(), Ok(arg("Lab", "0.5", "b+")));
        assert_eq!("CS:101 Intro:4:A+".parse::<CourseArg>(), Ok(arg("CS:101 Intro", "4", "A+")));
    }

    #[test]
    fn test_course_arg_missing_parts() {
        assert_eq!("Physics:3".parse::<CourseArg>(), Ok(arg("Physics", "3", "")));
        assert_eq!("Physics".parse::<CourseArg>(), Ok(arg("Physics", "", "")));
        assert_eq!("::".parse::<CourseArg>(), Ok(arg("", "", "")));
    }

    #[test]
    fn test_cli_accepts_repeated_courses() {
        let cli = CommandLine::try_parse_from([
            "cgpa", "calc", "-c", "Calculus:3:A", "--course", "Physics:3:B", "--json",
        ])
        .expect("valid arguments");

        let Commands::Calc { courses, json } = cli.command else {
            panic!("expected the calc command");
        };
        assert_eq!(courses.len(), 2);
        assert!(json);
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = CommandLine::try_parse_from(["cgpa", "g", "-qq", "--no-color"])
            .expect("valid arguments");
        assert!(matches!(cli.command, Commands::Grades));
        assert_eq!(cli.quiet, 2);
        assert!(cli.no_color);
    }
}
