//! # Interactive Session
//!
//! Reads one command per line from stdin and feeds it to a [`Session`].
//! Every status the session returns is rendered right away: an added row,
//! the error banner or the result panel.

use std::io::{self, BufRead};
use std::str::FromStr;

use anyhow::Context;
use colored::*;

use cgpa_common::config::Config;
use cgpa_common::course::CourseId;
use cgpa_common::{info, success, warn};
use cgpa_core::ids::{ClockIds, IdSource};
use cgpa_core::session::{Action, Session, Status};

use crate::cprint;
use crate::terminal::{colors, print};

const PROMPT: &str = "cgpa> ";

const HELP: &[(&str, &str)] = &[
    ("name <text>", "set the course name"),
    ("credits <n>", "set the credit hours"),
    ("grade <g>", "select a grade (A+ A B+ B C+ C D F)"),
    ("add", "add the course typed so far"),
    ("add n;c;g", "set all three fields and add"),
    ("rm <id>", "remove a course"),
    ("list", "show all courses"),
    ("draft", "show the fields typed so far"),
    ("calc", "compute the CGPA"),
    ("reset", "clear everything"),
    ("grades", "show the grade point table"),
    ("quit", "leave the session"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Act(Vec<Action>),
    List,
    Draft,
    Grades,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (s, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "name" => ShellCommand::Act(vec![Action::EditName(rest.to_string())]),
            "credits" => ShellCommand::Act(vec![Action::EditCredits(rest.to_string())]),
            "grade" => ShellCommand::Act(vec![Action::SelectGrade(rest.to_string())]),
            "add" if rest.is_empty() => ShellCommand::Act(vec![Action::Add]),
            "add" => parse_inline_course(rest),
            "rm" | "remove" | "del" => {
                if rest.is_empty() {
                    return Err(String::from("usage: rm <id>"));
                }
                ShellCommand::Act(vec![Action::Remove(rest.parse::<CourseId>()?)])
            }
            "calc" | "compute" => ShellCommand::Act(vec![Action::Compute]),
            "reset" => ShellCommand::Act(vec![Action::Reset]),
            "list" | "ls" => ShellCommand::List,
            "draft" => ShellCommand::Draft,
            "grades" => ShellCommand::Grades,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{other}', type 'help' for a list")),
        };

        Ok(command)
    }
}

/// `add Data Structures;3;A`. Missing fields are sent as empty strings.
fn parse_inline_course(rest: &str) -> ShellCommand {
    let mut fields = rest.splitn(3, ';').map(|field| field.trim().to_string());
    let name = fields.next().unwrap_or_default();
    let credits = fields.next().unwrap_or_default();
    let grade = fields.next().unwrap_or_default();

    ShellCommand::Act(vec![
        Action::EditName(name),
        Action::EditCredits(credits),
        Action::SelectGrade(grade),
        Action::Add,
    ])
}

pub fn shell(cfg: &Config) -> anyhow::Result<()> {
    let interactive: bool = console::user_attended();
    if interactive && cfg.quiet == 0 {
        help();
    }

    let stdin = io::stdin();
    let session = run(stdin.lock(), Session::with_ids(ClockIds::new()), interactive, cfg)?;
    info!("session closed with {} courses", session.records().len());

    if cfg.quiet == 0 {
        print::end_of_program();
    }
    Ok(())
}

/// Drives `session` with the commands read from `input` until `quit` or EOF.
fn run<R, I>(input: R, mut session: Session<I>, interactive: bool, cfg: &Config) -> anyhow::Result<Session<I>>
where
    R: BufRead,
    I: IdSource,
{
    let term = console::Term::stdout();
    let mut lines = input.lines();

    loop {
        if interactive {
            term.write_str(PROMPT).context("failed to write prompt")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line: String = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };

        match command {
            ShellCommand::Act(actions) => {
                for action in actions {
                    let (next, status) = session.handle(action);
                    session = next;
                    render(&status, cfg);
                }
            }
            ShellCommand::List => print::courses(session.records(), cfg.quiet),
            ShellCommand::Draft => {
                let draft = session.draft();
                print::aligned_line("Name", draft.name.as_str());
                print::aligned_line("Credits", draft.credits.as_str());
                print::aligned_line("Grade", draft.grade.as_str());
            }
            ShellCommand::Grades => print::grade_reference(),
            ShellCommand::Help => help(),
            ShellCommand::Quit => break,
        }
    }

    Ok(session)
}

fn render(status: &Status, cfg: &Config) {
    match status {
        Status::Edited => {}
        Status::Added(record) => {
            success!("Added {} as #{}", record.name(), record.id());
        }
        Status::Removed { id, record: Some(record) } => {
            success!("Removed {} (#{id})", record.name());
        }
        Status::Removed { id, record: None } => {
            warn!("No course with id {id}");
        }
        Status::Computed(summary) => {
            cprint!();
            print::result_panel(summary, cfg.quiet);
        }
        Status::Reset => {
            success!("Session cleared");
        }
        Status::Rejected(err) => print::error_banner(&err.to_string()),
    }
}

fn help() {
    for (usage, description) in HELP {
        let usage: String = format!("{usage:<12}");
        print::print_status(format!(
            "{} {}",
            usage.color(colors::ACCENT),
            description.color(colors::TEXT_DEFAULT)
        ));
    }
}
