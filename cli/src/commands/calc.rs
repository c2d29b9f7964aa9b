use anyhow::{Context, bail};
use serde::Serialize;

use cgpa_common::config::Config;
use cgpa_common::course::{CourseRecord, Summary};
use cgpa_core::session::{Action, Session, Status};

use crate::commands::CourseArg;
use crate::terminal::print;

/// The `--json` document.
#[derive(Serialize)]
struct Report<'a> {
    courses: &'a [CourseRecord],
    summary: Summary,
}

impl<'a> Report<'a> {
    fn new(session: &'a Session, summary: Summary) -> Self {
        Self {
            courses: session.records(),
            summary,
        }
    }
}

pub fn calc(courses: Vec<CourseArg>, cfg: &Config) -> anyhow::Result<()> {
    let (session, summary) = summarize(load(&courses)?)?;

    if cfg.json {
        let report = Report::new(&session, summary);
        print::print(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cfg.quiet < 2 {
        print::courses(session.records(), cfg.quiet);
    }
    print::result_panel(&summary, cfg.quiet);
    Ok(())
}

/// Enters every course in order. The first rejected course aborts the run.
fn load(courses: &[CourseArg]) -> anyhow::Result<Session> {
    courses
        .iter()
        .enumerate()
        .try_fold(Session::new(), |session, (idx, course)| {
            let (session, status) = session.submit(&course.name, &course.credits, &course.grade);
            match status {
                Status::Rejected(err) => Err(err).with_context(|| {
                    format!("course #{} '{}' was rejected", idx + 1, course.name.trim())
                }),
                _ => Ok(session),
            }
        })
}

fn summarize(session: Session) -> anyhow::Result<(Session, Summary)> {
    let (session, status) = session.handle(Action::Compute);
    match status {
        Status::Computed(summary) => Ok((session, summary)),
        Status::Rejected(err) => bail!(err),
        other => bail!("unexpected status after compute: {other:?}"),
    }
}
