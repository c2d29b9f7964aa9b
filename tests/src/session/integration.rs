#![cfg(test)]
use cgpa_common::course::{Cgpa, CourseId, CourseRecord, ValidatedCourse};
use cgpa_common::error::{ComputeError, SessionError, ValidationError};
use cgpa_common::grade::Grade;
use cgpa_core::aggregator;
use cgpa_core::ids::{ClockIds, IdSource, SequentialIds};
use cgpa_core::session::{Action, Session, Status};

fn enter<I: IdSource>(session: Session<I>, name: &str, credits: &str, grade: &str) -> Session<I> {
    let (session, _) = session.handle(Action::EditName(name.to_string()));
    let (session, _) = session.handle(Action::EditCredits(credits.to_string()));
    let (session, _) = session.handle(Action::SelectGrade(grade.to_string()));
    let (session, _) = session.handle(Action::Add);
    session
}

/// Walks through the calculator the way a user would: type, add, compute,
/// fix a mistake, compute again.
#[test]
fn semester_walkthrough() {
    let session: Session<SequentialIds> = Session::new();

    let session = enter(session, "Data Structures", "3", "A");
    let session = enter(session, "Operating Systems", "3", "b");
    assert_eq!(session.records().len(), 2);

    let (session, status) = session.handle(Action::Compute);
    assert!(matches!(status, Status::Computed(_)));
    assert_eq!(session.cgpa().map(Cgpa::value), Some(3.35));

    let session = enter(session, "Lab", "1", "Z");
    assert_eq!(
        session.error(),
        Some(SessionError::Validation(ValidationError::InvalidGrade))
    );
    assert_eq!(session.records().len(), 2);
    assert_eq!(session.cgpa().map(Cgpa::value), Some(3.35), "rejected add keeps the result");

    let (session, _) = session.handle(Action::SelectGrade(String::from("A+")));
    let (session, status) = session.handle(Action::Add);
    assert!(matches!(status, Status::Added(ref record) if record.grade() == Grade::APlus));
    assert!(session.error().is_none());
    assert!(session.cgpa().is_none(), "add invalidates the result");

    // (3.7 * 3 + 3.0 * 3 + 4.0 * 1) / 7
    let (session, _) = session.handle(Action::Compute);
    let summary = session.summary().expect("computed");
    assert_eq!(summary.cgpa.value(), 3.44);
    assert_eq!(summary.course_count, 3);
    assert_eq!(summary.total_credits, 7.0);
}

#[test]
fn remove_by_id_keeps_order() {
    let session = Session::new();
    let session = enter(session, "First", "3", "A");
    let session = enter(session, "Second", "3", "B");
    let session = enter(session, "Third", "3", "C");
    let second: CourseId = session.records()[1].id();

    let (session, status) = session.handle(Action::Remove(second));
    assert!(matches!(status, Status::Removed { record: Some(_), .. }));

    let names: Vec<&str> = session.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["First", "Third"]);

    let (session, status) = session.handle(Action::Remove(second));
    assert!(matches!(status, Status::Removed { record: None, .. }));
    assert_eq!(session.records().len(), 2);
}

#[test]
fn empty_then_reset() {
    let (session, status) = Session::new().handle(Action::Compute);
    assert_eq!(
        status,
        Status::Rejected(SessionError::Compute(ComputeError::EmptyLedger))
    );

    let session = enter(session, "Physics", "4", "C+");
    let (session, _) = session.handle(Action::Compute);
    assert!(session.error().is_none());

    let (session, _) = session.handle(Action::EditName(String::from("Leftover")));
    let (session, _) = session.handle(Action::Reset);
    assert!(session.records().is_empty());
    assert!(session.summary().is_none());
    assert!(session.error().is_none());
    assert!(session.draft().is_empty());
}

#[test]
fn clock_ids_are_unique_within_a_burst() {
    let mut session = Session::with_ids(ClockIds::new());
    for idx in 0..50 {
        session = enter(session, &format!("Course {idx}"), "1", "B");
    }

    let ids: Vec<CourseId> = session.records().iter().map(|r| r.id()).collect();
    assert_eq!(ids.len(), 50);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

/// Zero credits never get past the validator, so a session can't produce the
/// fallback. Records built directly still aggregate to a displayed `0.00`.
#[test]
fn zero_credit_fallback_displays_as_zero() {
    let (session, status) = Session::new().submit("Audit", "0", "F");
    assert_eq!(
        status,
        Status::Rejected(SessionError::Validation(ValidationError::InvalidCredits))
    );
    assert!(session.records().is_empty());

    let audit = ValidatedCourse {
        name: String::from("Audit"),
        credits: 0.0,
        grade: Grade::F,
    };
    let summary = aggregator::compute(&[CourseRecord::new(CourseId::new(1), audit)])
        .expect("fallback, not an error");
    assert_eq!(summary.cgpa, Cgpa::ZERO);
    assert_eq!(summary.cgpa.to_string(), "0.00");
    assert_eq!(summary.total_credits, 0.0);
}
