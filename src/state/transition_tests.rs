//! Tests for the status transition handler and policy.

use super::*;

fn time(hh: u8, mm: u8) -> ClockTime {
    ClockTime::new(hh, mm).unwrap()
}

fn entry(id: &str, status: QueueStatus, wait: u32) -> QueueEntry {
    QueueEntry::new(
        AppointmentId::new(id).unwrap(),
        format!("Patient {id}"),
        format!("P-{id}"),
        "Dr. Sarah Johnson",
        "Cardiology",
        time(9, 0),
    )
    .with_status(status)
    .with_estimated_wait(wait)
}

fn id(raw: &str) -> AppointmentId {
    AppointmentId::new(raw).unwrap()
}

// ===== apply_status_transition =====

#[test]
fn changes_only_the_targeted_entry() {
    let queue = vec![
        entry("A1", QueueStatus::Scheduled, 10),
        entry("A2", QueueStatus::Waiting, 20),
        entry("A3", QueueStatus::Ready, 5),
    ];

    let next = apply_status_transition(&queue, &id("A2"), QueueStatus::Ready, time(9, 30));

    assert_eq!(next.len(), 3);
    assert_eq!(next[0], queue[0]);
    assert_eq!(next[2], queue[2]);
    assert_eq!(next[1].status(), QueueStatus::Ready);
    assert_eq!(next[1].id(), queue[1].id());
}

#[test]
fn checking_in_sets_checkin_time() {
    let queue = vec![
        entry("A1", QueueStatus::Scheduled, 10),
        entry("A2", QueueStatus::Waiting, 20),
    ];

    let next = apply_status_transition(&queue, &id("A1"), QueueStatus::Waiting, time(9, 5));

    assert_eq!(next[0].status(), QueueStatus::Waiting);
    assert_eq!(next[0].checkin_time(), Some(time(9, 5)));
    assert_eq!(next[1], queue[1]);
}

#[test]
fn other_statuses_leave_checkin_time_alone() {
    let queue = vec![entry("A1", QueueStatus::Waiting, 10).with_checkin_time(time(8, 55))];

    for status in [
        QueueStatus::Scheduled,
        QueueStatus::Ready,
        QueueStatus::InConsultation,
        QueueStatus::Completed,
        QueueStatus::NoShow,
    ] {
        let next = apply_status_transition(&queue, &id("A1"), status, time(11, 0));
        assert_eq!(next[0].status(), status);
        assert_eq!(next[0].checkin_time(), Some(time(8, 55)), "{status}");
    }
}

#[test]
fn scheduled_without_checkin_stays_without_checkin() {
    let queue = vec![entry("A1", QueueStatus::Ready, 10)];
    let next = apply_status_transition(&queue, &id("A1"), QueueStatus::Completed, time(10, 0));
    assert_eq!(next[0].checkin_time(), None);
}

#[test]
fn unknown_id_is_a_no_op() {
    let queue = vec![
        entry("A1", QueueStatus::Scheduled, 10),
        entry("A2", QueueStatus::Waiting, 20),
    ];

    let next = apply_status_transition(&queue, &id("ZZZ"), QueueStatus::Completed, time(9, 0));

    assert_eq!(next, queue);
}

#[test]
fn any_to_any_is_applied_without_validation() {
    let queue = vec![entry("A1", QueueStatus::Completed, 0)];
    let next = apply_status_transition(&queue, &id("A1"), QueueStatus::Scheduled, time(9, 0));
    assert_eq!(next[0].status(), QueueStatus::Scheduled);
}

#[test]
fn empty_queue_stays_empty() {
    let next = apply_status_transition(&[], &id("A1"), QueueStatus::Waiting, time(9, 0));
    assert!(next.is_empty());
}

// ===== Policy =====

#[test]
fn permissive_accepts_everything() {
    for from in QueueStatus::ALL {
        for to in QueueStatus::ALL {
            assert!(TransitionPolicy::Permissive.check(from, to).is_ok());
        }
    }
}

#[test]
fn strict_accepts_workflow_steps() {
    let steps = [
        (QueueStatus::Scheduled, QueueStatus::Waiting),
        (QueueStatus::Waiting, QueueStatus::Ready),
        (QueueStatus::Ready, QueueStatus::InConsultation),
        (QueueStatus::InConsultation, QueueStatus::Completed),
        (QueueStatus::Waiting, QueueStatus::NoShow),
    ];
    for (from, to) in steps {
        assert!(
            TransitionPolicy::Strict.check(from, to).is_ok(),
            "{from} -> {to}"
        );
    }
}

#[test]
fn strict_rejects_reopening_completed() {
    assert_eq!(
        TransitionPolicy::Strict.check(QueueStatus::Completed, QueueStatus::Waiting),
        Err(TransitionError::Illegal {
            from: QueueStatus::Completed,
            to: QueueStatus::Waiting,
        })
    );
}

#[test]
fn strict_rejects_skipping_steps() {
    assert!(TransitionPolicy::Strict
        .check(QueueStatus::Scheduled, QueueStatus::InConsultation)
        .is_err());
    assert!(TransitionPolicy::Strict
        .check(QueueStatus::Scheduled, QueueStatus::NoShow)
        .is_err());
}

#[test]
fn strict_allows_exactly_five_transitions() {
    let allowed = QueueStatus::ALL
        .into_iter()
        .flat_map(|from| QueueStatus::ALL.into_iter().map(move |to| (from, to)))
        .filter(|(from, to)| TransitionPolicy::Strict.check(*from, *to).is_ok())
        .count();
    assert_eq!(allowed, 5);
}

#[test]
fn policy_parses_case_insensitively() {
    assert_eq!("STRICT".parse::<TransitionPolicy>(), Ok(TransitionPolicy::Strict));
    assert_eq!(" permissive ".parse::<TransitionPolicy>(), Ok(TransitionPolicy::Permissive));
    assert!("lenient".parse::<TransitionPolicy>().is_err());
}

#[test]
fn policy_defaults_to_permissive() {
    assert_eq!(TransitionPolicy::default(), TransitionPolicy::Permissive);
}
