//! Tests for AppState.

use super::*;
use crate::model::AppointmentId;
use crate::state::SearchQuery;
use chrono::NaiveDate;

fn time(hh: u8, mm: u8) -> ClockTime {
    ClockTime::new(hh, mm).unwrap()
}

fn entry(id: &str, patient: &str, status: QueueStatus, wait: u32) -> QueueEntry {
    QueueEntry::new(
        AppointmentId::new(id).unwrap(),
        patient,
        format!("P-{id}"),
        "Dr. Sarah Johnson",
        "Cardiology",
        time(9, 0),
    )
    .with_status(status)
    .with_estimated_wait(wait)
}

fn filter() -> QueueFilter {
    QueueFilter::for_date(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

fn state(queue: Vec<QueueEntry>) -> AppState {
    AppState::new(queue, filter(), TransitionPolicy::Permissive)
}

fn sample() -> AppState {
    state(vec![
        entry("A1", "John Smith", QueueStatus::Scheduled, 10),
        entry("A2", "Emily Davis", QueueStatus::Waiting, 20),
        entry("A3", "Robert Wilson", QueueStatus::Ready, 30),
    ])
}

fn search_active(term: &str) -> SearchState {
    SearchState::Active {
        query: SearchQuery::new(term).unwrap(),
    }
}

// ===== Selection =====

#[test]
fn new_state_selects_first_row() {
    let s = sample();
    assert_eq!(s.selected_index(), Some(0));
    assert_eq!(s.selected_entry().unwrap().id().as_str(), "A1");
}

#[test]
fn empty_queue_has_no_selection() {
    let s = state(vec![]);
    assert_eq!(s.selected_index(), None);
    assert!(s.selected_entry().is_none());
}

#[test]
fn select_down_stops_at_last_row() {
    let mut s = sample();
    s.select_down(1);
    assert_eq!(s.selected_index(), Some(1));
    s.select_down(10);
    assert_eq!(s.selected_index(), Some(2));
}

#[test]
fn select_up_stops_at_first_row() {
    let mut s = sample();
    s.select_last();
    s.select_up(1);
    assert_eq!(s.selected_index(), Some(1));
    s.select_up(10);
    assert_eq!(s.selected_index(), Some(0));
}

#[test]
fn select_first_and_last() {
    let mut s = sample();
    s.select_last();
    assert_eq!(s.selected_entry().unwrap().id().as_str(), "A3");
    s.select_first();
    assert_eq!(s.selected_entry().unwrap().id().as_str(), "A1");
}

// ===== Search =====

#[test]
fn search_narrows_visible_rows_but_not_stats() {
    let mut s = sample();
    s.set_search(search_active("emily"));
    let visible: Vec<_> = s.visible_entries().iter().map(|e| e.id().to_string()).collect();
    assert_eq!(visible, ["A2"]);
    assert_eq!(s.stats().total, 3);
}

#[test]
fn changing_term_resets_selection() {
    let mut s = sample();
    s.select_last();
    s.set_search(SearchState::Typing {
        query: "o".into(),
        cursor: 1,
    });
    assert_eq!(s.selected_index(), Some(0));
}

#[test]
fn submitting_same_term_keeps_selection() {
    let mut s = sample();
    s.set_search(SearchState::Typing {
        query: "o".into(),
        cursor: 1,
    });
    s.select_down(1);
    s.set_search(search_active("o"));
    assert_eq!(s.selected_index(), Some(1));
}

#[test]
fn reload_without_selected_entry_selects_first_row() {
    let mut s = sample();
    s.select_last();
    s.replace_queue(vec![entry("A1", "John Smith", QueueStatus::Scheduled, 10)]);
    assert_eq!(s.selected_index(), Some(0));
}

// ===== Status changes =====

#[test]
fn prepare_check_in_builds_update_with_checkin_time() {
    let s = sample();
    let change = s
        .prepare_status_change(QueueStatus::Waiting, time(9, 7))
        .unwrap()
        .expect("change");
    assert_eq!(change.update.date, filter().date);
    assert_eq!(change.update.id.as_str(), "A1");
    assert_eq!(change.update.status, QueueStatus::Waiting);
    assert_eq!(change.update.checkin_time, Some(time(9, 7)));
    assert_eq!(change.from, QueueStatus::Scheduled);
    assert_eq!(change.candidate()[0].checkin_time(), Some(time(9, 7)));
    // Nothing applied yet
    assert_eq!(s.queue()[0].status(), QueueStatus::Scheduled);
}

#[test]
fn prepare_non_waiting_change_has_no_checkin_time() {
    let mut s = sample();
    s.select_down(1);
    let change = s
        .prepare_status_change(QueueStatus::Ready, time(9, 7))
        .unwrap()
        .expect("change");
    assert_eq!(change.update.checkin_time, None);
}

#[test]
fn same_status_is_not_a_change() {
    let s = sample();
    assert_eq!(
        s.prepare_status_change(QueueStatus::Scheduled, time(9, 0)),
        Ok(None)
    );
}

#[test]
fn no_selection_is_not_a_change() {
    let s = state(vec![]);
    assert_eq!(
        s.prepare_status_change(QueueStatus::Waiting, time(9, 0)),
        Ok(None)
    );
}

#[test]
fn strict_policy_refuses_illegal_step() {
    let mut s = sample();
    s.policy = TransitionPolicy::Strict;
    let result = s.prepare_status_change(QueueStatus::Completed, time(9, 0));
    assert_eq!(
        result,
        Err(TransitionError::Illegal {
            from: QueueStatus::Scheduled,
            to: QueueStatus::Completed,
        })
    );
}

#[test]
fn advance_follows_workflow() {
    let mut s = sample();
    s.select_last(); // A3 is ready
    let change = s.prepare_advance(time(9, 0)).unwrap().expect("change");
    assert_eq!(change.update.status, QueueStatus::InConsultation);
}

#[test]
fn advance_on_terminal_entry_is_not_a_change() {
    let s = state(vec![entry("A1", "X", QueueStatus::NoShow, 0)]);
    assert_eq!(s.prepare_advance(time(9, 0)), Ok(None));
}

#[test]
fn commit_adopts_candidate_and_sets_info_notice() {
    let mut s = sample();
    let change = s
        .prepare_status_change(QueueStatus::Waiting, time(9, 7))
        .unwrap()
        .unwrap();
    let expected = change.candidate().to_vec();
    s.commit(change);
    assert_eq!(s.queue(), expected.as_slice());
    let notice = s.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.message.contains("John Smith"));
    assert!(notice.message.contains("waiting"));
}

#[test]
fn reject_keeps_queue_and_sets_error_notice() {
    let mut s = sample();
    let before = s.queue().to_vec();
    let change = s
        .prepare_status_change(QueueStatus::Waiting, time(9, 7))
        .unwrap()
        .unwrap();
    s.reject(&change, &BackendError::Rejected("service unavailable".into()));
    assert_eq!(s.queue(), before.as_slice());
    let notice = s.notice.as_ref().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("A1"));
    assert!(notice.message.contains("service unavailable"));
}

#[test]
fn check_in_scenario_keeps_average_wait() {
    let mut s = state(vec![
        entry("A1", "John Smith", QueueStatus::Scheduled, 10),
        entry("A2", "Emily Davis", QueueStatus::Waiting, 20),
    ]);
    let change = s
        .prepare_status_change(QueueStatus::Waiting, time(9, 7))
        .unwrap()
        .unwrap();
    s.commit(change);
    let stats = s.stats();
    assert_eq!(stats.waiting, 2);
    assert_eq!(stats.avg_wait_time, 15);
    assert_eq!(s.queue()[0].checkin_time(), Some(time(9, 7)));
    assert_eq!(s.queue()[1].checkin_time(), None);
}

#[test]
fn replace_queue_keeps_selected_appointment() {
    let mut s = sample();
    s.select_down(1); // A2
    s.replace_queue(vec![
        entry("A0", "New Patient", QueueStatus::Scheduled, 5),
        entry("A1", "John Smith", QueueStatus::Scheduled, 10),
        entry("A2", "Emily Davis", QueueStatus::Waiting, 20),
    ]);
    assert_eq!(s.selected_entry().unwrap().id().as_str(), "A2");
}
