//! Queue summary statistics.
//!
//! Always computed over the full, unfiltered queue. Recomputed from scratch
//! on every state change; nothing here is cached.

use crate::model::{QueueEntry, QueueStatus};

/// Counts and average wait for a queue snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Number of entries in the queue.
    pub total: usize,
    /// Entries booked but not yet arrived.
    pub scheduled: usize,
    /// Entries checked in and waiting.
    pub waiting: usize,
    /// Entries ready to be called in.
    pub ready: usize,
    /// Entries currently with a doctor.
    pub in_consultation: usize,
    /// Finished consultations.
    pub completed: usize,
    /// Patients who did not attend.
    pub no_show: usize,
    /// Mean estimated wait in whole minutes, rounded half up. Zero for an
    /// empty queue.
    pub avg_wait_time: u32,
}

impl QueueStats {
    /// Aggregate a queue.
    pub fn compute(queue: &[QueueEntry]) -> Self {
        let mut stats = QueueStats {
            total: queue.len(),
            ..Default::default()
        };

        let mut wait_sum: u64 = 0;
        for entry in queue {
            wait_sum += u64::from(entry.estimated_wait());
            match entry.status() {
                QueueStatus::Scheduled => stats.scheduled += 1,
                QueueStatus::Waiting => stats.waiting += 1,
                QueueStatus::Ready => stats.ready += 1,
                QueueStatus::InConsultation => stats.in_consultation += 1,
                QueueStatus::Completed => stats.completed += 1,
                QueueStatus::NoShow => stats.no_show += 1,
            }
        }

        stats.avg_wait_time = rounded_mean(wait_sum, queue.len() as u64);
        stats
    }

    /// Count of entries with the given status.
    pub fn count(&self, status: QueueStatus) -> usize {
        match status {
            QueueStatus::Scheduled => self.scheduled,
            QueueStatus::Waiting => self.waiting,
            QueueStatus::Ready => self.ready,
            QueueStatus::InConsultation => self.in_consultation,
            QueueStatus::Completed => self.completed,
            QueueStatus::NoShow => self.no_show,
        }
    }
}

/// Integer mean rounded half up; `0` when there is nothing to average.
fn rounded_mean(sum: u64, count: u64) -> u32 {
    if count == 0 {
        return 0;
    }
    // Each estimate fits in u32, so the mean does too.
    ((2 * sum + count) / (2 * count)) as u32
}
