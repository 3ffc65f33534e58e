use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Work deferred past the synchronous part of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredTask {
    /// Render the charts bound to `slide`.
    RenderCharts { slide: usize },
    /// End the transition lock window.
    ReleaseLock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledTask {
    due: Duration,
    sequence: u64,
    task: DeferredTask,
}

/// Virtual clock holding deferred tasks.
///
/// Time only moves when the host calls [`TransitionTimeline::advance`], which
/// keeps transition timing deterministic under test. Tasks are never
/// cancelled once scheduled. The clock saturates at [`Duration::MAX`].
#[derive(Debug, Clone, Default)]
pub struct TransitionTimeline {
    now: Duration,
    next_sequence: u64,
    pending: Vec<ScheduledTask>,
}

impl TransitionTimeline {
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Pending tasks in execution order.
    #[must_use]
    pub fn pending_tasks(&self) -> Vec<DeferredTask> {
        let mut ordered = self.pending.clone();
        ordered.sort_by_key(|entry| (entry.due, entry.sequence));
        ordered.into_iter().map(|entry| entry.task).collect()
    }

    /// Time left until the last pending task becomes due.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.pending
            .iter()
            .map(|entry| entry.due.saturating_sub(self.now))
            .max()
            .unwrap_or_default()
    }

    pub fn schedule_after(&mut self, delay: Duration, task: DeferredTask) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.push(ScheduledTask {
            due: self.now.saturating_add(delay),
            sequence,
            task,
        });
    }

    /// Moves the clock forward and returns every task that became due,
    /// ordered by due time and then by scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredTask> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let mut due: Vec<ScheduledTask> = Vec::new();
        self.pending.retain(|entry| {
            if entry.due <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|entry| (entry.due, entry.sequence));
        due.into_iter().map(|entry| entry.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_fire_in_due_order() {
        let mut timeline = TransitionTimeline::default();
        timeline.schedule_after(Duration::from_millis(600), DeferredTask::ReleaseLock);
        timeline.schedule_after(
            Duration::from_millis(300),
            DeferredTask::RenderCharts { slide: 2 },
        );

        assert!(timeline.advance(Duration::from_millis(299)).is_empty());
        assert_eq!(
            timeline.advance(Duration::from_millis(1)),
            vec![DeferredTask::RenderCharts { slide: 2 }]
        );
        assert_eq!(timeline.remaining(), Duration::from_millis(300));
        assert_eq!(
            timeline.advance(Duration::from_secs(5)),
            vec![DeferredTask::ReleaseLock]
        );
        assert!(timeline.pending_tasks().is_empty());
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut timeline = TransitionTimeline::default();
        timeline.schedule_after(Duration::ZERO, DeferredTask::ReleaseLock);
        timeline.schedule_after(Duration::ZERO, DeferredTask::RenderCharts { slide: 1 });
        assert_eq!(
            timeline.pending_tasks(),
            vec![
                DeferredTask::ReleaseLock,
                DeferredTask::RenderCharts { slide: 1 }
            ]
        );
        assert_eq!(timeline.advance(Duration::ZERO).len(), 2);
    }

    #[test]
    fn clock_saturates_instead_of_overflowing() {
        let mut timeline = TransitionTimeline::default();
        assert!(timeline.advance(Duration::MAX).is_empty());
        timeline.schedule_after(Duration::from_millis(600), DeferredTask::ReleaseLock);
        assert_eq!(timeline.now(), Duration::MAX);
        assert_eq!(
            timeline.advance(Duration::from_millis(1)),
            vec![DeferredTask::ReleaseLock]
        );
    }
}
