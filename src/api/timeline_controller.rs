use std::time::Duration;

use tracing::trace;

use crate::core::DeferredTask;
use crate::extensions::DeckEvent;
use crate::render::Renderer;

use super::DeckEngine;

impl<R: Renderer> DeckEngine<R> {
    /// Moves the engine clock forward and runs every task that became due.
    ///
    /// Returns the number of tasks executed.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let due = self.timeline.advance(elapsed);
        let executed = due.len();
        for task in due {
            self.run_deferred(task);
        }
        executed
    }

    /// Runs the clock until no deferred work is pending.
    pub fn settle(&mut self) -> usize {
        let remaining = self.timeline.remaining();
        self.advance(remaining)
    }

    #[must_use]
    pub fn clock(&self) -> Duration {
        self.timeline.now()
    }

    #[must_use]
    pub fn pending_tasks(&self) -> Vec<DeferredTask> {
        self.timeline.pending_tasks()
    }

    fn run_deferred(&mut self, task: DeferredTask) {
        trace!(?task, at = ?self.timeline.now(), "running deferred task");
        match task {
            DeferredTask::RenderCharts { slide } => {
                if self.charts.bindings_for(slide).is_empty() {
                    return;
                }
                let mounted = self.charts.render_slide(slide, &mut self.renderer);
                self.emit_plugin_event(DeckEvent::ChartsRendered { slide, mounted });
            }
            DeferredTask::ReleaseLock => {
                self.state.release_lock();
                self.emit_plugin_event(DeckEvent::TransitionSettled {
                    slide: self.state.current_slide(),
                });
            }
        }
    }
}
