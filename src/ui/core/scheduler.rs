use super::actions::Action;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Duration;

pub type TimerId = u64;

/// A pending timer tied to a widget's lifetime
#[derive(Debug)]
pub struct ScheduledTimer {
    pub id: TimerId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Cancellable timers for widget animations and delayed replies.
///
/// Timers run as tokio tasks and deliver [`Action`]s back to the event loop
/// over an unbounded channel. Cancelling a timer aborts its task, so a timer
/// belonging to an unmounted widget can never mutate state after teardown.
pub struct Scheduler {
    timers: HashMap<TimerId, ScheduledTimer>,
    next_timer_id: TimerId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl Scheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                timers: HashMap::new(),
                next_timer_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Schedule a one-shot action after the given delay
    pub fn spawn_delayed(&mut self, delay: Duration, action: Action, description: String) -> TimerId {
        let timer_id = self.next_timer_id;
        self.next_timer_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(action);
        });

        self.track(timer_id, handle, description);
        timer_id
    }

    /// Schedule an action to fire once per period, `repeats` times in total
    pub fn spawn_repeating(&mut self, period: Duration, repeats: u32, action: Action, description: String) -> TimerId {
        let timer_id = self.next_timer_id;
        self.next_timer_id += 1;

        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick completes immediately; the animation
            // starts one period after mount.
            interval.tick().await;

            for _ in 0..repeats {
                interval.tick().await;
                if action_sender.send(action.clone()).is_err() {
                    break;
                }
            }
        });

        self.track(timer_id, handle, description);
        timer_id
    }

    fn track(&mut self, id: TimerId, handle: JoinHandle<()>, description: String) {
        let timer = ScheduledTimer {
            id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };
        self.timers.insert(id, timer);
    }

    /// Abort a pending timer. Returns false if it already finished or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(timer) = self.timers.remove(&id) {
            timer.handle.abort();
            true
        } else {
            false
        }
    }

    /// Remove bookkeeping for timers whose tasks have completed
    pub fn cleanup_finished(&mut self) -> Vec<TimerId> {
        let finished: Vec<TimerId> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for id in &finished {
            self.timers.remove(id);
        }

        finished
    }

    /// Abort all pending timers
    pub fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.handle.abort();
        }
    }

    /// Get the number of tracked timers
    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        // Cancel all timers when the scheduler is dropped
        self.cancel_all();
    }
}
