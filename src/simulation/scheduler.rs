// src/simulation/scheduler.rs
use std::thread;
use std::time::Duration;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a task once, some fixed time from now.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// One sleeping thread per task. Good enough for a handful of pending
/// predictions per process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let spawned = thread::Builder::new()
            .name("prediction-timer".into())
            .spawn(move || {
                thread::sleep(delay);
                task();
            });

        if let Err(e) = spawned {
            tracing::error!(error = %e, "failed to spawn prediction timer");
        }
    }
}

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
struct Entry {
    due: Duration,
    seq: u64,
    task: Task,
}

#[cfg(test)]
#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    queue: Vec<Entry>,
}

#[cfg(test)]
/// Virtual clock driven by `advance`. Nothing runs until time is moved past a
/// task's due point, and tasks run on the caller's thread.
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<Clock>,
}

#[cfg(test)]
impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.lock().now
    }

    pub fn pending(&self) -> usize {
        self.lock().queue.len()
    }

    /// Moves the clock forward, running every task that falls due in
    /// due-time then submission order. Returns how many ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut ran = 0;

        loop {
            // Tasks are taken out one at a time so that a task may schedule
            // more work without deadlocking on the clock.
            let next = {
                let mut clock = self.lock();
                let idx = clock
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, e)| e.due <= target)
                    .min_by_key(|(_, e)| (e.due, e.seq))
                    .map(|(i, _)| i);

                match idx {
                    Some(i) => {
                        let entry = clock.queue.swap_remove(i);
                        clock.now = entry.due;
                        Some(entry.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };

            match next {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = self.lock();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.queue.push(Entry { due, seq, task });
    }
}
