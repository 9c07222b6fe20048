use std::sync::Mutex;

use hydeclock_proto::ports::time::{TimeOfDay, TimeSource};
use tokio::time::Instant;

/// Scripted [`TimeSource`] that returns a settable time and records when it
/// was sampled on the tokio clock.
#[derive(Debug)]
pub struct FixedTimeSource {
    time:    Mutex<TimeOfDay>,
    samples: Mutex<Vec<Instant>>,
}

impl FixedTimeSource {
    pub fn new(time: TimeOfDay) -> Self {
        Self {
            time:    Mutex::new(time),
            samples: Mutex::new(Vec::new()),
        }
    }

    /// Changes the time returned by subsequent samples.
    pub fn set(&self, time: TimeOfDay) {
        *self.time.lock().expect("time lock poisoned") = time;
    }

    pub fn sample_count(&self) -> usize {
        self.samples.lock().expect("samples lock poisoned").len()
    }

    pub fn sample_instants(&self) -> Vec<Instant> {
        self.samples.lock().expect("samples lock poisoned").clone()
    }
}

impl TimeSource for FixedTimeSource {
    fn sample(&self) -> TimeOfDay {
        self.samples
            .lock()
            .expect("samples lock poisoned")
            .push(Instant::now());
        *self.time.lock().expect("time lock poisoned")
    }
}
