use std::sync::{Arc, Mutex};

use hydeclock_core::event_bus::{BusEvent, EventReceiver};
use log::error;

/// Result of draining the event bus once.
#[derive(Debug, Clone, Default)]
pub(super) struct BusFlushOutcome {
    events:    Vec<BusEvent>,
    had_error: bool,
}

impl BusFlushOutcome {
    pub(super) fn had_error(&self) -> bool {
        self.had_error
    }

    pub(super) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(super) fn into_events(self) -> Vec<BusEvent> {
        self.events
    }
}

/// Pulls every pending event off the bus. A read failure stops the drain and
/// keeps what was collected so far.
pub(super) async fn drain_bus(receiver: Arc<Mutex<EventReceiver>>) -> BusFlushOutcome {
    let Ok(mut guard) = receiver.lock() else {
        error!("Event bus receiver poisoned");
        return BusFlushOutcome {
            events:    Vec::new(),
            had_error: true,
        };
    };

    let mut outcome = BusFlushOutcome::default();

    loop {
        match guard.try_recv() {
            Ok(Some(event)) => outcome.events.push(event),
            Ok(None) => break,
            Err(err) => {
                error!("Failed to read event bus payload: {err}");
                outcome.had_error = true;
                break;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use hydeclock_core::event_bus::EventBus;

    use super::*;

    #[tokio::test]
    async fn drain_collects_pending_events() {
        let bus = EventBus::new(NonZeroUsize::new(4).expect("non-zero"));
        let sender = bus.sender();
        sender.try_send(BusEvent::Redraw).expect("send");
        sender.try_send(BusEvent::Redraw).expect("send");

        let outcome = drain_bus(Arc::new(Mutex::new(bus.receiver()))).await;

        assert!(!outcome.had_error());
        // Consecutive redraws coalesce.
        assert_eq!(outcome.into_events().len(), 1);
    }

    #[tokio::test]
    async fn drain_of_empty_bus_is_empty() {
        let bus = EventBus::new(NonZeroUsize::new(4).expect("non-zero"));

        let outcome = drain_bus(Arc::new(Mutex::new(bus.receiver()))).await;

        assert!(outcome.is_empty());
        assert!(!outcome.had_error());
    }
}
