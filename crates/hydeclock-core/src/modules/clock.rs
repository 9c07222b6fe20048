use std::{sync::Arc, time::Duration};

use log::{debug, error};
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

use super::{Module, ModuleError};
use crate::{
    ModuleContext, ModuleEventSender,
    event_bus::ModuleEvent,
    time::{DigitalReadout, HandAngles, TimeOfDay, TimeSource},
};

/// Period between two samples of the wall clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Everything the views need for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockData {
    pub time:    TimeOfDay,
    pub angles:  HandAngles,
    pub readout: DigitalReadout,
}

impl ClockData {
    pub fn from_time(time: TimeOfDay) -> Self {
        Self {
            time,
            angles: HandAngles::from_time(&time),
            readout: DigitalReadout::from_time(&time),
        }
    }
}

impl Default for ClockData {
    fn default() -> Self {
        Self::from_time(TimeOfDay::MIDNIGHT)
    }
}

/// Message type for GUI communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Tick(TimeOfDay),
}

/// Clock module: samples the time source once per second and keeps the last
/// sample for rendering.
#[derive(Debug)]
pub struct Clock {
    data:          ClockData,
    time_source:   Arc<dyn TimeSource>,
    tick_interval: Duration,
    sender:        Option<ModuleEventSender<Message>>,
    task:          Option<JoinHandle<()>>,
}

impl Clock {
    pub fn new(time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            data: ClockData::default(),
            time_source,
            tick_interval: TICK_INTERVAL,
            sender: None,
            task: None,
        }
    }

    /// Get current clock data for rendering
    pub fn data(&self) -> &ClockData {
        &self.data
    }

    /// Whether a tick task is currently attached.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Samples the time source right away, outside the tick cadence.
    pub fn refresh(&mut self) {
        self.data = ClockData::from_time(self.time_source.sample());
    }

    /// Update clock state from GUI message
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(time) => {
                self.data = ClockData::from_time(time);
            }
        }
    }

    fn spawn_ticker(&mut self, ctx: &ModuleContext) {
        let Some(sender) = self.sender.clone() else {
            return;
        };

        let period = self.tick_interval;
        let time_source = Arc::clone(&self.time_source);

        self.task = Some(ctx.runtime_handle().spawn(async move {
            // The sample taken at registration covers the first period.
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let now = time_source.sample();

                if let Err(err) = sender.try_send(Message::Tick(now)) {
                    error!("Failed to publish clock tick: {err}");
                }
            }
        }));
    }

    fn abort_task(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Stopping clock ticker");
            task.abort();
        }
    }
}

impl Module for Clock {
    type RegistrationData<'a> = ();

    fn register(
        &mut self,
        ctx: &ModuleContext,
        _data: Self::RegistrationData<'_>,
    ) -> Result<(), ModuleError> {
        self.abort_task();
        self.refresh();
        self.sender = Some(ctx.module_sender(ModuleEvent::Clock));
        self.spawn_ticker(ctx);

        ctx.request_redraw()?;
        Ok(())
    }

    fn unregister(&mut self) {
        self.abort_task();
        self.sender = None;
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.abort_task();
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use tokio::{runtime::Handle, time::sleep};

    use super::*;
    use crate::{
        event_bus::{BusEvent, EventBus, EventReceiver},
        test_utils::FixedTimeSource,
    };

    fn afternoon() -> TimeOfDay {
        TimeOfDay::new(14, 5, 9).expect("valid time")
    }

    fn setup(time: TimeOfDay) -> (Clock, Arc<FixedTimeSource>, ModuleContext, EventReceiver) {
        let bus = EventBus::new(NonZeroUsize::new(64).expect("capacity"));
        let receiver = bus.receiver();
        let ctx = ModuleContext::new(bus.sender(), Handle::current());
        let source = Arc::new(FixedTimeSource::new(time));
        let clock = Clock::new(Arc::clone(&source) as Arc<dyn TimeSource>);

        (clock, source, ctx, receiver)
    }

    fn drain_ticks(receiver: &mut EventReceiver) -> Vec<TimeOfDay> {
        let mut ticks = Vec::new();
        while let Ok(Some(event)) = receiver.try_recv() {
            if let BusEvent::Module(ModuleEvent::Clock(Message::Tick(time))) = event {
                ticks.push(time);
            }
        }
        ticks
    }

    #[test]
    fn clock_data_for_reference_time() {
        let data = ClockData::from_time(afternoon());

        assert_eq!(data.readout.to_string(), "02:05:09 PM");
        assert_eq!(data.angles.second, 54.0);
        assert_eq!(data.angles.minute, 30.0);
        assert!((data.angles.normalized().hour - 60.4167).abs() < 1e-3);
    }

    #[test]
    fn update_replaces_displayed_sample() {
        let mut clock = Clock::new(Arc::new(FixedTimeSource::new(TimeOfDay::MIDNIGHT)));
        assert_eq!(clock.data().readout.to_string(), "12:00:00 AM");

        clock.update(Message::Tick(afternoon()));

        assert_eq!(clock.data().time, afternoon());
        assert_eq!(clock.data().readout.to_string(), "02:05:09 PM");
    }

    #[tokio::test(start_paused = true)]
    async fn register_samples_immediately() {
        let (mut clock, source, ctx, mut receiver) = setup(afternoon());

        clock.register(&ctx, ()).expect("registered");

        assert_eq!(source.sample_count(), 1);
        assert_eq!(clock.data().time, afternoon());
        assert!(clock.is_running());
        assert!(matches!(receiver.try_recv(), Ok(Some(BusEvent::Redraw))));
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_second() {
        let (mut clock, source, ctx, mut receiver) = setup(afternoon());
        clock.register(&ctx, ()).expect("registered");

        sleep(Duration::from_millis(2_500)).await;

        let ticks = drain_ticks(&mut receiver);
        assert_eq!(ticks, vec![afternoon(), afternoon()]);

        let instants = source.sample_instants();
        assert_eq!(instants.len(), 3);
        for pair in instants.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= TICK_INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_carry_fresh_samples() {
        let (mut clock, source, ctx, mut receiver) = setup(afternoon());
        clock.register(&ctx, ()).expect("registered");

        let later = TimeOfDay::new(14, 5, 10).expect("valid time");
        source.set(later);
        sleep(Duration::from_millis(1_100)).await;

        let ticks = drain_ticks(&mut receiver);
        assert_eq!(ticks, vec![later]);

        for tick in ticks {
            clock.update(Message::Tick(tick));
        }
        assert_eq!(clock.data().readout.to_string(), "02:05:10 PM");
    }

    #[tokio::test(start_paused = true)]
    async fn unregister_stops_ticking() {
        let (mut clock, _source, ctx, mut receiver) = setup(afternoon());
        clock.register(&ctx, ()).expect("registered");

        clock.unregister();
        sleep(Duration::from_secs(5)).await;

        assert!(drain_ticks(&mut receiver).is_empty());
        assert!(!clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_ticker() {
        let (mut clock, source, ctx, mut receiver) = setup(afternoon());
        clock.register(&ctx, ()).expect("registered");

        drop(clock);
        sleep(Duration::from_secs(5)).await;

        assert!(drain_ticks(&mut receiver).is_empty());
        assert_eq!(source.sample_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reregister_replaces_previous_ticker() {
        let (mut clock, _source, ctx, mut receiver) = setup(afternoon());
        clock.register(&ctx, ()).expect("registered");
        clock.register(&ctx, ()).expect("registered again");

        sleep(Duration::from_millis(1_500)).await;

        assert_eq!(drain_ticks(&mut receiver).len(), 1);
    }
}
