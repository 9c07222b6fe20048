use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use flexi_logger::LoggerHandle;
use hydeclock_core::{
    ModuleContext,
    config::{ConfigApplied, ConfigDegradation, ConfigManager},
    event_bus::{EventReceiver, EventSender},
    modules::{self, clock::Clock},
    surface::ClockSurface,
    time::TimeSource,
};
use hydeclock_proto::config::Config;
use iced::{Task, widget::canvas::Cache};
use tokio::runtime::Handle;

use super::{bus::BusFlushOutcome, micro_ticker::MicroTicker};

pub struct App {
    pub(super) config_path:    PathBuf,
    pub(super) logger:         LoggerHandle,
    pub(super) config_manager: Arc<ConfigManager>,
    pub(super) bus_receiver:   Arc<Mutex<EventReceiver>>,
    pub(super) micro_ticker:   MicroTicker,
    pub(super) module_context: ModuleContext,
    pub(super) dial_cache:     Cache,
    pub config:                Config,
    pub surface:               ClockSurface,
    pub clock:                 Clock,
}

#[derive(Debug, Clone)]
pub enum Message {
    None,
    MicroTick,
    BusFlushed(BusFlushOutcome),
    ConfigChanged(ConfigApplied),
    ConfigDegraded(ConfigDegradation),
    Clock(modules::clock::Message),
}

impl App {
    pub fn new(
        (
            logger,
            config,
            config_manager,
            config_path,
            time_source,
            event_sender,
            runtime_handle,
            bus_receiver,
        ): (
            LoggerHandle,
            Config,
            Arc<ConfigManager>,
            PathBuf,
            Arc<dyn TimeSource>,
            EventSender,
            Handle,
            EventReceiver,
        ),
    ) -> impl FnOnce() -> (Self, Task<Message>) {
        move || {
            let (surface, task) = ClockSurface::create(&config.clock);

            let mut app = App {
                config_path,
                logger,
                config_manager,
                bus_receiver: Arc::new(Mutex::new(bus_receiver)),
                micro_ticker: MicroTicker::default(),
                module_context: ModuleContext::new(event_sender, runtime_handle),
                dial_cache: Cache::new(),
                surface,
                clock: Clock::new(time_source),
                config,
            };

            app.register_modules();

            (app, task)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{num::NonZeroUsize, sync::OnceLock};

    use hydeclock_core::{
        config::{ClockConfig, ConfigManager},
        event_bus::EventBus,
        test_utils::FixedTimeSource,
        time::TimeOfDay,
    };

    use super::*;

    fn test_logger() -> LoggerHandle {
        static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();
        LOGGER
            .get_or_init(|| {
                flexi_logger::Logger::try_with_env_or_str("off")
                    .expect("failed to configure test logger")
                    .start()
                    .expect("failed to start test logger")
            })
            .clone()
    }

    fn build_app(
        runtime: &tokio::runtime::Runtime,
        time: TimeOfDay,
    ) -> (App, Arc<ConfigManager>) {
        let config = Config::default();
        let config_manager = Arc::new(ConfigManager::new(config.clone()));
        let bus = EventBus::new(NonZeroUsize::new(16).expect("non-zero"));
        let time_source: Arc<dyn TimeSource> = Arc::new(FixedTimeSource::new(time));

        let (app, _) = App::new((
            test_logger(),
            config,
            Arc::clone(&config_manager),
            PathBuf::new(),
            time_source,
            bus.sender(),
            runtime.handle().clone(),
            bus.receiver(),
        ))();

        (app, config_manager)
    }

    #[test]
    fn new_app_shows_current_time_immediately() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let time = TimeOfDay::new(14, 5, 9).expect("valid time");

        let (app, _) = build_app(&runtime, time);

        assert_eq!(app.clock.data().time, time);
        assert_eq!(app.clock.data().readout.to_string(), "02:05:09 PM");
        assert!(app.clock.is_running());
    }

    #[test]
    fn clock_message_replaces_displayed_time() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (mut app, _) = build_app(&runtime, TimeOfDay::MIDNIGHT);
        let next = TimeOfDay::new(0, 0, 1).expect("valid time");

        let _ = app.update(Message::Clock(modules::clock::Message::Tick(next)));

        assert_eq!(app.clock.data().time, next);
    }

    #[test]
    fn config_change_resizes_surface_in_place() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let (mut app, manager) = build_app(&runtime, TimeOfDay::MIDNIGHT);
        let original = app.surface.id;

        let applied = manager
            .apply(Config {
                clock: ClockConfig {
                    radius: 100,
                    show_digital_clock: false,
                    ..Default::default()
                },
                ..Default::default()
            })
            .expect("applied");

        let _ = app.update(Message::ConfigChanged(applied));

        assert_eq!(app.surface.id, original);
        assert_eq!(app.surface.size(), (280, 280));
        assert_eq!(app.config.clock.radius, 100);
    }
}
