use std::sync::Arc;

use hydeclock_core::{
    config::{self, ConfigApplied, ConfigEvent},
    event_bus::{BusEvent, ModuleEvent},
    modules::Module,
};
use iced::{Subscription, Task, time};
use log::{debug, error, info, warn};

use super::{
    bus::drain_bus,
    state::{App, Message},
};
use crate::get_log_spec;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::None => Task::none(),
            Message::MicroTick => {
                Task::perform(drain_bus(Arc::clone(&self.bus_receiver)), Message::BusFlushed)
            }
            Message::BusFlushed(outcome) => {
                if outcome.had_error() {
                    error!("Failed to drain event bus, keeping fast cadence");
                    self.micro_ticker.record_activity();
                } else if outcome.is_empty() {
                    self.micro_ticker.record_idle();
                } else {
                    self.micro_ticker.record_activity();
                }

                let tasks: Vec<_> = outcome
                    .into_events()
                    .into_iter()
                    .filter_map(App::message_from_bus_event)
                    .map(|msg| self.update(msg))
                    .collect();

                Task::batch(tasks)
            }
            Message::ConfigChanged(ConfigApplied { config, impact }) => {
                info!("New config applied: {config:?}");
                debug!("Config impact: {impact:?}");

                let config = Arc::unwrap_or_clone(config);
                let task = self.surface.sync(&config.clock, &impact);

                if impact.colors_changed || impact.geometry_changed {
                    self.dial_cache.clear();
                }

                self.config = config;

                if impact.log_level_changed {
                    self.logger.set_new_spec(get_log_spec(&self.config.log_level));
                }

                task
            }
            Message::ConfigDegraded(degradation) => {
                warn!(
                    "Configuration degraded, keeping last valid settings: {}",
                    degradation.reason
                );
                Task::none()
            }
            Message::Clock(message) => {
                self.clock.update(message);
                self.dial_cache.clear();
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch(vec![
            time::every(self.micro_ticker.interval()).map(|_| Message::MicroTick),
            config::subscription(&self.config_path, Arc::clone(&self.config_manager)).map(
                |event| match event {
                    ConfigEvent::Applied(applied) => Message::ConfigChanged(applied),
                    ConfigEvent::Degraded(degradation) => Message::ConfigDegraded(degradation),
                },
            ),
        ])
    }

    pub(crate) fn register_modules(&mut self) {
        if let Err(err) = self.clock.register(&self.module_context, ()) {
            error!("Failed to register clock module: {err}");
        }
    }

    fn message_from_bus_event(event: BusEvent) -> Option<Message> {
        match event {
            BusEvent::Redraw => Some(Message::None),
            BusEvent::Module(ModuleEvent::Clock(message)) => Some(Message::Clock(message)),
            _ => None,
        }
    }
}
