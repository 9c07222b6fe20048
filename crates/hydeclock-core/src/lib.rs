pub mod config;
pub mod event_bus;
pub mod module_context;
pub mod modules;
pub mod style;
pub mod surface;
pub mod time;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use module_context::{ModuleContext, ModuleEventSender};
