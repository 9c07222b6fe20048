use std::borrow::Cow;

use masterror::Error;

use crate::{event_bus::EventBusError, module_context::ModuleContext};

pub mod clock;

/// Errors that can occur while registering a module.
#[derive(Debug, Error)]
pub enum ModuleError {
    /// Propagates failures originating from the event bus.
    #[error("module event bus interaction failed: {0}")]
    EventBus(#[from] EventBusError),
    /// Domain-specific registration failures surfaced by the module.
    #[error("module registration failed: {reason}")]
    Registration { reason: Cow<'static, str> },
}

impl ModuleError {
    /// Construct a registration error with the provided reason.
    pub fn registration(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Registration {
            reason: reason.into(),
        }
    }
}

/// Behaviour shared by modules that run background work on the shared runtime.
///
/// [`register`](Module::register) receives the shared [`ModuleContext`] so a
/// module can cache a typed event sender and spawn its tasks;
/// [`unregister`](Module::unregister) must stop everything `register` started.
/// Registering twice replaces the previous registration.
pub trait Module {
    type RegistrationData<'a>;

    /// Register the module with the shared runtime context.
    fn register(
        &mut self,
        ctx: &ModuleContext,
        data: Self::RegistrationData<'_>,
    ) -> Result<(), ModuleError>;

    /// Stop background work started by [`register`](Module::register).
    fn unregister(&mut self) {}
}
