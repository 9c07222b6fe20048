use std::sync::Arc;

use tokio::runtime::Handle;

use crate::event_bus::{BusEvent, EventBusError, EventSender, ModuleEvent};

/// Shared utilities exposed to modules when they need to interact with the
/// core event loop.
///
/// The context owns an [`EventSender`] used to push [`BusEvent`] values into the UI
/// queue and a [`Handle`] tied to the runtime powering background tasks. Tasks
/// spawned through the handle must tolerate being aborted at any await point;
/// publishing is synchronous, so an aborted task never leaves a half-queued
/// event behind.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    event_sender: EventSender,
    runtime_handle: Handle,
}

impl ModuleContext {
    /// Create a new context bound to the provided event sender and runtime handle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hydeclock_core::{event_bus::EventBus, module_context::ModuleContext};
    /// # use std::num::NonZeroUsize;
    /// # let runtime = tokio::runtime::Runtime::new().expect("runtime");
    /// let bus = EventBus::new(NonZeroUsize::new(4).expect("capacity"));
    /// let context = ModuleContext::new(bus.sender(), runtime.handle().clone());
    /// # drop(context);
    /// ```
    pub fn new(event_sender: EventSender, runtime_handle: Handle) -> Self {
        Self {
            event_sender,
            runtime_handle,
        }
    }

    /// Access the runtime handle used for spawning background tasks.
    pub fn runtime_handle(&self) -> &Handle {
        &self.runtime_handle
    }

    /// Request a redraw of the widget surface.
    ///
    /// # Postconditions
    ///
    /// - Enqueues a [`BusEvent::Redraw`] if the bus has remaining capacity, otherwise
    ///   returns [`EventBusError::QueueFull`].
    pub fn request_redraw(&self) -> Result<(), EventBusError> {
        self.event_sender.try_send(BusEvent::Redraw)
    }

    fn publish_module_event(&self, event: ModuleEvent) -> Result<(), EventBusError> {
        self.event_sender.try_send(BusEvent::Module(event))
    }

    /// Build a type-safe module event sender from the provided conversion function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hydeclock_core::{event_bus::EventBus, module_context::ModuleContext};
    /// # use hydeclock_core::event_bus::ModuleEvent;
    /// # use hydeclock_core::modules;
    /// # use hydeclock_core::time::TimeOfDay;
    /// # use std::num::NonZeroUsize;
    /// # let runtime = tokio::runtime::Runtime::new().expect("runtime");
    /// let bus = EventBus::new(NonZeroUsize::new(2).expect("capacity"));
    /// let context = ModuleContext::new(bus.sender(), runtime.handle().clone());
    /// let sender = context.module_sender(ModuleEvent::Clock);
    /// sender
    ///     .try_send(modules::clock::Message::Tick(TimeOfDay::MIDNIGHT))
    ///     .expect("queued");
    /// ```
    pub fn module_sender<T, F>(&self, convert: F) -> ModuleEventSender<T>
    where
        T: Send + 'static,
        F: Fn(T) -> ModuleEvent + Send + Sync + 'static,
    {
        ModuleEventSender {
            context: self.clone(),
            convert: Arc::new(convert),
        }
    }
}

/// Strongly-typed wrapper around [`ModuleContext::publish_module_event`].
#[derive(Clone)]
pub struct ModuleEventSender<T> {
    context: ModuleContext,
    convert: Arc<dyn Fn(T) -> ModuleEvent + Send + Sync>,
}

impl<T> std::fmt::Debug for ModuleEventSender<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleEventSender")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<T> ModuleEventSender<T>
where
    T: Send + 'static,
{
    /// Convert the payload into a [`ModuleEvent`] and enqueue it on the bus.
    ///
    /// # Postconditions
    ///
    /// - Returns [`Ok`] if the event is successfully queued, otherwise propagates
    ///   [`EventBusError`] from the underlying [`EventSender`].
    pub fn try_send(&self, payload: T) -> Result<(), EventBusError> {
        let event = (self.convert)(payload);
        self.context.publish_module_event(event)
    }
}
