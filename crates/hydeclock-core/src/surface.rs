use iced::{
    Task,
    platform_specific::shell::commands::layer_surface::{
        Anchor, KeyboardInteractivity, Layer, get_layer_surface, set_size,
    },
    runtime::platform_specific::wayland::layer_surface::{IcedOutput, SctkLayerSurfaceSettings},
    window::Id,
};
use log::debug;

use crate::config::{ClockConfig, ConfigImpact};

/// Space between the dial and the surface edge.
pub const PADDING: u32 = 40;

/// Height reserved below the dial for the digital readout.
pub const READOUT_HEIGHT: u32 = 90;

const NAMESPACE: &str = "hydeclock";

/// Surface size in logical pixels for the given clock settings.
pub fn surface_size(clock: &ClockConfig) -> (u32, u32) {
    let side = 2 * clock.radius + 2 * PADDING;

    if clock.show_digital_clock {
        (side, side + READOUT_HEIGHT)
    } else {
        (side, side)
    }
}

/// The single layer surface hosting the clock, centred on the active output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockSurface {
    pub id: Id,
    size:   (u32, u32),
}

impl ClockSurface {
    /// Requests a new layer surface sized for `clock`.
    pub fn create<Message: 'static>(clock: &ClockConfig) -> (Self, Task<Message>) {
        let surface = Self {
            id:   Id::unique(),
            size: surface_size(clock),
        };

        debug!("Creating clock surface {:?}, size {:?}", surface.id, surface.size);

        let task = get_layer_surface(SctkLayerSurfaceSettings {
            id: surface.id,
            namespace: NAMESPACE.to_string(),
            size: Some((Some(surface.size.0), Some(surface.size.1))),
            layer: Layer::Bottom,
            pointer_interactivity: false,
            keyboard_interactivity: KeyboardInteractivity::None,
            exclusive_zone: 0,
            output: IcedOutput::Active,
            // No anchored edge: the compositor centres the surface.
            anchor: Anchor::empty(),
            ..Default::default()
        });

        (surface, task)
    }

    /// Current size in logical pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Resizes the surface when a config update changed its geometry.
    pub fn sync<Message: 'static>(&mut self, clock: &ClockConfig, impact: &ConfigImpact) -> Task<Message> {
        let size = surface_size(clock);
        if !impact.geometry_changed || size == self.size {
            return Task::none();
        }

        debug!("Resizing clock surface {:?} to {size:?}", self.id);
        self.size = size;

        set_size(self.id, Some(size.0), Some(size.1))
    }
}
