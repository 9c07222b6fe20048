//! Analog dial drawn on a canvas: face, numerals, three rotating rings with
//! their hands and glowing dots, and the centre hub.

use hydeclock_core::{
    config::ClockConfig,
    modules::clock::ClockData,
    style::{FACE_COLOR, MARKER_COLOR, MARKER_OPACITY, RING_OUTLINE},
};
use iced::{
    Color, Pixels, Point, Rectangle, Renderer, Theme, alignment,
    mouse::Cursor,
    widget::canvas::{Cache, Frame, Geometry, Path, Program, Stroke, Text, stroke::LineCap},
};

pub const NUMERAL_SIZE: f32 = 32.0;
pub const NUMERAL_INSET: f32 = 20.0;
pub const DOT_DIAMETER: f32 = 15.0;
pub const HUB_DIAMETER: f32 = 8.0;
pub const HUB_BORDER: f32 = 3.0;
const OUTLINE_WIDTH: f32 = 2.0;

/// Which hand a ring carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Second,
    Minute,
    Hour,
}

/// Size of one ring relative to the dial radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub hand:       Hand,
    pub radius:     f32,
    pub hand_width: f32,
}

impl Ring {
    /// Hands reach halfway to the ring.
    pub fn hand_length(&self) -> f32 {
        self.radius / 2.0
    }
}

/// Rings from outermost to innermost for a dial of `radius`.
pub fn rings(radius: f32) -> [Ring; 3] {
    [
        Ring {
            hand:       Hand::Second,
            radius:     radius * 2.0 / 3.0,
            hand_width: 2.0,
        },
        Ring {
            hand:       Hand::Minute,
            radius:     radius * 8.0 / 15.0,
            hand_width: 4.0,
        },
        Ring {
            hand:       Hand::Hour,
            radius:     radius * 6.0 / 15.0,
            hand_width: 6.0,
        },
    ]
}

/// Point at `distance` from `center`, `degrees` clockwise from twelve o'clock.
pub fn polar(center: Point, distance: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + distance * radians.sin(),
        center.y - distance * radians.cos(),
    )
}

/// Centre of numeral `n` (1..=12).
pub fn numeral_position(center: Point, radius: f32, n: u32) -> Point {
    polar(
        center,
        radius - NUMERAL_INSET - NUMERAL_SIZE / 2.0,
        n as f32 * 30.0,
    )
}

/// Canvas program drawing one [`ClockData`] sample.
#[derive(Clone, Copy)]
pub struct Dial<'a> {
    data:  &'a ClockData,
    clock: &'a ClockConfig,
    cache: &'a Cache,
}

impl<'a> Dial<'a> {
    pub fn new(data: &'a ClockData, clock: &'a ClockConfig, cache: &'a Cache) -> Self {
        Self { data, clock, cache }
    }

    fn color_of(&self, hand: Hand) -> Color {
        match hand {
            Hand::Second => self.clock.second_color(),
            Hand::Minute => self.clock.minute_color(),
            Hand::Hour => self.clock.hour_color(),
        }
    }

    fn angle_of(&self, hand: Hand) -> f32 {
        let angles = self.data.angles.normalized();
        match hand {
            Hand::Second => angles.second,
            Hand::Minute => angles.minute,
            Hand::Hour => angles.hour,
        }
    }

    fn draw_face(&self, frame: &mut Frame, center: Point, radius: f32) {
        frame.fill(&Path::circle(center, radius), FACE_COLOR);

        for n in 1..=12 {
            frame.fill_text(Text {
                content: n.to_string(),
                position: numeral_position(center, radius, n),
                color: MARKER_COLOR.scale_alpha(MARKER_OPACITY),
                size: Pixels(NUMERAL_SIZE),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });
        }
    }

    fn draw_ring(&self, frame: &mut Frame, center: Point, ring: Ring) {
        let color = self.color_of(ring.hand);
        let angle = self.angle_of(ring.hand);

        frame.stroke(
            &Path::circle(center, ring.radius),
            Stroke::default()
                .with_color(RING_OUTLINE)
                .with_width(OUTLINE_WIDTH),
        );

        frame.stroke(
            &Path::line(center, polar(center, ring.hand_length(), angle)),
            Stroke::default()
                .with_color(color)
                .with_width(ring.hand_width)
                .with_line_cap(LineCap::Round),
        );

        let dot = polar(center, ring.radius, angle);
        // Glow: fading halos under the dot.
        for (spread, alpha) in [(10.0, 0.15), (5.0, 0.35)] {
            frame.fill(
                &Path::circle(dot, DOT_DIAMETER / 2.0 + spread),
                color.scale_alpha(alpha),
            );
        }
        frame.fill(&Path::circle(dot, DOT_DIAMETER / 2.0), color);
    }

    fn draw_hub(&self, frame: &mut Frame, center: Point) {
        let hub = Path::circle(center, HUB_DIAMETER / 2.0);
        frame.fill(&hub, FACE_COLOR);
        frame.stroke(
            &hub,
            Stroke::default()
                .with_color(MARKER_COLOR)
                .with_width(HUB_BORDER),
        );
    }
}

impl<Message> Program<Message> for Dial<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<Geometry> {
        let dial = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0;

            self.draw_face(frame, center, radius);
            for ring in rings(radius) {
                self.draw_ring(frame, center, ring);
            }
            self.draw_hub(frame, center);
        });

        vec![dial]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn rings_shrink_inwards_with_thicker_hands() {
        let [second, minute, hour] = rings(300.0);

        assert_eq!(second.radius, 200.0);
        assert_eq!(minute.radius, 160.0);
        assert_eq!(hour.radius, 120.0);
        assert!(second.hand_width < minute.hand_width);
        assert!(minute.hand_width < hour.hand_width);
        assert_eq!(hour.hand_length(), 60.0);
    }

    #[test]
    fn polar_zero_points_up_and_turns_clockwise() {
        let center = Point::new(100.0, 100.0);

        assert_close(polar(center, 50.0, 0.0), Point::new(100.0, 50.0));
        assert_close(polar(center, 50.0, 90.0), Point::new(150.0, 100.0));
        assert_close(polar(center, 50.0, 180.0), Point::new(100.0, 150.0));
        assert_close(polar(center, 50.0, 270.0), Point::new(50.0, 100.0));
    }

    #[test]
    fn numerals_sit_inside_the_rim() {
        let center = Point::new(300.0, 300.0);

        assert_close(numeral_position(center, 300.0, 12), Point::new(300.0, 36.0));
        assert_close(numeral_position(center, 300.0, 3), Point::new(564.0, 300.0));
    }
}
