//! Fixed palette and container styles of the widget. Only the hand colours
//! are configurable; everything else here is part of the look.

use iced::{
    Background, Border, Color, Shadow, Theme, Vector,
    theme::Palette,
    widget::container,
};

/// Dial face.
pub const FACE_COLOR: Color = Color::from_rgb8(0x2f, 0x36, 0x3e);

/// Numerals, hub border and the meridiem label.
pub const MARKER_COLOR: Color = Color::WHITE;

/// Opacity of the hour numerals.
pub const MARKER_OPACITY: f32 = 0.25;

/// Faint outline of each rotating ring.
pub const RING_OUTLINE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);

/// Border of the digital readout pill.
pub const READOUT_BORDER: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

/// Builds the widget [`Theme`].
#[must_use]
pub fn hydeclock_theme() -> Theme {
    Theme::custom(
        "hydeclock".to_string(),
        Palette {
            background: FACE_COLOR,
            text:       MARKER_COLOR,
            primary:    MARKER_COLOR,
            success:    MARKER_COLOR,
            danger:     MARKER_COLOR,
        },
    )
}

/// Outer frame: rounded bottom corners, top corners following the dial.
pub fn frame_style(radius: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(FACE_COLOR.scale_alpha(0.6))),
        border: Border {
            color:  Color::TRANSPARENT,
            width:  0.0,
            radius: iced::border::Radius {
                top_left:     radius,
                top_right:    radius,
                bottom_right: 20.0,
                bottom_left:  20.0,
            },
        },
        shadow: Shadow {
            color:       Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset:      Vector::new(12.0, 12.0),
            blur_radius: 40.0,
        },
        ..container::Style::default()
    }
}

/// Pill around the digital readout.
pub fn readout_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: None,
        border: Border {
            color:  READOUT_BORDER,
            width:  2.0,
            radius: 40.0.into(),
        },
        shadow: Shadow {
            color:       Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset:      Vector::new(5.0, 5.0),
            blur_radius: 10.0,
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_palette_carries_no_hand_colors() {
        let palette = hydeclock_theme().palette();

        assert_eq!(palette.background, Color::from_rgb8(0x2f, 0x36, 0x3e));
        assert_eq!(palette.success, MARKER_COLOR);
        assert_eq!(palette.danger, MARKER_COLOR);
    }

    #[test]
    fn frame_follows_dial_radius() {
        let style = frame_style(150.0);
        assert_eq!(style.border.radius.top_left, 150.0);
        assert_eq!(style.border.radius.bottom_left, 20.0);
    }

    #[test]
    fn readout_pill_is_fully_rounded() {
        let style = readout_style(&hydeclock_theme());
        assert_eq!(style.border.radius.top_left, 40.0);
        assert_eq!(style.border.width, 2.0);
    }
}
