use hydeclock_core::{
    style::{frame_style, hydeclock_theme},
    surface::PADDING,
};
use iced::{
    Alignment, Color, Element, Length, Theme,
    daemon::Appearance,
    widget::{Column, Row, canvas, container},
    window::Id,
};

use super::state::{App, Message};
use crate::views::{dial::Dial, readout};

impl App {
    pub fn title(&self, _id: Id) -> String {
        String::from("hydeclock")
    }

    pub fn theme(&self, _id: Id) -> Theme {
        hydeclock_theme()
    }

    pub fn style(&self, theme: &Theme) -> Appearance {
        Appearance {
            background_color: Color::TRANSPARENT,
            text_color:       theme.palette().text,
            icon_color:       theme.palette().text,
        }
    }

    pub fn view(&self, id: Id) -> Element<'_, Message> {
        if id != self.surface.id {
            return Row::new().into();
        }

        let clock = &self.config.clock;
        let diameter = 2.0 * clock.radius as f32;

        let dial = canvas(Dial::new(self.clock.data(), clock, &self.dial_cache))
            .width(Length::Fixed(diameter))
            .height(Length::Fixed(diameter));

        let content = Column::new()
            .align_x(Alignment::Center)
            .spacing(16)
            .push(dial)
            .push_maybe(
                clock
                    .show_digital_clock
                    .then(|| readout::view(&self.clock.data().readout, clock)),
            );

        let corner = clock.radius as f32 + PADDING as f32;

        container(content)
            .padding(PADDING as u16)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .style(move |_| frame_style(corner))
            .into()
    }
}
