use hydeclock_core::{
    config::ClockConfig,
    style::{MARKER_COLOR, readout_style},
    time::DigitalReadout,
};
use iced::{
    Alignment, Color, Element,
    widget::{Row, container, text},
};

pub const TEXT_SIZE: f32 = 24.0;
pub const SEGMENT_GAP: f32 = 15.0;

/// Coloured pieces of `HH : MM : SS AM`, in display order.
pub fn segments(readout: &DigitalReadout, clock: &ClockConfig) -> Vec<(String, Color)> {
    let hour = clock.hour_color();
    let minute = clock.minute_color();

    vec![
        (readout.hours.clone(), hour),
        (":".to_owned(), hour),
        (readout.minutes.clone(), minute),
        (":".to_owned(), minute),
        (readout.seconds.clone(), clock.second_color()),
        (readout.meridiem.to_string(), MARKER_COLOR),
    ]
}

pub fn view<'a, Message: 'a>(readout: &DigitalReadout, clock: &ClockConfig) -> Element<'a, Message> {
    let row = segments(readout, clock)
        .into_iter()
        .fold(Row::new().spacing(SEGMENT_GAP).align_y(Alignment::Center), |row, (content, color)| {
            row.push(text(content).size(TEXT_SIZE).color(color))
        });

    container(row)
        .padding([10, 24])
        .style(readout_style)
        .into()
}
