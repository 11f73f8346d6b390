//! Canvas spinner
//!
//! A faint full ring with a brighter quarter arc on top. The arc's start
//! angle is owned by the app and advanced on every tick.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::canvas::{self, path::Arc, Frame, Geometry, Path, Stroke};
use iced::{Color, Radians, Rectangle, Renderer, Theme};

use crate::Message;

const RING_WIDTH: f32 = 4.0;

/// Canvas program for the spinner
pub struct Spinner {
    angle: f32,
}

impl Spinner {
    pub fn new(angle: f32) -> Self {
        Self { angle: angle % TAU }
    }
}

impl canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - RING_WIDTH;
        let accent = theme.extended_palette().primary.strong.color;

        let ring = Path::circle(center, radius);
        frame.stroke(
            &ring,
            Stroke::default()
                .with_color(Color { a: 0.2, ..accent })
                .with_width(RING_WIDTH),
        );

        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(self.angle),
                end_angle: Radians(self.angle + FRAC_PI_2),
            });
        });
        frame.stroke(&arc, Stroke::default().with_color(accent).with_width(RING_WIDTH));

        vec![frame.into_geometry()]
    }
}
