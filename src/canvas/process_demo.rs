use std::f32::consts::PI;
use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Size, Theme};

use crate::constants::TICK_SECONDS;
use crate::theme::PaletteColors;

/// State for the process demo animation.
#[derive(Debug)]
pub struct ProcessDemoState {
    pub tick: f32,
    pub cache: canvas::Cache,
}

impl Default for ProcessDemoState {
    fn default() -> Self {
        Self {
            tick: 0.0,
            cache: canvas::Cache::default(),
        }
    }
}

impl ProcessDemoState {
    /// Updates the demo animation state.
    pub fn update(&mut self) {
        self.tick += TICK_SECONDS;
        self.cache.clear();
    }
}

/// Canvas program for the decorative process demo: an idea node on the left,
/// three beams carrying it through correction waypoints, and a slowly
/// rotating output cube on the right.
pub struct ProcessDemo<'a, Message> {
    pub state: &'a ProcessDemoState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ProcessDemo<'a, Message> {
    pub fn new(state: &'a ProcessDemoState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ProcessDemo<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let demo = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let tick = self.state.tick;
            let mid_y = bounds.height / 2.0;
            let node_size = 48.0;
            let margin = 48.0;

            // Left: the input node, a bordered square with a pulsing core.
            let node_origin = Point::new(margin, mid_y - node_size / 2.0);
            let node_rect = Path::rectangle(node_origin, Size::new(node_size, node_size));
            frame.stroke(
                &node_rect,
                Stroke::default()
                    .with_color(Color { a: 0.2, ..self.palette.text })
                    .with_width(1.0),
            );
            let core_pulse = ((tick * 2.0 * PI).sin() + 1.0) * 0.5;
            frame.fill(
                &Path::circle(
                    Point::new(margin + node_size / 2.0, mid_y),
                    3.0,
                ),
                Color {
                    a: 0.4 + 0.4 * core_pulse,
                    ..self.palette.text
                },
            );

            // Middle: three beams from the input node to the output cube.
            let beam_start = Point::new(margin + node_size, mid_y);
            let beam_end = Point::new(bounds.width - margin - node_size, mid_y);
            let span = beam_end.x - beam_start.x;
            let rise = 30.0;

            let beam = |offset: f32| {
                Path::new(|b| {
                    b.move_to(beam_start);
                    b.bezier_curve_to(
                        Point::new(beam_start.x + span * 0.17, beam_start.y),
                        Point::new(beam_start.x + span * 0.17, beam_start.y + offset),
                        Point::new(beam_start.x + span * 0.33, beam_start.y + offset),
                    );
                    b.line_to(Point::new(beam_start.x + span * 0.67, beam_start.y + offset));
                    b.bezier_curve_to(
                        Point::new(beam_start.x + span * 0.83, beam_start.y + offset),
                        Point::new(beam_start.x + span * 0.83, beam_start.y),
                        beam_end,
                    );
                })
            };

            // Outer beams breathe on offset periods; the middle one is steady.
            let top_pulse = ((tick * 2.0 * PI / 3.0).sin() + 1.0) * 0.5;
            let bottom_pulse = ((tick * 2.0 * PI / 3.5).sin() + 1.0) * 0.5;

            frame.stroke(
                &beam(-rise),
                Stroke::default()
                    .with_color(Color {
                        a: 0.2 + 0.4 * top_pulse,
                        ..self.palette.accent
                    })
                    .with_width(1.0),
            );
            frame.stroke(
                &beam(0.0),
                Stroke::default()
                    .with_color(Color { a: 0.3, ..self.palette.text })
                    .with_width(1.0),
            );
            frame.stroke(
                &beam(rise),
                Stroke::default()
                    .with_color(Color {
                        a: 0.2 + 0.4 * bottom_pulse,
                        ..self.palette.accent
                    })
                    .with_width(1.0),
            );

            // Correction waypoints along the outer beams.
            let waypoint_a = ((tick * 2.0 * PI / 2.0).sin() + 1.0) * 0.5;
            let waypoint_b = ((tick * 2.0 * PI / 2.5).sin() + 1.0) * 0.5;
            frame.fill(
                &Path::circle(
                    Point::new(beam_start.x + span * 0.45, mid_y - rise),
                    3.0,
                ),
                Color {
                    a: 0.8 * waypoint_a,
                    ..self.palette.accent
                },
            );
            frame.fill(
                &Path::circle(
                    Point::new(beam_start.x + span * 0.58, mid_y + rise),
                    3.0,
                ),
                Color {
                    a: 0.8 * waypoint_b,
                    ..self.palette.accent
                },
            );

            // Right: the output cube, two nested squares, the outer slowly
            // rotating.
            let cube_center = Point::new(bounds.width - margin - node_size / 2.0, mid_y);
            frame.with_save(|frame| {
                frame.translate(iced::Vector::new(cube_center.x, cube_center.y));
                frame.rotate(tick * 2.0 * PI / 10.0);
                let half = node_size / 2.0;
                let outer = Path::rectangle(
                    Point::new(-half, -half),
                    Size::new(node_size, node_size),
                );
                frame.stroke(
                    &outer,
                    Stroke::default()
                        .with_color(Color { a: 0.3, ..self.palette.accent_soft })
                        .with_width(1.0),
                );
                frame.fill(&outer, Color { a: 0.1, ..self.palette.accent });
            });
            frame.with_save(|frame| {
                frame.translate(iced::Vector::new(cube_center.x, cube_center.y));
                frame.rotate(PI / 4.0);
                let half = node_size * 0.375;
                let inner = Path::rectangle(
                    Point::new(-half, -half),
                    Size::new(half * 2.0, half * 2.0),
                );
                frame.stroke(
                    &inner,
                    Stroke::default()
                        .with_color(Color { a: 0.2, ..self.palette.text })
                        .with_width(1.0),
                );
            });
        });
        vec![demo]
    }
}
