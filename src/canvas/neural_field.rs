use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

use crate::animation::{connection_alpha, NeuralFieldState};
use crate::constants::PARTICLE_ALPHA;
use crate::theme::PaletteColors;

/// Canvas program for the pointer-reactive neural field background.
///
/// Pure presentation: reads particle positions the simulation already settled
/// this frame, so connection lines always reflect post-move, post-attraction
/// coordinates.
pub struct NeuralField<'a, Message> {
    pub state: &'a NeuralFieldState,
    pub palette: PaletteColors,
    pub opacity: f32,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> NeuralField<'a, Message> {
    pub fn new(state: &'a NeuralFieldState, palette: PaletteColors, opacity: f32) -> Self {
        Self {
            state,
            palette,
            opacity,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for NeuralField<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let field = self.state.cache.draw(renderer, bounds.size(), |frame| {
            // Hidden during the initializing phase; the simulation keeps
            // running underneath.
            if self.opacity <= 0.01 {
                return;
            }

            let particles = &self.state.particles;

            for p in particles {
                frame.fill(
                    &Path::circle(Point::new(p.x, p.y), p.size),
                    Color {
                        a: PARTICLE_ALPHA * self.opacity,
                        ..self.palette.node
                    },
                );
            }

            // All-pairs pass over the fixed 120-particle set. At this scale
            // the naive O(n^2) sweep is the whole optimization.
            for a in 0..particles.len() {
                for b in (a + 1)..particles.len() {
                    let dx = particles[a].x - particles[b].x;
                    let dy = particles[a].y - particles[b].y;
                    let distance = (dx * dx + dy * dy).sqrt();

                    if let Some(alpha) = connection_alpha(distance) {
                        let stroke = canvas::Stroke {
                            style: canvas::Style::Solid(Color {
                                a: alpha * self.opacity,
                                ..self.palette.accent
                            }),
                            width: 1.0,
                            ..Default::default()
                        };
                        frame.stroke(
                            &Path::line(
                                Point::new(particles[a].x, particles[a].y),
                                Point::new(particles[b].x, particles[b].y),
                            ),
                            stroke,
                        );
                    }
                }
            }
        });
        vec![field]
    }
}
