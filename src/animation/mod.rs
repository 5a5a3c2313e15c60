mod entrance;
mod field;
mod typewriter;

pub use entrance::{interactive_deadline, EntranceSequence, Phase};
pub use field::{connection_alpha, NeuralFieldState, Particle};
pub use typewriter::Typewriter;

/// Cubic ease-out for smooth deceleration
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
