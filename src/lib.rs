//! Overture - A staged entrance experience built with Iced.

pub mod animation;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod styles;
pub mod theme;

pub use animation::{
    connection_alpha, ease_out_cubic, interactive_deadline, EntranceSequence, NeuralFieldState,
    Particle, Phase, Typewriter,
};
pub use canvas::{NeuralField, ProcessDemo, ProcessDemoState};
pub use config::Settings;
pub use constants::*;
pub use styles::*;
pub use theme::{app_theme, palette, PaletteColors};
