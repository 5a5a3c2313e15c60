mod container;
mod input;

pub use container::demo_card_style;
pub use input::cta_input_style;
