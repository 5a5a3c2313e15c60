mod neural_field;
mod process_demo;

pub use neural_field::NeuralField;
pub use process_demo::{ProcessDemo, ProcessDemoState};
