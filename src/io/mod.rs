pub mod input;

pub use input::{InputHandler, LineReader};
