pub mod model;
pub mod names;

pub use model::*;
pub use names::*;
