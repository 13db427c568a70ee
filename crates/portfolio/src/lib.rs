mod player;
mod project;

pub use player::*;
pub use project::*;
