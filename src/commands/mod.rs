mod packages;
mod plan;
mod render;

pub use packages::*;
pub use plan::*;
pub use render::*;
