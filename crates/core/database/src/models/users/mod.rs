mod model;
mod ops;
#[cfg(feature = "rocket-impl")]
mod rocket;

pub use model::*;
pub use ops::*;
