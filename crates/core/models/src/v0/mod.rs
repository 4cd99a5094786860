mod campsites;
mod favorites;
mod users;

pub use campsites::*;
pub use favorites::*;
pub use users::*;
