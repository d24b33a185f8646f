mod orm;
pub mod panic;
mod photos;
mod seed;
mod signal;

pub use orm::*;
pub use photos::*;
pub use seed::*;
pub use signal::*;
