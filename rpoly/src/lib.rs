mod error;
mod term;
mod poly;

pub use error::*;
pub use term::*;
pub use poly::*;

pub mod util;
