mod error;
pub use error::*;

mod helper;
pub use helper::*;
