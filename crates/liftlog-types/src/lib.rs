pub mod error;
pub mod session;
mod util;

pub use error::{Error, Result};
pub use session::*;
pub use util::*;
