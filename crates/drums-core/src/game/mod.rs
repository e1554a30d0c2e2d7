mod note;
mod session;

pub use note::*;
pub use session::*;
