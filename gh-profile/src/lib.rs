pub mod cli;
pub mod error;
pub mod logger;
pub mod session;


pub use cli::{ActionArg, Cli};
pub use error::{ProfileError, Result as ProfileResult};
pub use session::{Report, SessionRequest, run};
