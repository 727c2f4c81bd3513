pub mod user;
pub mod error;

pub use user::*;
pub use error::*;
