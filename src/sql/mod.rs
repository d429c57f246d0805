//! Parameterized SQL for updates whose column set depends on the request.

mod builder;
mod params;

pub use builder::{QueryBuf, UpdateBuilder};
pub use params::BindValue;
