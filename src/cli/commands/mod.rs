//! Command implementations

mod create;
mod delete;
mod get;
mod list;
#[cfg(feature = "server")]
mod serve;
mod update;

pub use create::{CreateArgs, create};
pub use delete::delete;
pub use get::get;
pub use list::list;
#[cfg(feature = "server")]
pub use serve::serve;
pub use update::update;
