//! HTTP request handlers.

mod health;
mod posts;
pub(crate) mod reply;

pub use health::health;
pub use posts::{create, delete, get_one, list, search, update};
