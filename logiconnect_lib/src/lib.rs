pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod flow;
pub mod session;
pub mod storage;
pub mod user;
pub mod vehicle;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{Error, ResultExt, Step};
