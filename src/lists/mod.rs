//! Lists owned by a single user, each holding any number of tasks

pub mod api;
pub mod models;
pub mod service;
pub mod store;

pub use service::ListService;
pub use store::{find_owned_list, ListStore};
