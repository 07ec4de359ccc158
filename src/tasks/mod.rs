//! Tasks, owned transitively through their parent list

pub mod api;
pub mod models;
pub mod service;
pub mod store;

pub use service::TaskService;
pub use store::TaskStore;
