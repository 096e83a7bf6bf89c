pub mod draft;
pub mod field;
pub mod log;
pub mod notify;
pub mod persist;
pub mod show;
pub mod store;
