pub mod client;
pub mod duration;
pub mod mock;
pub mod models;
pub mod retry;
pub mod service;
