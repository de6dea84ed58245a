pub mod api;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
