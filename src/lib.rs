pub mod board;
pub mod models;
pub mod services;
pub mod utils;
