pub mod album_client;
pub mod album_sync;
pub mod cli;
pub mod config;
pub mod currency;
pub mod model;
pub mod render;
pub mod shell;
pub mod sync_error;
pub mod utils;
pub mod view;

pub type GenError = Box<dyn std::error::Error>;
