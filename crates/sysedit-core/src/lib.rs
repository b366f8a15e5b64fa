pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod shiplog;
pub mod viewport;
pub mod world;
