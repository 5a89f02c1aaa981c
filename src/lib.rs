pub mod error;
pub mod config;
pub mod logging;
pub mod validation;
pub mod model;
pub mod forms;
pub mod db;
pub mod ops;
pub mod queries;
pub mod views;
pub mod export;
pub mod cli;
