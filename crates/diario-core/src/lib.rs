pub mod activity;
pub mod auth;
pub mod config;
pub mod error;
pub mod form;
pub mod io;
pub mod paths;
pub mod records;
pub mod report;
pub mod time;
pub mod types;

pub use error::{DiarioError, Result};
