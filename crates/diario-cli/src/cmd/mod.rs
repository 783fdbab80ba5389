pub mod authorize;
pub mod config;
pub mod guard;
pub mod init;
pub mod report;
pub mod sort;
pub mod validate;
