pub mod config;
pub mod info;
pub mod init;
pub mod plan;
pub mod populate;
pub mod validate;
