//! タミル語文書AI校正クライアント（CLI）

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
