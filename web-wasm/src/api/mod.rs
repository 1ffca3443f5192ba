//! 校正サービスとの通信

pub mod proofread;
