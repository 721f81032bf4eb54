pub mod attendance;
pub mod config;
pub mod log;
pub mod matching;
pub mod session;
