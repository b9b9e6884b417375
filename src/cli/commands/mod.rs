pub mod check;
mod command_result;
pub mod flatten;
pub mod get;
pub mod helper;
pub mod init;
pub mod placeholders;

pub use command_result::*;
