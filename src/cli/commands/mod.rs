pub mod check;
pub mod clean;
mod command_result;
pub mod helper;
pub mod init;
pub mod lookup;
pub mod stats;

pub use command_result::*;
