//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalog scanning, statistics and message lookup to AI assistants
//! over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
