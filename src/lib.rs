//! Administrative client for the Gate proxy control API
//!
//! Connects to a running proxy over plaintext gRPC, calls `ListServers`
//! once and prints the registered backend servers as indented JSON.

pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod render;
pub mod runner;

/// Bindings generated from `minekube.gate.v1`.
pub mod proto {
    tonic::include_proto!("minekube.gate.v1");
}

pub use client::{bind, invoke, ClientBinding};
pub use config::{ClientConfig, DEFAULT_ADDRESS};
pub use connection::{connect, Connection};
pub use error::{AdminError, AdminResult};
pub use render::{parse, render, JsonMapping, RenderedOutput};
pub use runner::{execute, run};
