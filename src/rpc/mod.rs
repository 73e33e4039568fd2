//! JSON-RPC over HTTP
//!
//! Request envelope types and the client that posts them to an agent.

mod client;
pub mod protocol;

pub use client::{normalize_agent_url, RpcClient};
pub use protocol::{JsonRpcRequest, ResponseKind};
