//! Weixin HTTP Client module
//!
//! This module contains the RpcClient and its builder.

mod rpc_client;
pub use rpc_client::{RpcClient, RpcClientBuilder};
