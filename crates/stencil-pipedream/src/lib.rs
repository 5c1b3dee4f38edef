//! # stencil-pipedream
//!
//! Thin client for the Pipedream Connect API plus wrappers that expose
//! its operations as tools for an agent framework. Each tool carries a
//! static name, a description, and a JSON Schema for its arguments, and
//! delegates to a shared [`PipedreamClient`].

pub mod client;
pub mod error;
pub mod tools;

pub use client::{PIPEDREAM_API_BASE, PipedreamClient};
pub use error::PipedreamError;
pub use tools::{
    DeploySourceTool, GetComponentTool, ListAppsTool, ListComponentsTool, PipedreamTool,
    RunActionTool, tools,
};
