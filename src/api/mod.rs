//! API module for HTTP handlers, middleware, and DTOs.
//!
//! This module provides the HTTP transport for the catalog: request
//! handlers, middleware components, and data transfer objects. The stores
//! themselves know nothing about HTTP.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
mod doc;
