//! HTTP server module for the rail advisor.
//!
//! This module provides an axum-based HTTP server that exposes the
//! recommendation services as a JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and rejection mapping                  │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, request tracing                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Recommendation engine                                  │
//! │  - Quick decision rule                                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
