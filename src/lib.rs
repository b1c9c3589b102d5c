//! Shortfront - front-end for a remote URL shortening service
//!
//! Validates long URLs, asks the remote service for short links, resolves
//! short codes back to their destination and copies results to the
//! clipboard. The same page flows drive a browser front (actix-web), one-shot
//! CLI commands and a terminal UI.
//!
//! # Features
//! - **server**: browser front (default)
//! - **cli**: command-line interface
//! - **tui**: terminal creation page with clipboard support
//! - **full**: all features enabled
//!
//! # Architecture
//! - `utils`: URL validation
//! - `client`: the remote service seam and its HTTP implementation
//! - `pages`: creation / redirect / clipboard / notification state
//! - `api`: actix-web handlers and middleware
//! - `interfaces`: user interfaces (CLI, TUI)
//! - `config`: configuration management
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod pages;
pub mod runtime;
pub mod system;
pub mod utils;
