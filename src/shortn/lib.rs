//! # Shortn Architecture
//!
//! Shortn shortens URLs through one of several remote services and keeps a
//! local history of what it shortened. Like any good CLI tool it is a library
//! first: the binary is just one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, clipboard and browser  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Command Layer (api.rs, commands/*.rs)                │
//! │  - Normalizes selectors, maps outcomes to messages          │
//! │  - Returns CmdResult                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - orchestrator: validate → shorten → record                │
//! │  - registry + services: one Shortener per remote API        │
//! │  - transport: blocking HTTP                                 │
//! │  - history + store: the JSON history document               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides where
//! they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-level operation
//! - [`orchestrator`]: Validation, shortening and recording in one call
//! - [`registry`]: Service identifier → backend constructor
//! - [`services`]: The `Shortener` trait and its implementations
//! - [`transport`]: HTTP transport trait and the `ureq` implementation
//! - [`history`]: History store with its corruption policy
//! - [`store`]: Raw document storage (file, memory)
//! - [`validation`]: URL shape check
//! - [`model`]: `HistoryEntry`, `HistoryDocument`
//! - [`index`]: Display positions and entry selectors
//! - [`config`]: Configuration file
//! - [`clipboard`], [`browser`]: Desktop integration for the CLI
//! - [`error`]: Error types

pub mod api;
pub mod browser;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod model;
pub mod orchestrator;
pub mod registry;
pub mod services;
pub mod store;
pub mod transport;
pub mod validation;
