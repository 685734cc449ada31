//! Grocery booking server library.
//!
//! This crate provides the HTTP API as a library, allowing it to be tested
//! in-process and reused by the CLI.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`db`] - Store client (`PostgreSQL` and in-memory)
//! - [`error`] - Typed errors and the HTTP failure contract
//! - [`routes`] - Admin, user, and health handlers
//! - [`state`] - Shared application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;
