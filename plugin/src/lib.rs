//! Slack workspace data as queryable tables.
//!
//! The heart of the crate is [`client::connect`], which builds an
//! authenticated Web API handle from ambient configuration, and
//! [`transform`], which normalizes Slack's three timestamp encodings into
//! nullable UTC instants for table columns. [`tables`] defines the served
//! tables and maps API objects onto rows.

pub mod app;
pub mod client;
pub mod core;
pub mod tables;
pub mod transform;
