//! Pathviz - A lightweight shortest-path trace and replay engine implemented in Rust
//!
//! This crate provides three interchangeable shortest-path strategies over a
//! static weighted undirected graph, each producing a replayable trace of
//! visitation order, plus a session state machine that replays the trace at
//! a configurable cadence for step-by-step presentation.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
