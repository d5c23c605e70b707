//! Per-second review throughput analysis: parse the logs written by each
//! execution mode, summarize them and chart the modes side by side.

pub mod analysis;
pub mod app;
pub mod data;
pub mod error;
pub mod processing;
pub mod report;
pub mod state;
pub mod ui;
