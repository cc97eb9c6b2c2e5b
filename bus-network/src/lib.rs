//! Bus network graph engine.
//!
//! Models a small transit network as a directed graph of stops weighted by
//! travel minutes, and answers: "what is the quickest way from here to
//! there, what can I reach at all, and when do the buses run?"

pub mod domain;
pub mod graph;
pub mod logging;
pub mod network;
pub mod planner;
pub mod render;
pub mod schedule;
