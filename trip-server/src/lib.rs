//! Trip planner proxy server.
//!
//! A small web service that answers: "what are my next trips from here to
//! there?" by asking the Transport for NSW trip planner and returning a
//! cleaned-up summary of each journey.

pub mod config;
pub mod domain;
pub mod planner;
pub mod tfnsw;
pub mod web;
