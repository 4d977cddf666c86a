//! Proposal Desk - proposal authoring backend
//!
//! Stores client proposals, imports them from pasted JSON with field-wise
//! defaulting, and compares the features of a proposal's pricing plans.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
