//! # retro-core
//!
//! Core types, ID generation, and error types for the oncall retrospective
//! dashboard.
//!
//! This crate provides the foundational types shared across all `retro-*` crates:
//! - Insight, alert, and statistics records as they travel over the wire
//! - Display mode, tab, and load-phase enums
//! - Deterministic insight ID generation
//! - Tag catalogue, ordered tag selection, and echoed-tag reconciliation
//! - Backend request/response envelopes
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod tags;
