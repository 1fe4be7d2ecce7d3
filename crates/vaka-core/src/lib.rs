//! # vaka-core
//!
//! Core types for vaka, the investigative case tracker.
//!
//! This crate provides the types shared across all vaka crates:
//! - The `Case` entity with its append-only update log
//! - The `CaseStatus` enum and its transition rules
//! - Case identifier formatting and parsing
//! - The injected `Clock` time source
//! - Lenient deserialization helpers for older snapshots
//! - The plain-text case sheet handed to renderers
//! - CLI response types

pub mod clock;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod lenient;
pub mod responses;
pub mod sheet;
