//! # ward-core
//!
//! Core types, ID generation, and error types for Warden.
//!
//! This crate provides the foundational types shared across all Warden crates:
//! - Entity structs for roles, role groups, users and resolved capabilities
//! - Status and ecosystem enums
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types
//! - Console action envelope for JSONL replay
//! - CLI response types

pub mod actions;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
