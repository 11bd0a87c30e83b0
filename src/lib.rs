//! Arch Compass - Guided Architecture Characteristics Workshop
//!
//! This crate implements the engine for a facilitated architecture-characteristics
//! exercise: declare system areas and strategic goals, shortlist seven quality
//! attributes from a fixed catalog of 22, narrow the shortlist to three, score
//! risks per characteristic, and optionally synthesize recommendations through
//! an external text-generation provider.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
