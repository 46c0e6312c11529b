//! Career Intelligence - Psychographic Profiling Engine
//!
//! This crate implements the PGD (psychographic diagnosis) matrix
//! calculator together with skills extraction and career report
//! assembly for the Career Intelligence Platform.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use domain::pgd::{compute_profile, EngineError, PgdCalculator, Profile, Subject};
