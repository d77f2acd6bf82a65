//! Core crate for the career work-information catalog.
//!
//! Careers own a heterogeneous sequence of work-information records
//! (enterprises, opportunities, workplace demographics, industries,
//! recruitment processes). This crate validates those records on the way in,
//! stores them behind a repository seam, and folds them into a scholarship
//! award for the owning career.

pub mod config;
pub mod error;
pub mod outcome;
pub mod telemetry;
pub mod workflows;
