#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! droid-posture crate
//!
//! Evaluates the security posture of an Android device from five collected signals and
//! produces a bounded risk score together with an ordered list of recommendations.
//!
//! # Module Organization
//!
//! - [`facts`]: Signal collection seam and the immutable [`facts::FactSet`]
//! - [`membership`]: Fuzzy degrees of non-compliance
//! - [`ranking`]: Risk aggregation and the evaluator
//! - [`recommendations`]: Mapping an evaluation back to user-facing advice
//! - [`config`]: Policy weights and thresholds
//! - [`reports`]: Console and JSON output
//! - [`commands`]: Command-line interface and orchestration

mod error;

pub mod commands;
pub mod config;
pub mod facts;
pub mod membership;
pub mod misc;
pub mod ranking;
pub mod recommendations;
pub mod reports;

pub use crate::commands::{Host, run};
pub use crate::error::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;
