//! Grimoire Runner - composition root library
//!
//! `main` loads the environment, installs logging, and hands a
//! [`RunnerConfig`] to [`run_demo`].

pub mod config;
pub mod demo;

pub use config::RunnerConfig;
pub use demo::{run_demo, Transcript};
