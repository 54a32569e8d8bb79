//! Validation and result kernel for a news article service.
//!
//! Inputs are validated into [`domain::outcome`] values whose failures are
//! field-scoped error maps, articles move through their lifecycle through the
//! same outcomes, and every command or query runs through the
//! validate-then-run [`application::Handler`] pipeline. Storage, transport and
//! telemetry setup stay outside; they plug in through the ports in
//! [`application::ports`] and [`domain::article::ArticleRepository`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
