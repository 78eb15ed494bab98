//! Stakeholder Map - power/interest stakeholder analysis
//!
//! Records the stakeholders of a project and the relationships between them,
//! classifies each one onto the power/interest matrix, and derives
//! statistics, advisory insights, a relationship graph and a text report.
//!
//! Layers follow the usual ports-and-adapters split: `domain` is pure,
//! `ports` declares the I/O boundary, `adapters` implements it, and
//! `application` holds the command and query handlers that tie them together.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
