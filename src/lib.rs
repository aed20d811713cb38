//! ELECTRE Tri-B - Outranking-based sorting into ordered categories
//!
//! This crate assigns alternatives evaluated on several criteria to ordered
//! categories delimited by base profiles. Assignment uses the ELECTRE Tri-B
//! outranking relation with discordance-based veto, under both the
//! optimistic and the pessimistic procedure.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
