//! Adapters between the conveyor core and its batch transport: CSV in, JSON Lines out.

pub mod csv;
pub mod json;
