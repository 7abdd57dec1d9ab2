//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve;
pub mod selection;
