//! Turbulence closure models.
//!
//! This module contains the sub-models that close the turbulence transport
//! equations of a PANS solver.

pub mod prandtl;
