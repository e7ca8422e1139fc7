//! # PANS Models
//!
//! Turbulence-closure sub-models and small container utilities for
//! partially-averaged Navier-Stokes (PANS) simulations.
//!
//! ## Crate layout
//!
//! - [`models`]: Turbulence closure models, including the turbulent-Prandtl
//!   coefficient providers and their name-keyed registry.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Host collaborators
//!
//! Mesh handling, field algebra and discretization belong to the host solver.
//! The [`support::field`] and [`support::dictionary`] modules carry only the
//! surface that models need: named cell-wise values and keyed configuration
//! entries.
//!
//! Note: Modules in [`support`] are part of the public API because they're
//! useful, but their APIs are not stable.

pub mod models;
pub mod support;
