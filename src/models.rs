//! Public turbulence models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `turbulence`).
//! Each family exposes a capability trait, its concrete variants, and a
//! registry that selects a variant by its type name.
//!
//! Where a model family also benefits from a [`twine_core::Model`]
//! implementation, that implementation is a thin adapter delegating to the
//! family's trait.

pub mod turbulence;
