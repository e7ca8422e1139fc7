//! Turbulent-Prandtl coefficient models.
//!
//! The transport equations for turbulent kinetic energy (`k`), its
//! dissipation rate (`ε`) and the specific dissipation rate (`ω`) each carry
//! a turbulent Prandtl number `σ` that scales the turbulent diffusion term.
//! A [`TurbulentPrandtlModel`] supplies those coefficients as cell fields.
//!
//! # Variants
//!
//! - [`ZeroTransportModel`] (`zeroTransportModel`): every coefficient is zero,
//!   which disables turbulent transport of the modeled quantities.
//! - [`ConstantTransportModel`] (`constantTransportModel`): uniform
//!   coefficients read from the model's coefficient dictionary.
//!
//! Variants are chosen at run time by name through a [`ModelRegistry`]:
//!
//! ```
//! use pans_models::models::turbulence::prandtl::{ModelArgs, ModelRegistry};
//! use pans_models::support::{
//!     dictionary::{Dictionary, Entry},
//!     field::{SurfaceScalarField, VolVectorField},
//! };
//!
//! let u = VolVectorField::from_values("U", Vec::new());
//! let phi = SurfaceScalarField::from_values("phi", Vec::new());
//! let properties =
//!     Dictionary::new().with("turbulentPrandtlModel", Entry::word("zeroTransportModel"));
//!
//! let model = ModelRegistry::with_defaults()
//!     .select(&properties, ModelArgs::new(&u, &phi, "fK"))
//!     .unwrap();
//! assert_eq!(model.type_name(), "zeroTransportModel");
//! ```
//!
//! # Properties dictionary
//!
//! All variants read the same layout:
//!
//! ```text
//! turbulentPrandtlModel  <typeName>;   // selects the variant
//! printCoeffs            on;           // optional, logs coefficients on read
//! <typeName>Coeffs       { ... }       // optional, variant coefficients
//! ```

mod adapter;
mod constant_transport;
mod error;
mod properties;
mod registry;
mod zero_transport;

use log::warn;

use crate::support::{
    dictionary::Dictionary,
    field::{SurfaceScalarField, VolScalarField, VolVectorField},
};

pub use adapter::{CoefficientModel, TransportCoefficients};
pub use constant_transport::ConstantTransportModel;
pub use error::{CoefficientError, SelectionError};
pub use properties::{MODEL_KEYWORD, PRINT_COEFFS_KEYWORD};
pub use registry::{Constructor, ModelRegistry};
pub use zero_transport::ZeroTransportModel;

/// Name of the turbulence model a Prandtl model belongs to, unless overridden.
pub const DEFAULT_TURBULENCE_MODEL_NAME: &str = "turbulenceModel";

/// Supplies the turbulent Prandtl numbers of the `k`, `ε` and `ω` equations.
///
/// Implementations borrow the flow fields they are built from and return
/// freshly computed coefficient fields on every call.
pub trait TurbulentPrandtlModel: std::fmt::Debug {
    /// Returns the name this variant is registered under.
    fn type_name(&self) -> &'static str;

    /// Returns the turbulent Prandtl number for the `ε` equation.
    fn sigma_eps(&self) -> VolScalarField;

    /// Returns the turbulent Prandtl number for the `k` equation.
    fn sigma_k(&self) -> VolScalarField;

    /// Returns the turbulent Prandtl number for the `ω` equation.
    fn sigma_omega(&self) -> VolScalarField;

    /// Advances the model state by one step.
    fn correct(&mut self);

    /// Re-reads the model settings from `properties`.
    ///
    /// On error the previous settings are kept.
    ///
    /// # Errors
    ///
    /// Returns [`CoefficientError`] if an entry is missing, malformed, or
    /// names a different model.
    fn try_read(&mut self, properties: &Dictionary) -> Result<(), CoefficientError>;

    /// Re-reads the model settings, reporting whether they were accepted.
    ///
    /// Rejections are logged; the previous settings stay in effect.
    fn read(&mut self, properties: &Dictionary) -> bool {
        match self.try_read(properties) {
            Ok(()) => true,
            Err(err) => {
                warn!("{}: keeping previous settings: {err}", self.type_name());
                false
            }
        }
    }
}

/// Construction arguments shared by every [`TurbulentPrandtlModel`] variant.
#[derive(Debug, Clone, Copy)]
pub struct ModelArgs<'a> {
    /// Cell velocity.
    pub u: &'a VolVectorField,
    /// Face flux.
    pub phi: &'a SurfaceScalarField,
    /// Name of the PANS parameter the model is attached to (e.g. `fK`).
    pub param: &'a str,
    /// Name of the owning turbulence model.
    pub turbulence_model_name: &'a str,
}

impl<'a> ModelArgs<'a> {
    /// Creates arguments using [`DEFAULT_TURBULENCE_MODEL_NAME`].
    #[must_use]
    pub fn new(u: &'a VolVectorField, phi: &'a SurfaceScalarField, param: &'a str) -> Self {
        Self {
            u,
            phi,
            param,
            turbulence_model_name: DEFAULT_TURBULENCE_MODEL_NAME,
        }
    }

    #[must_use]
    pub fn with_turbulence_model_name(self, turbulence_model_name: &'a str) -> Self {
        Self {
            turbulence_model_name,
            ..self
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use uom::si::{
        f64::{Velocity, VolumeRate},
        velocity::meter_per_second,
        volume_rate::cubic_meter_per_second,
    };

    use crate::support::field::{SurfaceScalarField, VolVectorField};

    /// Flow fields at rest over `cells` cells and `faces` faces.
    pub(crate) fn quiescent_fields(cells: usize, faces: usize) -> (VolVectorField, SurfaceScalarField) {
        let zero_u = Velocity::new::<meter_per_second>(0.0);
        let u = VolVectorField::uniform("U", cells, [zero_u; 3]);
        let phi = SurfaceScalarField::uniform(
            "phi",
            faces,
            VolumeRate::new::<cubic_meter_per_second>(0.0),
        );
        (u, phi)
    }
}
