//! Constant transport model.
//!
//! Uniform turbulent Prandtl numbers, read from the `constantTransportModelCoeffs`
//! sub-dictionary. Missing coefficients fall back to the standard two-equation
//! values `σk = 1.0`, `σε = 1.3` and `σω = 2.0`.

use log::debug;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::{
    dictionary::Dictionary,
    field::{SurfaceScalarField, VolScalarField, VolVectorField},
};

use super::{
    CoefficientError, ModelArgs, TurbulentPrandtlModel,
    properties::{self, common_properties},
};

const DEFAULT_SIGMA_K: f64 = 1.0;
const DEFAULT_SIGMA_EPS: f64 = 1.3;
const DEFAULT_SIGMA_OMEGA: f64 = 2.0;

/// Uniform coefficient values.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Coefficients {
    sigma_k: Ratio,
    sigma_eps: Ratio,
    sigma_omega: Ratio,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            sigma_k: Ratio::new::<ratio>(DEFAULT_SIGMA_K),
            sigma_eps: Ratio::new::<ratio>(DEFAULT_SIGMA_EPS),
            sigma_omega: Ratio::new::<ratio>(DEFAULT_SIGMA_OMEGA),
        }
    }
}

impl Coefficients {
    /// Reads coefficients from `coeffs`, using defaults for absent entries.
    fn from_dict(coeffs: Option<&Dictionary>) -> Result<Self, CoefficientError> {
        let Some(coeffs) = coeffs else {
            return Ok(Self::default());
        };

        Ok(Self {
            sigma_k: positive(coeffs, "sigmaK", DEFAULT_SIGMA_K)?,
            sigma_eps: positive(coeffs, "sigmaEps", DEFAULT_SIGMA_EPS)?,
            sigma_omega: positive(coeffs, "sigmaOmega", DEFAULT_SIGMA_OMEGA)?,
        })
    }
}

fn positive(
    coeffs: &Dictionary,
    name: &'static str,
    default: f64,
) -> Result<Ratio, CoefficientError> {
    let value = coeffs.scalar_or(name, default)?;
    if value.is_finite() && value > 0.0 {
        Ok(Ratio::new::<ratio>(value))
    } else {
        Err(CoefficientError::NotPositive { name, value })
    }
}

/// Turbulent-Prandtl model with uniform, configurable coefficients.
#[derive(Debug)]
pub struct ConstantTransportModel<'a> {
    u: &'a VolVectorField,
    phi: &'a SurfaceScalarField,
    param: String,
    coefficients: Coefficients,
}

impl<'a> ConstantTransportModel<'a> {
    /// Name this variant is registered under.
    pub const TYPE_NAME: &'static str = "constantTransportModel";

    /// Creates the model with default coefficients.
    #[must_use]
    pub fn new(args: ModelArgs<'a>) -> Self {
        debug!(
            "constructing {} for {} over {} cells",
            Self::TYPE_NAME,
            args.param,
            args.u.len(),
        );

        Self {
            u: args.u,
            phi: args.phi,
            param: args.param.to_owned(),
            coefficients: Coefficients::default(),
        }
    }

    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }

    #[must_use]
    pub fn phi(&self) -> &'a SurfaceScalarField {
        self.phi
    }

    fn uniform(&self, name: &str, value: Ratio) -> VolScalarField {
        VolScalarField::uniform(name, self.u.len(), value)
    }
}

impl TurbulentPrandtlModel for ConstantTransportModel<'_> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn sigma_eps(&self) -> VolScalarField {
        self.uniform("sigmaEps", self.coefficients.sigma_eps)
    }

    fn sigma_k(&self) -> VolScalarField {
        self.uniform("sigmaK", self.coefficients.sigma_k)
    }

    fn sigma_omega(&self) -> VolScalarField {
        self.uniform("sigmaOmega", self.coefficients.sigma_omega)
    }

    fn correct(&mut self) {}

    fn try_read(&mut self, properties: &Dictionary) -> Result<(), CoefficientError> {
        let common = common_properties(properties, Self::TYPE_NAME)?;
        self.coefficients = Coefficients::from_dict(common.coeffs)?;

        if common.print_coeffs {
            let Coefficients {
                sigma_k,
                sigma_eps,
                sigma_omega,
            } = self.coefficients;
            properties::print_coeffs(
                Self::TYPE_NAME,
                &[
                    ("sigmaK", sigma_k.get::<ratio>()),
                    ("sigmaEps", sigma_eps.get::<ratio>()),
                    ("sigmaOmega", sigma_omega.get::<ratio>()),
                ],
            );
        }

        Ok(())
    }
}
