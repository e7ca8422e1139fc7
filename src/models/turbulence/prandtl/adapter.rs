//! [`twine_core::Model`] adapter for turbulent-Prandtl models.

use std::convert::Infallible;

use twine_core::Model;

use crate::support::field::VolScalarField;

use super::TurbulentPrandtlModel;

/// The three coefficient fields of a turbulent-Prandtl model.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCoefficients {
    pub sigma_k: VolScalarField,
    pub sigma_eps: VolScalarField,
    pub sigma_omega: VolScalarField,
}

impl TransportCoefficients {
    /// Evaluates all three coefficient fields of `model`.
    #[must_use]
    pub fn from_model<M: TurbulentPrandtlModel + ?Sized>(model: &M) -> Self {
        Self {
            sigma_k: model.sigma_k(),
            sigma_eps: model.sigma_eps(),
            sigma_omega: model.sigma_omega(),
        }
    }
}

/// Exposes a [`TurbulentPrandtlModel`] as a Twine [`Model`].
///
/// The model takes no input and evaluates to the current
/// [`TransportCoefficients`].
#[derive(Debug)]
pub struct CoefficientModel<'m, M: ?Sized> {
    model: &'m M,
}

impl<'m, M: TurbulentPrandtlModel + ?Sized> CoefficientModel<'m, M> {
    #[must_use]
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }
}

impl<M: TurbulentPrandtlModel + ?Sized> Model for CoefficientModel<'_, M> {
    type Input = ();
    type Output = TransportCoefficients;
    type Error = Infallible;

    fn call(&self, _input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(TransportCoefficients::from_model(self.model))
    }
}
