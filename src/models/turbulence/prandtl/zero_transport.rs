//! Zero transport model.
//!
//! Every turbulent Prandtl coefficient is zero, so the modeled quantities
//! receive no turbulent diffusion. Useful as a baseline or to switch
//! turbulent transport off without changing the solver setup.

use log::debug;

use crate::support::{
    dictionary::Dictionary,
    field::{SurfaceScalarField, VolScalarField, VolVectorField},
};

use super::{
    CoefficientError, ModelArgs, TurbulentPrandtlModel,
    properties::{self, common_properties},
};

/// Turbulent-Prandtl model whose coefficients are uniformly zero.
///
/// The model borrows the velocity and flux fields it was built from. It is
/// deliberately not `Clone`: each instance belongs to one turbulence model.
#[derive(Debug)]
pub struct ZeroTransportModel<'a> {
    u: &'a VolVectorField,
    phi: &'a SurfaceScalarField,
    param: String,
    turbulence_model_name: String,
    print_coeffs: bool,
    coeffs: Dictionary,
}

impl<'a> ZeroTransportModel<'a> {
    /// Name this variant is registered under.
    pub const TYPE_NAME: &'static str = "zeroTransportModel";

    /// Creates the model from its flow fields and naming arguments.
    #[must_use]
    pub fn new(args: ModelArgs<'a>) -> Self {
        debug!(
            "constructing {} for {} of {} over {} cells",
            Self::TYPE_NAME,
            args.param,
            args.turbulence_model_name,
            args.u.len(),
        );

        Self {
            u: args.u,
            phi: args.phi,
            param: args.param.to_owned(),
            turbulence_model_name: args.turbulence_model_name.to_owned(),
            print_coeffs: false,
            coeffs: Dictionary::new(),
        }
    }

    #[must_use]
    pub fn u(&self) -> &'a VolVectorField {
        self.u
    }

    #[must_use]
    pub fn phi(&self) -> &'a SurfaceScalarField {
        self.phi
    }

    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }

    #[must_use]
    pub fn turbulence_model_name(&self) -> &str {
        &self.turbulence_model_name
    }

    /// Returns the coefficient dictionary from the last successful read.
    #[must_use]
    pub fn coeff_dict(&self) -> &Dictionary {
        &self.coeffs
    }

    fn zero_field(&self, name: &str) -> VolScalarField {
        VolScalarField::zeros(name, self.u.len())
    }
}

impl TurbulentPrandtlModel for ZeroTransportModel<'_> {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn sigma_eps(&self) -> VolScalarField {
        self.zero_field("sigmaEps")
    }

    fn sigma_k(&self) -> VolScalarField {
        self.zero_field("sigmaK")
    }

    fn sigma_omega(&self) -> VolScalarField {
        self.zero_field("sigmaOmega")
    }

    /// Nothing to transport.
    fn correct(&mut self) {}

    fn try_read(&mut self, properties: &Dictionary) -> Result<(), CoefficientError> {
        let common = common_properties(properties, Self::TYPE_NAME)?;

        self.print_coeffs = common.print_coeffs;
        self.coeffs = common.coeffs.cloned().unwrap_or_default();

        if self.print_coeffs {
            properties::print_coeffs(
                Self::TYPE_NAME,
                &[("sigmaK", 0.0), ("sigmaEps", 0.0), ("sigmaOmega", 0.0)],
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uom::si::{f64::Ratio, ratio::ratio};

    use super::*;

    use crate::models::turbulence::prandtl::{
        MODEL_KEYWORD, PRINT_COEFFS_KEYWORD, test_support::quiescent_fields,
    };
    use crate::support::dictionary::Entry;

    #[test]
    fn coefficients_are_uniformly_zero() {
        let (u, phi) = quiescent_fields(5, 12);
        let model = ZeroTransportModel::new(ModelArgs::new(&u, &phi, "fK"));
        let zero = Ratio::new::<ratio>(0.0);

        for (field, name) in [
            (model.sigma_k(), "sigmaK"),
            (model.sigma_eps(), "sigmaEps"),
            (model.sigma_omega(), "sigmaOmega"),
        ] {
            assert_eq!(field.name(), name);
            assert_eq!(field.len(), 5);
            assert!(field.is_uniformly(&zero));
        }
    }

    #[test]
    fn keeps_naming_arguments() {
        let (u, phi) = quiescent_fields(1, 1);
        let model = ZeroTransportModel::new(
            ModelArgs::new(&u, &phi, "fEpsilon").with_turbulence_model_name("PANSkOmegaSST"),
        );

        assert_eq!(model.type_name(), "zeroTransportModel");
        assert_eq!(model.param(), "fEpsilon");
        assert_eq!(model.turbulence_model_name(), "PANSkOmegaSST");
        assert_eq!(model.u().name(), "U");
        assert_eq!(model.phi().len(), 1);
    }

    #[test]
    fn default_turbulence_model_name() {
        let (u, phi) = quiescent_fields(1, 1);
        let model = ZeroTransportModel::new(ModelArgs::new(&u, &phi, "fK"));
        assert_eq!(model.turbulence_model_name(), "turbulenceModel");
    }

    #[test]
    fn correct_leaves_state_unchanged() {
        let (u, phi) = quiescent_fields(3, 4);
        let mut model = ZeroTransportModel::new(ModelArgs::new(&u, &phi, "fK"));
        let properties = Dictionary::new()
            .with("zeroTransportModelCoeffs", Dictionary::new().with("note", "off"));
        assert!(model.read(&properties));

        let before = (model.sigma_k(), model.sigma_eps(), model.sigma_omega());
        let coeffs_before = model.coeff_dict().clone();

        model.correct();
        model.correct();

        assert_eq!(
            (model.sigma_k(), model.sigma_eps(), model.sigma_omega()),
            before
        );
        assert_eq!(model.coeff_dict(), &coeffs_before);
    }

    #[test]
    fn read_accepts_well_formed_properties() {
        let (u, phi) = quiescent_fields(2, 2);
        let mut model = ZeroTransportModel::new(ModelArgs::new(&u, &phi, "fK"));

        let properties = Dictionary::new()
            .with(MODEL_KEYWORD, Entry::word(ZeroTransportModel::TYPE_NAME))
            .with(PRINT_COEFFS_KEYWORD, true)
            .with("zeroTransportModelCoeffs", Dictionary::new());

        assert!(model.read(&properties));
        assert!(model.read(&Dictionary::new()));
    }

    #[test]
    fn read_rejects_malformed_entry_and_keeps_previous() {
        let (u, phi) = quiescent_fields(2, 2);
        let mut model = ZeroTransportModel::new(ModelArgs::new(&u, &phi, "fK"));

        let good = Dictionary::new()
            .with("zeroTransportModelCoeffs", Dictionary::new().with("kept", 1.0));
        assert!(model.read(&good));

        let malformed_coeffs = Dictionary::new().with("zeroTransportModelCoeffs", 3.0);
        assert!(!model.read(&malformed_coeffs));
        assert!(model.coeff_dict().contains("kept"));

        let malformed_model = Dictionary::new().with(MODEL_KEYWORD, true);
        assert!(!model.read(&malformed_model));

        let other_model = Dictionary::new().with(MODEL_KEYWORD, Entry::word("kEpsilon"));
        assert!(!model.read(&other_model));
    }
}
