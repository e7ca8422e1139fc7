use std::{collections::BTreeMap, fmt};

use log::debug;

use crate::support::dictionary::Dictionary;

use super::{
    ConstantTransportModel, ModelArgs, SelectionError, TurbulentPrandtlModel, ZeroTransportModel,
    properties::MODEL_KEYWORD,
};

/// Builds a boxed variant from its construction arguments.
pub type Constructor = for<'a> fn(ModelArgs<'a>) -> Box<dyn TurbulentPrandtlModel + 'a>;

/// Turbulent-Prandtl variants keyed by type name.
///
/// [`ModelRegistry::with_defaults`] knows every variant in this crate;
/// solvers may [`register`](ModelRegistry::register) their own.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl ModelRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the zero and constant transport models.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut constructors = BTreeMap::new();
        constructors.insert(ZeroTransportModel::TYPE_NAME, zero_transport as Constructor);
        constructors.insert(
            ConstantTransportModel::TYPE_NAME,
            constant_transport as Constructor,
        );
        Self { constructors }
    }

    /// Adds a variant under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::DuplicateModel`] if `name` is already taken.
    pub fn register(
        &mut self,
        name: &'static str,
        constructor: Constructor,
    ) -> Result<(), SelectionError> {
        if self.constructors.contains_key(name) {
            return Err(SelectionError::DuplicateModel {
                name: name.to_owned(),
            });
        }
        self.constructors.insert(name, constructor);
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Iterates over registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.constructors.keys().copied()
    }

    /// Builds the variant named by the `turbulentPrandtlModel` entry and reads
    /// its settings from `properties`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError`] if the entry is missing, names no registered
    /// variant, or the variant rejects its settings.
    pub fn select<'a>(
        &self,
        properties: &Dictionary,
        args: ModelArgs<'a>,
    ) -> Result<Box<dyn TurbulentPrandtlModel + 'a>, SelectionError> {
        let name = properties.word(MODEL_KEYWORD)?;

        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| SelectionError::UnknownModel {
                    name: name.to_owned(),
                    available: self.names().map(str::to_owned).collect(),
                })?;

        debug!("selecting turbulentPrandtlModel {name}");

        let mut model = constructor(args);
        model
            .try_read(properties)
            .map_err(|source| SelectionError::Settings {
                name: name.to_owned(),
                source,
            })?;

        Ok(model)
    }
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.constructors.keys()).finish()
    }
}

fn zero_transport<'a>(args: ModelArgs<'a>) -> Box<dyn TurbulentPrandtlModel + 'a> {
    Box::new(ZeroTransportModel::new(args))
}

fn constant_transport<'a>(args: ModelArgs<'a>) -> Box<dyn TurbulentPrandtlModel + 'a> {
    Box::new(ConstantTransportModel::new(args))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    use super::*;

    use crate::models::turbulence::prandtl::{
        CoefficientError, test_support::quiescent_fields,
    };
    use crate::support::dictionary::{DictionaryError, Entry};

    fn selecting(name: &str) -> Dictionary {
        Dictionary::new().with(MODEL_KEYWORD, Entry::word(name))
    }

    #[test]
    fn defaults_are_registered() {
        let registry = ModelRegistry::with_defaults();

        assert!(registry.contains("zeroTransportModel"));
        assert!(registry.contains("constantTransportModel"));
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["constantTransportModel", "zeroTransportModel"],
        );
        assert!(ModelRegistry::new().names().next().is_none());
    }

    #[test]
    fn selects_zero_transport_by_name() -> Result<(), SelectionError> {
        let (u, phi) = quiescent_fields(4, 4);
        let registry = ModelRegistry::with_defaults();

        let model = registry.select(&selecting("zeroTransportModel"), ModelArgs::new(&u, &phi, "fK"))?;

        assert_eq!(model.type_name(), ZeroTransportModel::TYPE_NAME);
        assert_eq!(model.sigma_k().len(), 4);
        Ok(())
    }

    #[test]
    fn selects_constant_transport_with_coefficients() -> Result<(), SelectionError> {
        let (u, phi) = quiescent_fields(2, 2);
        let properties = selecting("constantTransportModel").with(
            "constantTransportModelCoeffs",
            Dictionary::new().with("sigmaK", 0.9),
        );

        let model = ModelRegistry::with_defaults().select(&properties, ModelArgs::new(&u, &phi, "fK"))?;

        let sigma_k = model.sigma_k();
        assert_relative_eq!(sigma_k.values()[1].get::<ratio>(), 0.9);
        Ok(())
    }

    #[test]
    fn unknown_name_lists_available_models() {
        let (u, phi) = quiescent_fields(1, 1);

        let err = ModelRegistry::with_defaults()
            .select(&selecting("laminar"), ModelArgs::new(&u, &phi, "fK"))
            .unwrap_err();

        assert_eq!(
            err,
            SelectionError::UnknownModel {
                name: "laminar".to_owned(),
                available: vec![
                    "constantTransportModel".to_owned(),
                    "zeroTransportModel".to_owned()
                ],
            },
        );
    }

    #[test]
    fn missing_selection_keyword() {
        let (u, phi) = quiescent_fields(1, 1);

        let err = ModelRegistry::with_defaults()
            .select(&Dictionary::new(), ModelArgs::new(&u, &phi, "fK"))
            .unwrap_err();

        assert_eq!(
            err,
            SelectionError::Dictionary(DictionaryError::Missing {
                keyword: MODEL_KEYWORD.to_owned()
            }),
        );
    }

    #[test]
    fn rejected_settings_fail_selection() {
        let (u, phi) = quiescent_fields(1, 1);
        let properties = selecting("constantTransportModel").with(
            "constantTransportModelCoeffs",
            Dictionary::new().with("sigmaK", 0.0),
        );

        let err = ModelRegistry::with_defaults()
            .select(&properties, ModelArgs::new(&u, &phi, "fK"))
            .unwrap_err();

        assert_eq!(
            err,
            SelectionError::Settings {
                name: "constantTransportModel".to_owned(),
                source: CoefficientError::NotPositive {
                    name: "sigmaK",
                    value: 0.0
                },
            },
        );
    }

    #[test]
    fn custom_variants_can_be_registered_once() {
        fn aliased<'a>(args: ModelArgs<'a>) -> Box<dyn TurbulentPrandtlModel + 'a> {
            Box::new(ZeroTransportModel::new(args))
        }

        let mut registry = ModelRegistry::new();
        assert!(registry.register("noTransport", aliased).is_ok());
        assert_eq!(
            registry.register("noTransport", aliased),
            Err(SelectionError::DuplicateModel {
                name: "noTransport".to_owned()
            }),
        );
        assert!(registry.contains("noTransport"));
        assert_eq!(format!("{registry:?}"), r#"{"noTransport"}"#);
    }
}
