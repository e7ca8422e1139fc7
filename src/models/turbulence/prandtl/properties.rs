//! Entries shared by every variant's properties dictionary.

use log::info;

use crate::support::dictionary::Dictionary;

use super::CoefficientError;

/// Keyword naming the selected variant.
pub const MODEL_KEYWORD: &str = "turbulentPrandtlModel";

/// Keyword of the switch that logs coefficients after a read.
pub const PRINT_COEFFS_KEYWORD: &str = "printCoeffs";

/// The common part of a validated properties dictionary.
#[derive(Debug)]
pub(super) struct CommonProperties<'d> {
    pub(super) print_coeffs: bool,
    pub(super) coeffs: Option<&'d Dictionary>,
}

/// Validates the entries every variant reads.
///
/// The model keyword, when present, must name `type_name`.
pub(super) fn common_properties<'d>(
    properties: &'d Dictionary,
    type_name: &'static str,
) -> Result<CommonProperties<'d>, CoefficientError> {
    if properties.contains(MODEL_KEYWORD) {
        let selected = properties.word(MODEL_KEYWORD)?;
        if selected != type_name {
            return Err(CoefficientError::ModelMismatch {
                expected: type_name,
                found: selected.to_owned(),
            });
        }
    }

    let print_coeffs = properties.switch_or(PRINT_COEFFS_KEYWORD, false)?;
    let coeffs = properties.optional_sub_dict(&coeffs_keyword(type_name))?;

    Ok(CommonProperties {
        print_coeffs,
        coeffs,
    })
}

/// Returns `<typeName>Coeffs`.
pub(super) fn coeffs_keyword(type_name: &str) -> String {
    format!("{type_name}Coeffs")
}

/// Logs `name = value` lines under the coefficient dictionary heading.
pub(super) fn print_coeffs(type_name: &str, coeffs: &[(&str, f64)]) {
    info!("{}", coeffs_keyword(type_name));
    for (name, value) in coeffs {
        info!("    {name:<12} {value}");
    }
}
