//! The one piece of arithmetic in the skill: Fahrenheit ↔ Celsius, direction chosen by locale.

use skill_core::Locale;

use crate::messages;

/// Outcome of a conversion attempt. Both arms carry the full spoken message so the
/// handler never assembles locale-specific text itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Supported locale/unit pairing; `value` is the converted temperature.
    Converted { value: f64, message: String },
    /// Valid input, but a pairing the skill does not convert.
    Unsupported { message: String },
}

/// Converts `temperature` according to the locale's supported direction. Unit matching is
/// case-insensitive against a small per-locale vocabulary ("farenheit" is accepted as a
/// common misspelling). The converted value is spoken with exactly two decimals; the
/// input temperature is echoed as given.
pub fn convert(temperature: f64, unit: &str, locale: Locale) -> Conversion {
    let unit = unit.to_lowercase();
    match locale {
        Locale::EsMx if unit == "centígrados" || unit == "celsius" => {
            let value = temperature * 9.0 / 5.0 + 32.0;
            Conversion::Converted {
                value,
                message: format!(
                    "{} grados centígrados son {:.2} grados Fahrenheit.",
                    temperature, value
                ),
            }
        }
        Locale::EnUs if unit == "fahrenheit" || unit == "farenheit" => {
            let value = (temperature - 32.0) * 5.0 / 9.0;
            Conversion::Converted {
                value,
                message: format!(
                    "{} degrees Fahrenheit is {:.2} degrees Celsius.",
                    temperature, value
                ),
            }
        }
        _ => Conversion::Unsupported {
            message: messages::only_converts(locale).to_string(),
        },
    }
}
