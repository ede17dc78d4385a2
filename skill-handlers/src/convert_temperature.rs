use async_trait::async_trait;
use skill_core::{Request, RequestHandler, Response, Result};
use tracing::debug;

use crate::convert::{convert, Conversion};
use crate::messages;

const INTENT_NAME: &str = "ConvertTemperature";
const TEMPERATURE_SLOT: &str = "temperature";
const UNIT_SLOT: &str = "unit";

/// Answers the `ConvertTemperature` intent. Missing, empty, or non-numeric slot values
/// take the soft "could not understand" path instead of failing the dispatch cycle;
/// unsupported locale/unit pairings get the fixed refusal from [`convert`].
pub struct ConvertTemperatureHandler;

#[async_trait]
impl RequestHandler for ConvertTemperatureHandler {
    fn matches(&self, request: &Request) -> bool {
        request.intent_name() == Some(INTENT_NAME)
    }

    async fn respond(&self, request: &Request) -> Result<Response> {
        let (raw_temperature, unit) = match (
            request.slot_value(TEMPERATURE_SLOT),
            request.slot_value(UNIT_SLOT),
        ) {
            (Some(temperature), Some(unit)) => (temperature, unit),
            _ => {
                debug!(locale = %request.locale.tag(), "temperature or unit slot missing");
                return Ok(Response::speak(messages::not_understood(request.locale)));
            }
        };

        let temperature: f64 = match raw_temperature.parse() {
            Ok(temperature) => temperature,
            Err(_) => {
                debug!(value = %raw_temperature, "temperature slot is not numeric");
                return Ok(Response::speak(messages::not_understood(request.locale)));
            }
        };

        let speech = match convert(temperature, unit, request.locale) {
            Conversion::Converted { message, .. } => message,
            Conversion::Unsupported { message } => message,
        };
        Ok(Response::speak(speech))
    }
}
