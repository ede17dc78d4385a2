//! # Skill handlers
//!
//! Handler implementations for the degree-converter skill: launch greeting, temperature
//! conversion, the built-in help/cancel/stop/fallback intents, session-end acknowledgment,
//! the diagnostic intent reflector, and the apology error responder. Also hosts the
//! localized message tables and the pure conversion function.

mod apology;
mod cancel_stop;
mod convert;
mod convert_temperature;
mod fallback;
mod help;
mod launch;
pub mod messages;
mod reflector;
mod session_ended;

pub use apology::ApologyHandler;
pub use cancel_stop::CancelOrStopHandler;
pub use convert::{convert, Conversion};
pub use convert_temperature::ConvertTemperatureHandler;
pub use fallback::FallbackHandler;
pub use help::HelpHandler;
pub use launch::LaunchHandler;
pub use reflector::IntentReflectorHandler;
pub use session_ended::SessionEndedHandler;
