//! Localized message tables. One function per message; each matches exhaustively on
//! [`Locale`], so adding a locale fails to compile until every message covers it.
//! Unrecognized wire tags never reach here: `Locale::from_tag` already falls back to en-US.

use skill_core::Locale;

pub fn greeting(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => {
            "Hola. Este es el conversor de grados. Puedes pedirme que convierta grados centígrados a Fahrenheit."
        }
        Locale::EnUs => {
            "Hello. This is the degree converter. You can ask me to convert Fahrenheit to Celsius."
        }
    }
}

pub fn help(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => {
            "Puedes pedirme que convierta temperaturas entre grados centígrados y Fahrenheit. ¿Cómo te puedo ayudar?"
        }
        Locale::EnUs => {
            "You can ask me to convert temperatures between Fahrenheit and Celsius. How can I help you?"
        }
    }
}

pub fn goodbye(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => "¡Adiós!",
        Locale::EnUs => "Goodbye!",
    }
}

pub fn fallback(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => "Lo siento, no sé sobre eso. Por favor, inténtalo de nuevo.",
        Locale::EnUs => "Sorry, I don't know about that. Please try again.",
    }
}

/// Soft refusal when the temperature or unit slot is missing, empty, or not numeric.
pub fn not_understood(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => {
            "Lo siento, no pude entender la temperatura o la unidad. Por favor, inténtalo de nuevo."
        }
        Locale::EnUs => {
            "Sorry, I could not understand the temperature or the unit. Please try again."
        }
    }
}

/// Soft refusal for a locale/unit pairing the skill does not convert.
pub fn only_converts(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => "Lo siento, solo puedo convertir de grados centígrados a Fahrenheit.",
        Locale::EnUs => "Sorry, I can only convert from Fahrenheit to Celsius.",
    }
}

pub fn apology(locale: Locale) -> &'static str {
    match locale {
        Locale::EsMx => {
            "Lo siento, hubo un problema al hacer lo que pediste. Por favor, inténtalo de nuevo."
        }
        Locale::EnUs => "Sorry, I had trouble doing what you asked. Please try again.",
    }
}
