//! Typed message catalog with an explicit language fallback chain.
//!
//! Lookup is requested language first, then English, then the raw key
//! literal. English is total over [`Message`]; other languages may miss
//! entries and fall back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::WasteCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Languages the interface can render.
pub enum Language {
    /// English.
    English,
    /// Spanish (castellano).
    Spanish,
    /// Valencian.
    Valencian,
    /// German.
    German,
    /// French.
    French,
    /// Dutch.
    Dutch,
}

impl Language {
    /// All languages in toggle order.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::Valencian,
        Language::German,
        Language::French,
        Language::Dutch,
    ];

    /// Parse a BCP 47-ish tag such as `en`, `es-ES`, or `va` by its primary
    /// subtag. Unknown tags yield `None`; callers pick their own default.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Language> {
        let primary = tag.split(['-', '_']).next()?;
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            "va" => Some(Language::Valencian),
            "de" => Some(Language::German),
            "fr" => Some(Language::French),
            "nl" => Some(Language::Dutch),
            _ => None,
        }
    }

    /// The next language in toggle order, wrapping around.
    #[must_use]
    pub fn cycle(self) -> Language {
        match self {
            Language::English => Language::Spanish,
            Language::Spanish => Language::Valencian,
            Language::Valencian => Language::German,
            Language::German => Language::French,
            Language::French => Language::Dutch,
            Language::Dutch => Language::English,
        }
    }

    /// Native display name, for the language toggle.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Valencian => "Valencià",
            Language::German => "Deutsch",
            Language::French => "Français",
            Language::Dutch => "Nederlands",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Valencian => "va",
            Language::German => "de",
            Language::French => "fr",
            Language::Dutch => "nl",
        };
        write!(formatter, "{tag}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Every message the interface renders.
pub enum Message {
    /// Summer season badge.
    SeasonSummer,
    /// Winter season badge.
    SeasonWinter,
    /// Verdict badge: depositing allowed right now.
    StatusAllowed,
    /// Verdict badge: depositing not allowed right now.
    StatusNotAllowed,
    /// Verdict badge: consult external facility hours.
    StatusCheck,
    /// Verdict badge: allowed around the clock.
    StatusAlways,
    /// The live-clock label.
    Now,
    /// Label shown while previewing a shifted or pinned time.
    Preview,
    /// Relative day label for the current date.
    Today,
    /// Relative day label for the next date.
    Tomorrow,
    /// Relative day label for the previous date.
    Yesterday,
    /// Link text pointing at the official schedule source.
    MoreDetails,
    /// Footer notice about municipal fines.
    Legal,
    /// Footer heading for official sources.
    Sources,
}

impl Message {
    /// Every message key, for catalog-wide iteration.
    pub const ALL: [Message; 14] = [
        Message::SeasonSummer,
        Message::SeasonWinter,
        Message::StatusAllowed,
        Message::StatusNotAllowed,
        Message::StatusCheck,
        Message::StatusAlways,
        Message::Now,
        Message::Preview,
        Message::Today,
        Message::Tomorrow,
        Message::Yesterday,
        Message::MoreDetails,
        Message::Legal,
        Message::Sources,
    ];

    /// Stable snake_case key, the last resort of the fallback chain.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Message::SeasonSummer => "season_summer",
            Message::SeasonWinter => "season_winter",
            Message::StatusAllowed => "status_allowed",
            Message::StatusNotAllowed => "status_not_allowed",
            Message::StatusCheck => "status_check",
            Message::StatusAlways => "status_always",
            Message::Now => "now",
            Message::Preview => "preview",
            Message::Today => "today_label",
            Message::Tomorrow => "tomorrow_label",
            Message::Yesterday => "yesterday_label",
            Message::MoreDetails => "more_details",
            Message::Legal => "legal",
            Message::Sources => "sources",
        }
    }
}

/// Resolve a message in the requested language, falling back to English and
/// finally to the key literal.
#[must_use]
pub fn translate(language: Language, message: Message) -> &'static str {
    lookup(language, message)
        .or_else(|| lookup(Language::English, message))
        .unwrap_or_else(|| message.key())
}

/// Localized name of a waste category. The tables are total per language,
/// checked by the compiler.
#[must_use]
pub fn category_label(language: Language, category: WasteCategory) -> &'static str {
    match language {
        Language::English => match category {
            WasteCategory::Organic => "Organic",
            WasteCategory::OtherHousehold => "Other Waste",
            WasteCategory::Glass => "Glass",
            WasteCategory::Recyclables => "Recyclables",
            WasteCategory::Bulky => "Bulky Items",
        },
        Language::Spanish => match category {
            WasteCategory::Organic => "Orgánica",
            WasteCategory::OtherHousehold => "Resto",
            WasteCategory::Glass => "Vidrio",
            WasteCategory::Recyclables => "Reciclables",
            WasteCategory::Bulky => "Voluminosos/Ecoparc",
        },
        Language::Valencian => match category {
            WasteCategory::Organic => "Orgànica",
            WasteCategory::OtherHousehold => "Resta",
            WasteCategory::Glass => "Vidre",
            WasteCategory::Recyclables => "Reciclables",
            WasteCategory::Bulky => "Voluminosos/Ecoparc",
        },
        Language::German => match category {
            WasteCategory::Organic => "Bioabfall",
            WasteCategory::OtherHousehold => "Restmüll",
            WasteCategory::Glass => "Glas",
            WasteCategory::Recyclables => "Recycelbar",
            WasteCategory::Bulky => "Sperrmüll/Ecoparc",
        },
        Language::French => match category {
            WasteCategory::Organic => "Organique",
            WasteCategory::OtherHousehold => "Déchets résiduels",
            WasteCategory::Glass => "Verre",
            WasteCategory::Recyclables => "Recyclables",
            WasteCategory::Bulky => "Encombrants/Ecoparc",
        },
        Language::Dutch => match category {
            WasteCategory::Organic => "GFT",
            WasteCategory::OtherHousehold => "Restafval",
            WasteCategory::Glass => "Glas",
            WasteCategory::Recyclables => "Recyclebaar",
            WasteCategory::Bulky => "Grofvuil/Ecoparc",
        },
    }
}

// Entries identical to the English string are omitted and fall back through
// the chain.
fn lookup(language: Language, message: Message) -> Option<&'static str> {
    match language {
        Language::English => Some(match message {
            Message::SeasonSummer => "Summer",
            Message::SeasonWinter => "Winter",
            Message::StatusAllowed => "Allowed",
            Message::StatusNotAllowed => "Not Allowed",
            Message::StatusCheck => "Check Hours",
            Message::StatusAlways => "Always Allowed",
            Message::Now => "Now",
            Message::Preview => "Preview",
            Message::Today => "Today",
            Message::Tomorrow => "Tomorrow",
            Message::Yesterday => "Yesterday",
            Message::MoreDetails => "More details",
            Message::Legal => "Respect municipal rules. Fines apply for violations.",
            Message::Sources => "Sources",
        }),
        Language::Spanish => Some(match message {
            Message::SeasonSummer => "Verano",
            Message::SeasonWinter => "Invierno",
            Message::StatusAllowed => "Permitido",
            Message::StatusNotAllowed => "No permitido",
            Message::StatusCheck => "Consultar horario",
            Message::StatusAlways => "Siempre permitido",
            Message::Now => "Ahora",
            Message::Preview => "Previsualización",
            Message::Today => "Hoy",
            Message::Tomorrow => "Mañana",
            Message::Yesterday => "Ayer",
            Message::MoreDetails => "Más detalles",
            Message::Legal => "Respete las normas municipales. Las infracciones conllevan multas.",
            Message::Sources => "Fuentes",
        }),
        Language::Valencian => Some(match message {
            Message::SeasonSummer => "Estiu",
            Message::SeasonWinter => "Hivern",
            Message::StatusAllowed => "Permés",
            Message::StatusNotAllowed => "No permés",
            Message::StatusCheck => "Comproveu horari",
            Message::StatusAlways => "Sempre permés",
            Message::Now => "Ara",
            Message::Preview => "Previsualització",
            Message::Today => "Hui",
            Message::Tomorrow => "Demà",
            Message::Yesterday => "Ahir",
            Message::MoreDetails => "Més detalls",
            Message::Legal => "Respecteu les normes municipals. Les infraccions comporten multes.",
            Message::Sources => "Fonts",
        }),
        Language::German => match message {
            Message::SeasonSummer => Some("Sommer"),
            Message::SeasonWinter => None,
            Message::StatusAllowed => Some("Erlaubt"),
            Message::StatusNotAllowed => Some("Verboten"),
            Message::StatusCheck => Some("Prüfen"),
            Message::StatusAlways => Some("Immer"),
            Message::Now => Some("Jetzt"),
            Message::Preview => Some("Vorschau"),
            Message::Today => Some("Heute"),
            Message::Tomorrow => Some("Morgen"),
            Message::Yesterday => Some("Gestern"),
            Message::MoreDetails => Some("Details"),
            Message::Legal => Some(
                "Respektieren Sie die kommunalen Vorschriften. Verstöße werden mit Bußgeldern geahndet.",
            ),
            Message::Sources => Some("Quellen"),
        },
        Language::French => match message {
            Message::SeasonSummer => Some("Été"),
            Message::SeasonWinter => Some("Hiver"),
            Message::StatusAllowed => Some("Autorisé"),
            Message::StatusNotAllowed => Some("Interdit"),
            Message::StatusCheck => Some("Vérifier"),
            Message::StatusAlways => Some("Toujours"),
            Message::Now => Some("Maintenant"),
            Message::Preview => Some("Aperçu"),
            Message::Today => Some("Aujourd'hui"),
            Message::Tomorrow => Some("Demain"),
            Message::Yesterday => Some("Hier"),
            Message::MoreDetails => Some("Détails"),
            Message::Legal => Some(
                "Respectez les règles municipales. Les infractions sont passibles d'amendes.",
            ),
            Message::Sources => None,
        },
        Language::Dutch => match message {
            Message::SeasonSummer => Some("Zomer"),
            Message::SeasonWinter => None,
            Message::StatusAllowed => Some("Toegestaan"),
            Message::StatusNotAllowed => Some("Verboden"),
            Message::StatusCheck => Some("Controleren"),
            Message::StatusAlways => Some("Altijd"),
            Message::Now => Some("Nu"),
            Message::Preview => Some("Voorvertoning"),
            Message::Today => Some("Vandaag"),
            Message::Tomorrow => Some("Morgen"),
            Message::Yesterday => Some("Gisteren"),
            Message::MoreDetails => Some("Details"),
            Message::Legal => Some("Respecteer de gemeentelijke regels. Overtredingen worden beboet."),
            Message::Sources => Some("Bronnen"),
        },
    }
}
