//! Display language detection and static translation tables.
//!
//! The portal is rendered either in Italian or English. The language toggle
//! in the page chrome advertises the language you would switch *to*, so a
//! toggle reading `EN` means the page is currently Italian.

use serde::{Deserialize, Serialize};

use crate::dom::DomNode;

/// Candidate selectors for the language toggle control.
pub const LANGUAGE_TOGGLE_SELECTORS: [&str; 5] = [
    "#language-toggle",
    ".language-toggle",
    ".lang-switch",
    "header button.lang",
    "header a.lang",
];

const ITALIAN_MARKERS: [&str; 6] = [
    "iscrizioni",
    "esiti",
    "appelli",
    "insegnamento",
    "rifiutabile",
    "in attesa",
];
const ENGLISH_MARKERS: [&str; 6] = [
    "enrollments",
    "results",
    "exams",
    "course",
    "rejectable",
    "awaiting",
];

/// Page display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Italian,
    #[default]
    English,
}

impl Language {
    /// The other supported language.
    pub fn other(self) -> Self {
        match self {
            Language::Italian => Language::English,
            Language::English => Language::Italian,
        }
    }

    /// Static strings for this language.
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::Italian => &ITALIAN,
            Language::English => &ENGLISH,
        }
    }

    /// Whether `text` contains one of the phrases picked by `pick`, checking
    /// this language first and then the other one.
    pub fn matches_any(
        self,
        text: &str,
        pick: impl Fn(&'static Translations) -> &'static [&'static str],
    ) -> bool {
        let lower = text.to_lowercase();
        [self, self.other()]
            .iter()
            .flat_map(|lang| pick(lang.translations()).iter())
            .any(|phrase| lower.contains(phrase))
    }
}

/// Phrases recognised on the page and labels emitted by this crate.
///
/// Phrases are lower case; matching is done on lower-cased text.
#[derive(Debug)]
pub struct Translations {
    pub awaiting_phrases: &'static [&'static str],
    pub published_phrases: &'static [&'static str],
    pub rejectable_phrases: &'static [&'static str],
    pub legend_enrolled: &'static str,
    pub legend_available: &'static str,
    pub legend_awaiting: &'static str,
    pub legend_result: &'static str,
    pub legend_rejectable: &'static str,
    pub export_button: &'static str,
    pub no_enrollments: &'static str,
}

static ITALIAN: Translations = Translations {
    awaiting_phrases: &["in attesa di esito", "in attesa del voto", "in attesa"],
    published_phrases: &["pubblicato", "pubblicata"],
    rejectable_phrases: &["rifiutabile"],
    legend_enrolled: "Iscritto",
    legend_available: "Appello disponibile",
    legend_awaiting: "In attesa di esito",
    legend_result: "Esito pubblicato",
    legend_rejectable: "Esito rifiutabile",
    export_button: "Esporta gli esami a cui sei iscritto (ICS)",
    no_enrollments: "Nessuna iscrizione trovata.",
};

static ENGLISH: Translations = Translations {
    awaiting_phrases: &["awaiting result", "waiting for result", "awaiting"],
    published_phrases: &["published"],
    rejectable_phrases: &["rejectable"],
    legend_enrolled: "Enrolled",
    legend_available: "Available session",
    legend_awaiting: "Awaiting result",
    legend_result: "Result published",
    legend_rejectable: "Rejectable result",
    export_button: "Export exams you registered for as ICS",
    no_enrollments: "No exam enrollments found.",
};

/// Detects the page language.
///
/// Toggle controls win; otherwise body text is scored by distinctive words and
/// Italian is chosen only on a strict majority. English is the default.
pub fn detect_language<N: DomNode>(root: &N) -> Language {
    for css in LANGUAGE_TOGGLE_SELECTORS {
        for toggle in root.select_all(css) {
            let label = toggle.normalized_text();
            if label.eq_ignore_ascii_case("EN") {
                log::debug!("Language toggle '{}' offers English, page is Italian", css);
                return Language::Italian;
            }
            if label.eq_ignore_ascii_case("IT") {
                log::debug!("Language toggle '{}' offers Italian, page is English", css);
                return Language::English;
            }
        }
    }

    let body = root
        .select_first("body")
        .map(|body| body.text_content())
        .unwrap_or_else(|| root.text_content())
        .to_lowercase();
    let italian = ITALIAN_MARKERS.iter().filter(|m| body.contains(*m)).count();
    let english = ENGLISH_MARKERS.iter().filter(|m| body.contains(*m)).count();
    log::debug!(
        "No language toggle found; body markers it={} en={}",
        italian,
        english
    );

    if italian > english {
        Language::Italian
    } else {
        Language::English
    }
}
