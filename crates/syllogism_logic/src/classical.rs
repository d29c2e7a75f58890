//! The traditional table of valid syllogistic forms
//!
//! Fifteen forms are valid under any reading of the universal propositions.
//! Nine more are valid only when universal propositions carry existential
//! import; in each of them the conclusion is a particular weakened from a
//! universal the premises would also support, or the subject of a universal
//! premise is assumed to be non-empty.

use crate::config::Interpretation;
use crate::proposition::Form::{A, E, I, O};
use crate::syllogism::{Figure, Mood, SyllogisticForm};

/// A table entry: traditional name, mood letters, figure.
type Entry = (&'static str, [crate::proposition::Form; 3], Figure);

const UNCONDITIONAL: [Entry; 15] = [
    ("Barbara", [A, A, A], Figure::First),
    ("Celarent", [E, A, E], Figure::First),
    ("Darii", [A, I, I], Figure::First),
    ("Ferio", [E, I, O], Figure::First),
    ("Cesare", [E, A, E], Figure::Second),
    ("Camestres", [A, E, E], Figure::Second),
    ("Festino", [E, I, O], Figure::Second),
    ("Baroco", [A, O, O], Figure::Second),
    ("Disamis", [I, A, I], Figure::Third),
    ("Datisi", [A, I, I], Figure::Third),
    ("Bocardo", [O, A, O], Figure::Third),
    ("Ferison", [E, I, O], Figure::Third),
    ("Camenes", [A, E, E], Figure::Fourth),
    ("Dimaris", [I, A, I], Figure::Fourth),
    ("Fresison", [E, I, O], Figure::Fourth),
];

const CONDITIONAL: [Entry; 9] = [
    ("Barbari", [A, A, I], Figure::First),
    ("Celaront", [E, A, O], Figure::First),
    ("Cesaro", [E, A, O], Figure::Second),
    ("Camestros", [A, E, O], Figure::Second),
    ("Darapti", [A, A, I], Figure::Third),
    ("Felapton", [E, A, O], Figure::Third),
    ("Bramantip", [A, A, I], Figure::Fourth),
    ("Camenos", [A, E, O], Figure::Fourth),
    ("Fesapo", [E, A, O], Figure::Fourth),
];

fn form_of(entry: &Entry) -> SyllogisticForm {
    let [major, minor, conclusion] = entry.1;
    SyllogisticForm::new(Mood::new(major, minor, conclusion), entry.2)
}

/// Lookup tables for the traditionally valid forms.
pub struct ClassicalForms;

impl ClassicalForms {
    /// The fifteen forms valid without existential import.
    pub fn unconditional() -> Vec<SyllogisticForm> {
        UNCONDITIONAL.iter().map(form_of).collect()
    }

    /// The nine forms that need existential import.
    pub fn conditional() -> Vec<SyllogisticForm> {
        CONDITIONAL.iter().map(form_of).collect()
    }

    /// All twenty-four traditional forms.
    pub fn all() -> Vec<SyllogisticForm> {
        UNCONDITIONAL.iter().chain(CONDITIONAL.iter()).map(form_of).collect()
    }

    /// The forms the analyzer accepts under `interpretation`.
    pub fn for_interpretation(interpretation: Interpretation) -> Vec<SyllogisticForm> {
        match interpretation {
            Interpretation::Boolean => Self::unconditional(),
            Interpretation::Aristotelian => Self::all(),
        }
    }

    /// Returns `true` if `form` is valid under `interpretation`.
    pub fn is_valid(form: SyllogisticForm, interpretation: Interpretation) -> bool {
        Self::for_interpretation(interpretation).contains(&form)
    }

    /// Returns the traditional name of a form, e.g. "Barbara" for `AAA-1`.
    pub fn name(form: SyllogisticForm) -> Option<&'static str> {
        UNCONDITIONAL
            .iter()
            .chain(CONDITIONAL.iter())
            .find(|entry| form_of(entry) == form)
            .map(|entry| entry.0)
    }
}
