//! Verdicts produced by the analyzer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Interpretation;
use crate::rule::{Rule, Stage};
use crate::syllogism::{Figure, Syllogism, SyllogisticForm};
use crate::term::Term;

/// The outcome of analysing a syllogism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The propositions do not share their terms the way a syllogism must.
    NotWellFormed(Violation),
    /// Well-formed, but the conclusion does not follow.
    Invalid {
        structure: TermStructure,
        violation: Violation,
    },
    /// Well-formed, and the conclusion follows necessarily.
    Valid(ValidSyllogism),
}

impl Verdict {
    /// Returns `true` if the syllogism is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }

    /// Returns `true` if the syllogism passed the well-formedness stage.
    pub fn is_well_formed(&self) -> bool {
        !matches!(self, Verdict::NotWellFormed(_))
    }

    /// Returns the violation, if any rule failed.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::NotWellFormed(violation) | Verdict::Invalid { violation, .. } => {
                Some(violation)
            }
            Verdict::Valid(_) => None,
        }
    }

    /// Returns the rule that failed, if any.
    pub fn rule(&self) -> Option<Rule> {
        self.violation().map(|v| v.rule)
    }

    /// Returns the term structure of a well-formed syllogism.
    pub fn structure(&self) -> Option<&TermStructure> {
        match self {
            Verdict::NotWellFormed(_) => None,
            Verdict::Invalid { structure, .. } => Some(structure),
            Verdict::Valid(valid) => Some(&valid.structure),
        }
    }

    /// Returns the human-readable report for this verdict.
    ///
    /// A failing verdict is a single line. A valid one lists the major, minor
    /// and middle terms, the form label, and the three propositions.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Verdict::NotWellFormed(violation) | Verdict::Invalid { violation, .. } => {
                vec![violation.to_string()]
            }
            Verdict::Valid(valid) => {
                let mut lines = vec![
                    format!("Major Term: {}", valid.structure.major_term),
                    format!("Minor Term: {}", valid.structure.minor_term),
                    format!("Middle Term: {}", valid.structure.middle_term),
                    format!("Form: {}", valid.structure.form),
                ];
                match &valid.mnemonic {
                    Some(name) => lines.push(format!(
                        "valid {} syllogism ({})",
                        valid.interpretation.label(),
                        name
                    )),
                    None => lines.push(format!("valid {} syllogism", valid.interpretation.label())),
                }
                lines.extend(valid.surface_forms.iter().cloned());
                lines
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::NotWellFormed(v) => write!(f, "not well-formed ({})", v.rule.id()),
            Verdict::Invalid {
                structure,
                violation,
            } => write!(f, "invalid {} ({})", structure.form, violation.rule.id()),
            Verdict::Valid(valid) => write!(f, "valid {}", valid.structure.form),
        }
    }
}

/// A broken rule, with the terms that broke it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that failed.
    pub rule: Rule,
    /// Names the terms or propositions involved.
    pub detail: String,
}

impl Violation {
    /// Creates a violation.
    pub fn new(rule: Rule, detail: impl Into<String>) -> Self {
        Self {
            rule,
            detail: detail.into(),
        }
    }

    /// Returns the stage of the failed rule.
    pub fn stage(&self) -> Stage {
        self.rule.stage()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} (rule {}: {}).",
            self.rule.stage().preamble(),
            self.rule.description(),
            self.rule.id(),
            self.detail
        )
    }
}

impl std::error::Error for Violation {}

/// The terms of a well-formed syllogism and the form they make.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermStructure {
    /// The conclusion's predicate.
    pub major_term: Term,
    /// The conclusion's subject.
    pub minor_term: Term,
    /// The term both premises share.
    pub middle_term: Term,
    /// Mood and figure.
    pub form: SyllogisticForm,
}

impl TermStructure {
    pub fn figure(&self) -> Figure {
        self.form.figure
    }
}

/// The report carried by a valid verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidSyllogism {
    pub structure: TermStructure,
    /// The interpretation under which the syllogism was judged.
    pub interpretation: Interpretation,
    /// Traditional name of the form, e.g. "Barbara".
    pub mnemonic: Option<String>,
    /// Major premise, minor premise and conclusion as sentences.
    pub surface_forms: [String; 3],
}

impl ValidSyllogism {
    pub(crate) fn new(
        structure: TermStructure,
        syllogism: &Syllogism,
        interpretation: Interpretation,
        mnemonic: Option<&str>,
    ) -> Self {
        Self {
            structure,
            interpretation,
            mnemonic: mnemonic.map(str::to_string),
            surface_forms: syllogism.propositions().map(|p| p.surface_form()),
        }
    }

    pub fn figure(&self) -> Figure {
        self.structure.form.figure
    }
}
