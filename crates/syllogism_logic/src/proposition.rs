//! Categorical propositions
//!
//! A categorical proposition relates a subject term to a predicate term in
//! one of four ways:
//!
//! | Form | Surface form        | Quality     | Quantity   | Distributes          |
//! |------|---------------------|-------------|------------|----------------------|
//! | A    | All S are P         | affirmative | universal  | S                    |
//! | E    | No S are P          | negative    | universal  | S and P              |
//! | I    | Some S are P        | affirmative | particular | nothing              |
//! | O    | Some S are not P    | negative    | particular | P                    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::term::Term;

/// The form tag of a categorical proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Form {
    /// Universal affirmative.
    A,
    /// Universal negative.
    E,
    /// Particular affirmative.
    I,
    /// Particular negative.
    O,
}

impl Form {
    /// All four forms in canonical order.
    pub const ALL: [Form; 4] = [Form::A, Form::E, Form::I, Form::O];

    /// Returns the form's letter.
    pub fn letter(&self) -> char {
        match self {
            Form::A => 'A',
            Form::E => 'E',
            Form::I => 'I',
            Form::O => 'O',
        }
    }

    /// Parses a single form letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Form> {
        match c.to_ascii_uppercase() {
            'A' => Some(Form::A),
            'E' => Some(Form::E),
            'I' => Some(Form::I),
            'O' => Some(Form::O),
            _ => None,
        }
    }

    /// Returns `true` for A and I.
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Form::A | Form::I)
    }

    /// Returns `true` for A and E.
    pub fn is_universal(&self) -> bool {
        matches!(self, Form::A | Form::E)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Form::from_letter(c).ok_or_else(|| Error::InvalidForm(s.to_string()))
            }
            _ => Err(Error::InvalidForm(s.to_string())),
        }
    }
}

/// How O propositions distribute their terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ODistribution {
    /// "Some S are not P" distributes P.
    #[default]
    Predicate,
    /// O distributes nothing. Reproduces the historical analyzer, which read an
    /// unset field here.
    Never,
}

/// A categorical proposition: one of the four forms over a subject and a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "form")]
pub enum Proposition {
    /// All S are P.
    A { subject: Term, predicate: Term },
    /// No S are P.
    E { subject: Term, predicate: Term },
    /// Some S are P.
    I { subject: Term, predicate: Term },
    /// Some S are not P.
    O { subject: Term, predicate: Term },
}

impl Proposition {
    /// Creates a proposition of the given form.
    pub fn new(form: Form, subject: Term, predicate: Term) -> Self {
        match form {
            Form::A => Proposition::A { subject, predicate },
            Form::E => Proposition::E { subject, predicate },
            Form::I => Proposition::I { subject, predicate },
            Form::O => Proposition::O { subject, predicate },
        }
    }

    /// Creates a proposition from raw term names.
    pub fn from_names(
        form: Form,
        subject: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::new(form, Term::new(subject)?, Term::new(predicate)?))
    }

    /// Creates "All `subject` are `predicate`".
    pub fn a(subject: Term, predicate: Term) -> Self {
        Proposition::A { subject, predicate }
    }

    /// Creates "No `subject` are `predicate`".
    pub fn e(subject: Term, predicate: Term) -> Self {
        Proposition::E { subject, predicate }
    }

    /// Creates "Some `subject` are `predicate`".
    pub fn i(subject: Term, predicate: Term) -> Self {
        Proposition::I { subject, predicate }
    }

    /// Creates "Some `subject` are not `predicate`".
    pub fn o(subject: Term, predicate: Term) -> Self {
        Proposition::O { subject, predicate }
    }

    /// Returns the form tag.
    pub fn form(&self) -> Form {
        match self {
            Proposition::A { .. } => Form::A,
            Proposition::E { .. } => Form::E,
            Proposition::I { .. } => Form::I,
            Proposition::O { .. } => Form::O,
        }
    }

    /// Returns the subject term.
    pub fn subject(&self) -> &Term {
        match self {
            Proposition::A { subject, .. }
            | Proposition::E { subject, .. }
            | Proposition::I { subject, .. }
            | Proposition::O { subject, .. } => subject,
        }
    }

    /// Returns the predicate term.
    pub fn predicate(&self) -> &Term {
        match self {
            Proposition::A { predicate, .. }
            | Proposition::E { predicate, .. }
            | Proposition::I { predicate, .. }
            | Proposition::O { predicate, .. } => predicate,
        }
    }

    /// Returns `true` if the proposition affirms (A, I).
    pub fn is_affirmative(&self) -> bool {
        self.form().is_affirmative()
    }

    /// Returns `true` if the proposition is universal (A, E).
    pub fn is_universal(&self) -> bool {
        self.form().is_universal()
    }

    /// Returns `true` if `term` is distributed by this proposition.
    pub fn distributes(&self, term: &Term) -> bool {
        self.distributes_with(term, ODistribution::Predicate)
    }

    /// Like [`distributes`](Self::distributes), with an explicit rule for O propositions.
    pub fn distributes_with(&self, term: &Term, o_rule: ODistribution) -> bool {
        match self {
            Proposition::A { subject, .. } => subject == term,
            Proposition::E { subject, predicate } => subject == term || predicate == term,
            Proposition::I { .. } => false,
            Proposition::O { predicate, .. } => match o_rule {
                ODistribution::Predicate => predicate == term,
                ODistribution::Never => false,
            },
        }
    }

    /// Renders the proposition as an English sentence, e.g. "Some dogs are not pets".
    pub fn surface_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proposition::A { subject, predicate } => write!(f, "All {} are {}", subject, predicate),
            Proposition::E { subject, predicate } => write!(f, "No {} are {}", subject, predicate),
            Proposition::I { subject, predicate } => {
                write!(f, "Some {} are {}", subject, predicate)
            }
            Proposition::O { subject, predicate } => {
                write!(f, "Some {} are not {}", subject, predicate)
            }
        }
    }
}

/// Parses the compact notation `FORM:subject:predicate`, e.g. `A:dogs:mammals`.
impl FromStr for Proposition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(form), Some(subject), Some(predicate)) => {
                let form = form
                    .parse::<Form>()
                    .map_err(|_| Error::InvalidProposition(format!("unknown form in {:?}", s)))?;
                Proposition::from_names(form, subject.trim(), predicate.trim())
            }
            _ => Err(Error::InvalidProposition(format!(
                "expected FORM:subject:predicate, got {:?}",
                s
            ))),
        }
    }
}
