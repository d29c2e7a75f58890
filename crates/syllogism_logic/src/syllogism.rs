//! Syllogisms, moods and figures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::proposition::{Form, Proposition};
use crate::term::Term;

/// An ordered triple of categorical propositions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Syllogism {
    /// The premise containing the major term (the conclusion's predicate).
    pub major: Proposition,
    /// The premise containing the minor term (the conclusion's subject).
    pub minor: Proposition,
    /// The proposition claimed to follow from the premises.
    pub conclusion: Proposition,
}

impl Syllogism {
    /// Creates a syllogism from its three propositions.
    pub fn new(major: Proposition, minor: Proposition, conclusion: Proposition) -> Self {
        Self {
            major,
            minor,
            conclusion,
        }
    }

    /// Starts a [`SyllogismBuilder`].
    pub fn builder() -> SyllogismBuilder {
        SyllogismBuilder::new()
    }

    /// Builds the representative syllogism of a form over the terms S, P and M.
    ///
    /// `AAA-1` yields "All M are P / All S are M / All S are P".
    pub fn canonical(form: SyllogisticForm) -> Self {
        let s = Term::placeholder("S");
        let p = Term::placeholder("P");
        let m = Term::placeholder("M");

        let (major, minor) = match form.figure {
            Figure::First => ((m.clone(), p.clone()), (s.clone(), m)),
            Figure::Second => ((p.clone(), m.clone()), (s.clone(), m)),
            Figure::Third => ((m.clone(), p.clone()), (m, s.clone())),
            Figure::Fourth => ((p.clone(), m.clone()), (m, s.clone())),
        };

        Self {
            major: Proposition::new(form.mood.major, major.0, major.1),
            minor: Proposition::new(form.mood.minor, minor.0, minor.1),
            conclusion: Proposition::new(form.mood.conclusion, s, p),
        }
    }

    /// Parses a JSON array of syllogisms.
    pub fn list_from_json(json: &str) -> Result<Vec<Syllogism>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the forms of the three propositions.
    pub fn mood(&self) -> Mood {
        Mood {
            major: self.major.form(),
            minor: self.minor.form(),
            conclusion: self.conclusion.form(),
        }
    }

    /// Returns the three propositions in order.
    pub fn propositions(&self) -> [&Proposition; 3] {
        [&self.major, &self.minor, &self.conclusion]
    }
}

impl fmt::Display for Syllogism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; therefore {}", self.major, self.minor, self.conclusion)
    }
}

/// A fluent builder for [`Syllogism`]s from form tags and term names.
///
/// ```
/// use syllogism_logic::{Form, Syllogism};
///
/// let syllogism = Syllogism::builder()
///     .major(Form::A, "mammals", "animals")
///     .minor(Form::A, "dogs", "mammals")
///     .conclusion(Form::A, "dogs", "animals")
///     .build()
///     .unwrap();
/// assert_eq!(syllogism.mood().to_string(), "AAA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyllogismBuilder {
    major: Option<(Form, String, String)>,
    minor: Option<(Form, String, String)>,
    conclusion: Option<(Form, String, String)>,
}

impl SyllogismBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the major premise.
    pub fn major(
        mut self,
        form: Form,
        subject: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Self {
        self.major = Some((form, subject.into(), predicate.into()));
        self
    }

    /// Sets the minor premise.
    pub fn minor(
        mut self,
        form: Form,
        subject: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Self {
        self.minor = Some((form, subject.into(), predicate.into()));
        self
    }

    /// Sets the conclusion.
    pub fn conclusion(
        mut self,
        form: Form,
        subject: impl Into<String>,
        predicate: impl Into<String>,
    ) -> Self {
        self.conclusion = Some((form, subject.into(), predicate.into()));
        self
    }

    /// Validates the terms and builds the syllogism.
    pub fn build(self) -> Result<Syllogism> {
        fn part(slot: Option<(Form, String, String)>, name: &'static str) -> Result<Proposition> {
            let (form, subject, predicate) = slot.ok_or(Error::MissingProposition(name))?;
            Proposition::from_names(form, subject, predicate)
        }

        Ok(Syllogism {
            major: part(self.major, "major premise")?,
            minor: part(self.minor, "minor premise")?,
            conclusion: part(self.conclusion, "conclusion")?,
        })
    }
}

/// The figure of a syllogism: where the middle term sits in each premise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Figure {
    /// Subject of the major premise, predicate of the minor.
    First,
    /// Predicate of both premises.
    Second,
    /// Subject of both premises.
    Third,
    /// Predicate of the major premise, subject of the minor.
    Fourth,
}

impl Figure {
    /// All four figures in order.
    pub const ALL: [Figure; 4] = [Figure::First, Figure::Second, Figure::Third, Figure::Fourth];

    /// Returns the figure number, 1 to 4.
    pub fn number(&self) -> u8 {
        match self {
            Figure::First => 1,
            Figure::Second => 2,
            Figure::Third => 3,
            Figure::Fourth => 4,
        }
    }

    /// Looks up a figure by number.
    pub fn from_number(n: u8) -> Option<Figure> {
        match n {
            1 => Some(Figure::First),
            2 => Some(Figure::Second),
            3 => Some(Figure::Third),
            4 => Some(Figure::Fourth),
            _ => None,
        }
    }

    /// Classifies by whether the middle term is the subject of each premise.
    pub fn from_middle_positions(major_subject: bool, minor_subject: bool) -> Figure {
        match (major_subject, minor_subject) {
            (true, false) => Figure::First,
            (false, false) => Figure::Second,
            (true, true) => Figure::Third,
            (false, true) => Figure::Fourth,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The forms of the major premise, minor premise and conclusion, e.g. `EIO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Mood {
    pub major: Form,
    pub minor: Form,
    pub conclusion: Form,
}

impl Mood {
    /// Creates a mood.
    pub fn new(major: Form, minor: Form, conclusion: Form) -> Self {
        Self {
            major,
            minor,
            conclusion,
        }
    }

    /// Iterates over all 64 moods.
    pub fn all() -> impl Iterator<Item = Mood> {
        Form::ALL.into_iter().flat_map(|major| {
            Form::ALL.into_iter().flat_map(move |minor| {
                Form::ALL
                    .into_iter()
                    .map(move |conclusion| Mood::new(major, minor, conclusion))
            })
        })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.major, self.minor, self.conclusion)
    }
}

impl FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let forms: Vec<Form> = s
            .trim()
            .chars()
            .map(Form::from_letter)
            .collect::<Option<_>>()
            .ok_or_else(|| Error::InvalidForm(s.to_string()))?;
        match forms.as_slice() {
            [major, minor, conclusion] => Ok(Mood::new(*major, *minor, *conclusion)),
            _ => Err(Error::InvalidForm(s.to_string())),
        }
    }
}

/// A mood together with a figure, written `AAA-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SyllogisticForm {
    pub mood: Mood,
    pub figure: Figure,
}

impl SyllogisticForm {
    /// Creates a form.
    pub fn new(mood: Mood, figure: Figure) -> Self {
        Self { mood, figure }
    }

    /// Iterates over all 256 mood/figure combinations, figure by figure.
    pub fn all() -> impl Iterator<Item = SyllogisticForm> {
        Figure::ALL
            .into_iter()
            .flat_map(|figure| Mood::all().map(move |mood| SyllogisticForm::new(mood, figure)))
    }
}

impl fmt::Display for SyllogisticForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mood, self.figure)
    }
}

impl FromStr for SyllogisticForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (mood, figure) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| Error::InvalidForm(s.to_string()))?;
        let figure = figure
            .parse::<u8>()
            .ok()
            .and_then(Figure::from_number)
            .ok_or_else(|| Error::InvalidForm(s.to_string()))?;
        Ok(SyllogisticForm::new(mood.parse()?, figure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let s = Syllogism::builder()
            .major(Form::E, "reptiles", "mammals")
            .minor(Form::A, "dogs", "mammals")
            .conclusion(Form::E, "dogs", "reptiles")
            .build()
            .unwrap();

        assert_eq!(s.mood().to_string(), "EAE");
        assert_eq!(s.major.surface_form(), "No reptiles are mammals");
    }

    #[test]
    fn test_builder_missing_proposition() {
        let err = Syllogism::builder()
            .major(Form::A, "mammals", "animals")
            .conclusion(Form::A, "dogs", "animals")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingProposition("minor premise")));
    }

    #[test]
    fn test_builder_rejects_blank_terms() {
        let err = Syllogism::builder()
            .major(Form::A, "mammals", "")
            .minor(Form::A, "dogs", "mammals")
            .conclusion(Form::A, "dogs", "animals")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTerm(_)));
    }

    #[test]
    fn test_list_from_json() {
        let json = r#"[{
            "major": {"form": "E", "subject": "reptiles", "predicate": "mammals"},
            "minor": {"form": "A", "subject": "dogs", "predicate": "mammals"},
            "conclusion": {"form": "E", "subject": "dogs", "predicate": "reptiles"}
        }]"#;
        let list = Syllogism::list_from_json(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].mood().to_string(), "EAE");

        let err = Syllogism::list_from_json("[{\"major\": 1}]").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));

        let blank = json.replace(r#""reptiles", "predicate""#, r#"" ", "predicate""#);
        assert!(matches!(
            Syllogism::list_from_json(&blank),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_canonical_figures() {
        let s = Syllogism::canonical("EIO-4".parse().unwrap());
        assert_eq!(s.major.surface_form(), "No P are M");
        assert_eq!(s.minor.surface_form(), "Some M are S");
        assert_eq!(s.conclusion.surface_form(), "Some S are not P");

        let s = Syllogism::canonical("AOO-2".parse().unwrap());
        assert_eq!(s.major.surface_form(), "All P are M");
        assert_eq!(s.minor.surface_form(), "Some S are not M");
    }

    #[test]
    fn test_form_label_parse() {
        let form: SyllogisticForm = "eae-2".parse().unwrap();
        assert_eq!(form.to_string(), "EAE-2");

        assert!("AAA".parse::<SyllogisticForm>().is_err());
        assert!("AAA-5".parse::<SyllogisticForm>().is_err());
        assert!("AAXA-1".parse::<SyllogisticForm>().is_err());
        assert!("AA-1".parse::<SyllogisticForm>().is_err());
    }

    #[test]
    fn test_enumeration_sizes() {
        assert_eq!(Mood::all().count(), 64);
        assert_eq!(SyllogisticForm::all().count(), 256);
    }

    #[test]
    fn test_figure_from_positions() {
        assert_eq!(Figure::from_middle_positions(true, false), Figure::First);
        assert_eq!(Figure::from_middle_positions(false, false), Figure::Second);
        assert_eq!(Figure::from_middle_positions(true, true), Figure::Third);
        assert_eq!(Figure::from_middle_positions(false, true), Figure::Fourth);
    }
}
