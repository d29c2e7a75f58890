//! Syllogism analyzer
//!
//! The analyzer runs two gates in order:
//! - Well-formedness: locate the major, minor and middle terms
//! - Validity: check distribution, quality and quantity
//!
//! Each gate is a fixed sequence of rules. The first rule that fails decides
//! the verdict and nothing after it is evaluated.

use log::{debug, trace};

use crate::classical::ClassicalForms;
use crate::config::AnalyzerConfig;
use crate::proposition::Proposition;
use crate::report::Reporter;
use crate::rule::Rule;
use crate::syllogism::{Figure, Syllogism, SyllogisticForm};
use crate::term::Term;
use crate::verdict::{TermStructure, ValidSyllogism, Verdict, Violation};

/// Evaluates syllogisms for well-formedness and validity.
///
/// The analyzer holds only its configuration, so a single instance can be
/// shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SyllogismAnalyzer {
    config: AnalyzerConfig,
}

impl SyllogismAnalyzer {
    /// Creates an analyzer with the default (Boolean) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with a specific configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the analyzer's configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyses a syllogism and returns its verdict.
    pub fn analyse(&self, syllogism: &Syllogism) -> Verdict {
        let verdict = match self.check_well_formed(syllogism) {
            Err(violation) => Verdict::NotWellFormed(violation),
            Ok(structure) => match self.check_validity(syllogism, &structure) {
                Some(violation) => Verdict::Invalid {
                    structure,
                    violation,
                },
                None => {
                    let mnemonic = ClassicalForms::name(structure.form);
                    Verdict::Valid(ValidSyllogism::new(
                        structure,
                        syllogism,
                        self.config.interpretation,
                        mnemonic,
                    ))
                }
            },
        };

        debug!("{} => {}", syllogism, verdict);
        verdict
    }

    /// Analyses three loose propositions.
    pub fn analyse_parts(
        &self,
        major: Proposition,
        minor: Proposition,
        conclusion: Proposition,
    ) -> Verdict {
        self.analyse(&Syllogism::new(major, minor, conclusion))
    }

    /// Analyses a syllogism and sends its report lines to `reporter`.
    pub fn analyse_and_report<R: Reporter + ?Sized>(
        &self,
        syllogism: &Syllogism,
        reporter: &mut R,
    ) -> Verdict {
        let verdict = self.analyse(syllogism);
        for line in verdict.report_lines() {
            reporter.report(&line);
        }
        verdict
    }

    /// Runs the well-formedness rules, returning the term structure on success.
    ///
    /// The conclusion's predicate is looked up in the major premise and its
    /// subject in the minor premise; the term each premise has left over is
    /// its middle term. When a premise's subject and predicate are the same
    /// term, the subject match wins.
    pub fn check_well_formed(
        &self,
        syllogism: &Syllogism,
    ) -> std::result::Result<TermStructure, Violation> {
        let Syllogism {
            major,
            minor,
            conclusion,
        } = syllogism;
        let major_term = conclusion.predicate();
        let minor_term = conclusion.subject();

        trace!("Evaluating rule: {}", Rule::MajorTermInMajorPremise.id());
        let (major_middle, middle_is_major_subject) = leftover(major, major_term).ok_or_else(|| {
            Violation::new(
                Rule::MajorTermInMajorPremise,
                format!("major term '{}' does not occur in \"{}\"", major_term, major),
            )
        })?;

        trace!("Evaluating rule: {}", Rule::MinorTermInMinorPremise.id());
        let (minor_middle, middle_is_minor_subject) = leftover(minor, minor_term).ok_or_else(|| {
            Violation::new(
                Rule::MinorTermInMinorPremise,
                format!("minor term '{}' does not occur in \"{}\"", minor_term, minor),
            )
        })?;

        trace!("Evaluating rule: {}", Rule::SharedMiddleTerm.id());
        if major_middle != minor_middle {
            return Err(Violation::new(
                Rule::SharedMiddleTerm,
                format!(
                    "major premise leaves '{}', minor premise leaves '{}'",
                    major_middle, minor_middle
                ),
            ));
        }

        // wf-3 has made both middles equal, so the minor check only ever
        // repeats the major one.
        for (rule, middle) in [
            (Rule::MajorMiddleDistinct, major_middle),
            (Rule::MinorMiddleDistinct, minor_middle),
        ] {
            trace!("Evaluating rule: {}", rule.id());
            if middle == major_term || middle == minor_term {
                return Err(Violation::new(
                    rule,
                    format!("middle term '{}' occurs in \"{}\"", middle, conclusion),
                ));
            }
        }

        let figure =
            Figure::from_middle_positions(middle_is_major_subject, middle_is_minor_subject);
        Ok(TermStructure {
            major_term: major_term.clone(),
            minor_term: minor_term.clone(),
            middle_term: major_middle.clone(),
            form: SyllogisticForm::new(syllogism.mood(), figure),
        })
    }

    /// Runs the validity rules of the configured interpretation on a
    /// well-formed syllogism, returning the first violation.
    pub fn check_validity(
        &self,
        syllogism: &Syllogism,
        structure: &TermStructure,
    ) -> Option<Violation> {
        self.config
            .interpretation
            .validity_rules()
            .into_iter()
            .find_map(|rule| {
                trace!("Evaluating rule: {}", rule.id());
                self.violates(rule, syllogism, structure)
                    .map(|detail| Violation::new(rule, detail))
            })
    }

    /// Returns a description of the violation if `rule` fails.
    fn violates(
        &self,
        rule: Rule,
        syllogism: &Syllogism,
        structure: &TermStructure,
    ) -> Option<String> {
        let Syllogism {
            major,
            minor,
            conclusion,
        } = syllogism;
        let distributes =
            |p: &Proposition, term: &Term| p.distributes_with(term, self.config.o_distribution);
        let in_premise = |term: &Term| distributes(major, term) || distributes(minor, term);

        match rule {
            Rule::DistributedMiddle => (!in_premise(&structure.middle_term)).then(|| {
                format!(
                    "middle term '{}' is undistributed in both premises",
                    structure.middle_term
                )
            }),
            Rule::DistributedMinorTerm => {
                let term = &structure.minor_term;
                (distributes(conclusion, term) && !in_premise(term)).then(|| {
                    format!(
                        "minor term '{}' is distributed in the conclusion but in neither premise",
                        term
                    )
                })
            }
            Rule::DistributedMajorTerm => {
                let term = &structure.major_term;
                (distributes(conclusion, term) && !in_premise(term)).then(|| {
                    format!(
                        "major term '{}' is distributed in the conclusion but in neither premise",
                        term
                    )
                })
            }
            Rule::AffirmativePremise => (!major.is_affirmative() && !minor.is_affirmative())
                .then(|| format!("\"{}\" and \"{}\" are both negative", major, minor)),
            Rule::NegativeConclusion => {
                let negative_premise = !major.is_affirmative() || !minor.is_affirmative();
                (negative_premise && conclusion.is_affirmative())
                    .then(|| format!("\"{}\" is affirmative", conclusion))
            }
            Rule::UniversalConclusion => {
                (major.is_universal() && minor.is_universal() && !conclusion.is_universal())
                    .then(|| format!("\"{}\" is particular", conclusion))
            }
            Rule::NegativePremise => {
                (major.is_affirmative() && minor.is_affirmative() && !conclusion.is_affirmative())
                    .then(|| format!("\"{}\" is negative", conclusion))
            }
            // Term placement is settled by check_well_formed.
            Rule::MajorTermInMajorPremise
            | Rule::MinorTermInMinorPremise
            | Rule::SharedMiddleTerm
            | Rule::MajorMiddleDistinct
            | Rule::MinorMiddleDistinct => None,
        }
    }
}

/// Finds `term` in a premise and returns the premise's other term, plus
/// whether that other term is the premise's subject.
fn leftover<'a>(premise: &'a Proposition, term: &Term) -> Option<(&'a Term, bool)> {
    if premise.subject() == term {
        Some((premise.predicate(), false))
    } else if premise.predicate() == term {
        Some((premise.subject(), true))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interpretation;
    use crate::proposition::{Form, ODistribution};
    use crate::report::CollectingReporter;

    fn syllogism(
        major: (Form, &str, &str),
        minor: (Form, &str, &str),
        conclusion: (Form, &str, &str),
    ) -> Syllogism {
        Syllogism::builder()
            .major(major.0, major.1, major.2)
            .minor(minor.0, minor.1, minor.2)
            .conclusion(conclusion.0, conclusion.1, conclusion.2)
            .build()
            .unwrap()
    }

    fn canonical(label: &str) -> Syllogism {
        Syllogism::canonical(label.parse().unwrap())
    }

    #[test]
    fn test_barbara() {
        let analyzer = SyllogismAnalyzer::new();
        let s = syllogism(
            (Form::A, "mammals", "animals"),
            (Form::A, "dogs", "mammals"),
            (Form::A, "dogs", "animals"),
        );

        let verdict = analyzer.analyse(&s);
        assert!(verdict.is_valid());

        let structure = verdict.structure().unwrap();
        assert_eq!(structure.major_term, "animals");
        assert_eq!(structure.minor_term, "dogs");
        assert_eq!(structure.middle_term, "mammals");
        assert_eq!(structure.form.to_string(), "AAA-1");
    }

    #[test]
    fn test_major_term_missing() {
        let s = syllogism(
            (Form::A, "mammals", "animals"),
            (Form::A, "dogs", "mammals"),
            (Form::A, "dogs", "pets"),
        );
        let verdict = SyllogismAnalyzer::new().analyse(&s);
        assert_eq!(verdict.rule(), Some(Rule::MajorTermInMajorPremise));
        assert!(!verdict.is_well_formed());
    }

    #[test]
    fn test_minor_term_missing() {
        let s = syllogism(
            (Form::A, "mammals", "animals"),
            (Form::A, "dogs", "mammals"),
            (Form::A, "cats", "animals"),
        );
        let verdict = SyllogismAnalyzer::new().analyse(&s);
        assert_eq!(verdict.rule(), Some(Rule::MinorTermInMinorPremise));
    }

    #[test]
    fn test_middle_terms_differ() {
        let s = syllogism(
            (Form::A, "mammals", "animals"),
            (Form::A, "dogs", "pets"),
            (Form::A, "dogs", "animals"),
        );
        let verdict = SyllogismAnalyzer::new().analyse(&s);
        assert_eq!(verdict.rule(), Some(Rule::SharedMiddleTerm));
        assert!(verdict.violation().unwrap().detail.contains("'mammals'"));
        assert!(verdict.violation().unwrap().detail.contains("'pets'"));
    }

    #[test]
    fn test_middle_equal_to_conclusion_term() {
        // "All animals are animals" leaves 'animals' as the middle term.
        let s = syllogism(
            (Form::A, "animals", "animals"),
            (Form::A, "dogs", "animals"),
            (Form::A, "dogs", "animals"),
        );
        let verdict = SyllogismAnalyzer::new().analyse(&s);
        assert_eq!(verdict.rule(), Some(Rule::MajorMiddleDistinct));
        assert_eq!(verdict.rule().unwrap().id(), "wf-4");
    }

    #[test]
    fn test_degenerate_minor_premise_reports_major_middle() {
        // "All dogs are dogs" leaves 'dogs' in the minor premise, and wf-3
        // forces the major middle to match, so the major check reports it.
        let s = syllogism(
            (Form::A, "animals", "dogs"),
            (Form::A, "dogs", "dogs"),
            (Form::A, "dogs", "animals"),
        );
        let verdict = SyllogismAnalyzer::new().analyse(&s);
        assert_eq!(verdict.rule(), Some(Rule::MajorMiddleDistinct));
        assert!(verdict.violation().unwrap().detail.contains("'dogs'"));
    }

    #[test]
    fn test_repeated_premise_is_well_formed() {
        // All A are B / All A are B / All A are A
        let s = syllogism((Form::A, "a", "b"), (Form::A, "a", "b"), (Form::A, "a", "a"));
        let verdict = SyllogismAnalyzer::new().analyse(&s);
        assert!(verdict.is_well_formed());
        assert_eq!(verdict.structure().unwrap().form.to_string(), "AAA-2");
        assert_eq!(verdict.rule(), Some(Rule::DistributedMiddle));
    }

    #[test]
    fn test_figures() {
        let analyzer = SyllogismAnalyzer::new();
        for (label, figure) in [
            ("EAE-1", Figure::First),
            ("EAE-2", Figure::Second),
            ("IAI-3", Figure::Third),
            ("IAI-4", Figure::Fourth),
        ] {
            let verdict = analyzer.analyse(&canonical(label));
            assert!(verdict.is_valid(), "{}", label);
            assert_eq!(verdict.structure().unwrap().figure(), figure);
        }
    }

    #[test]
    fn test_each_validity_rule() {
        let analyzer = SyllogismAnalyzer::new();
        let cases = [
            ("AAA-2", Rule::DistributedMiddle),
            ("AIA-1", Rule::DistributedMinorTerm),
            ("AAE-1", Rule::DistributedMajorTerm),
            ("EEE-1", Rule::AffirmativePremise),
            ("EOO-1", Rule::AffirmativePremise),
            ("EAA-1", Rule::NegativeConclusion),
            ("AAI-1", Rule::UniversalConclusion),
        ];
        for (label, rule) in cases {
            let verdict = analyzer.analyse(&canonical(label));
            assert!(verdict.is_well_formed(), "{}", label);
            assert_eq!(verdict.rule(), Some(rule), "{}", label);
        }
    }

    #[test]
    fn test_aristotelian_rules() {
        let analyzer = SyllogismAnalyzer::with_config(AnalyzerConfig::aristotelian());

        let darapti = analyzer.analyse(&canonical("AAI-3"));
        assert!(darapti.is_valid());

        let verdict = analyzer.analyse(&canonical("AAO-4"));
        assert_eq!(verdict.rule(), Some(Rule::NegativePremise));
    }

    #[test]
    fn test_legacy_o_distribution() {
        let analyzer = SyllogismAnalyzer::with_config(AnalyzerConfig::legacy());
        assert_eq!(analyzer.config().o_distribution, ODistribution::Never);

        let baroco = analyzer.analyse(&canonical("AOO-2"));
        assert_eq!(baroco.rule(), Some(Rule::DistributedMiddle));

        let fallacy = analyzer.analyse(&canonical("AIO-1"));
        assert!(fallacy.is_valid());

        // The textbook rule catches it as an illicit major.
        let verdict = SyllogismAnalyzer::new().analyse(&canonical("AIO-1"));
        assert_eq!(verdict.rule(), Some(Rule::DistributedMajorTerm));
    }

    #[test]
    fn test_report_lines() {
        let analyzer = SyllogismAnalyzer::new();
        let mut reporter = CollectingReporter::new();
        let s = syllogism(
            (Form::A, "mammals", "animals"),
            (Form::A, "dogs", "mammals"),
            (Form::A, "dogs", "animals"),
        );

        analyzer.analyse_and_report(&s, &mut reporter);
        assert_eq!(
            reporter.lines(),
            [
                "Major Term: animals",
                "Minor Term: dogs",
                "Middle Term: mammals",
                "Form: AAA-1",
                "valid boolean syllogism (Barbara)",
                "All mammals are animals",
                "All dogs are mammals",
                "All dogs are animals",
            ]
        );
    }

    #[test]
    fn test_failure_reports_one_line() {
        let analyzer = SyllogismAnalyzer::with_config(AnalyzerConfig {
            interpretation: Interpretation::Boolean,
            ..Default::default()
        });
        let mut reporter = CollectingReporter::new();
        analyzer.analyse_and_report(&canonical("AAA-2"), &mut reporter);

        assert_eq!(reporter.lines().len(), 1);
        assert!(reporter.lines()[0].contains("rule v-1"));
        assert!(reporter.lines()[0].contains("'M'"));
    }
}
