//! The named rules of syllogistic analysis
//!
//! Rules are grouped into two stages. Well-formedness rules check that the
//! three propositions share their terms the way a categorical syllogism must;
//! validity rules check that the conclusion follows from the premises.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The stage a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Term placement across the three propositions.
    WellFormedness,
    /// Distribution, quality and quantity of a well-formed syllogism.
    Validity,
}

impl Stage {
    /// Returns a short string prefix for the stage.
    pub fn prefix(&self) -> &'static str {
        match self {
            Stage::WellFormedness => "wf",
            Stage::Validity => "v",
        }
    }

    /// Returns the sentence that opens every violation of this stage.
    pub fn preamble(&self) -> &'static str {
        match self {
            Stage::WellFormedness => "This is not a well-formed categorical syllogism",
            Stage::Validity => "This is not a valid syllogism",
        }
    }
}

/// A single rule of syllogistic analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// The major term must appear in the major premise.
    MajorTermInMajorPremise,
    /// The minor term must appear in the minor premise.
    MinorTermInMinorPremise,
    /// Both premises must leave the same middle term.
    SharedMiddleTerm,
    /// The major premise's middle term must not be a conclusion term.
    MajorMiddleDistinct,
    /// The minor premise's middle term must not be a conclusion term.
    MinorMiddleDistinct,
    /// Undistributed middle.
    DistributedMiddle,
    /// Illicit minor.
    DistributedMinorTerm,
    /// Illicit major.
    DistributedMajorTerm,
    /// Exclusive premises.
    AffirmativePremise,
    /// Affirmative conclusion from a negative premise.
    NegativeConclusion,
    /// Particular conclusion from universal premises.
    UniversalConclusion,
    /// Negative conclusion from affirmative premises.
    NegativePremise,
}

impl Rule {
    /// Well-formedness rules in evaluation order.
    pub const WELL_FORMEDNESS: [Rule; 5] = [
        Rule::MajorTermInMajorPremise,
        Rule::MinorTermInMinorPremise,
        Rule::SharedMiddleTerm,
        Rule::MajorMiddleDistinct,
        Rule::MinorMiddleDistinct,
    ];

    /// Validity rules in evaluation order. Which of them apply depends on the
    /// [`Interpretation`](crate::Interpretation).
    pub const VALIDITY: [Rule; 7] = [
        Rule::DistributedMiddle,
        Rule::DistributedMinorTerm,
        Rule::DistributedMajorTerm,
        Rule::AffirmativePremise,
        Rule::NegativeConclusion,
        Rule::UniversalConclusion,
        Rule::NegativePremise,
    ];

    /// Returns the stage the rule belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Rule::MajorTermInMajorPremise
            | Rule::MinorTermInMinorPremise
            | Rule::SharedMiddleTerm
            | Rule::MajorMiddleDistinct
            | Rule::MinorMiddleDistinct => Stage::WellFormedness,
            _ => Stage::Validity,
        }
    }

    /// Returns the rule's number within its stage.
    ///
    /// Both middle-term distinctness checks are rule 4.
    pub fn number(&self) -> u8 {
        match self {
            Rule::MajorTermInMajorPremise => 1,
            Rule::MinorTermInMinorPremise => 2,
            Rule::SharedMiddleTerm => 3,
            Rule::MajorMiddleDistinct | Rule::MinorMiddleDistinct => 4,
            Rule::DistributedMiddle => 1,
            Rule::DistributedMinorTerm => 2,
            Rule::DistributedMajorTerm => 3,
            Rule::AffirmativePremise => 4,
            Rule::NegativeConclusion => 5,
            Rule::UniversalConclusion => 6,
            Rule::NegativePremise => 7,
        }
    }

    /// Returns the rule's identifier, prefixed by its stage (e.g. "v-3").
    pub fn id(&self) -> String {
        format!("{}-{}", self.stage().prefix(), self.number())
    }

    /// Returns the traditional name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::MajorTermInMajorPremise => "Major Term Placement",
            Rule::MinorTermInMinorPremise => "Minor Term Placement",
            Rule::SharedMiddleTerm => "Shared Middle Term",
            Rule::MajorMiddleDistinct | Rule::MinorMiddleDistinct => "Distinct Middle Term",
            Rule::DistributedMiddle => "Undistributed Middle",
            Rule::DistributedMinorTerm => "Illicit Minor",
            Rule::DistributedMajorTerm => "Illicit Major",
            Rule::AffirmativePremise => "Exclusive Premises",
            Rule::NegativeConclusion => "Affirmative Conclusion From A Negative Premise",
            Rule::UniversalConclusion => "Existential Fallacy",
            Rule::NegativePremise => "Negative Conclusion From Affirmative Premises",
        }
    }

    /// Returns the requirement the rule enforces, phrased as the reason for a violation.
    pub fn description(&self) -> &'static str {
        match self {
            Rule::MajorTermInMajorPremise => {
                "the conclusion's predicate must be a term in the major premise"
            }
            Rule::MinorTermInMinorPremise => {
                "the conclusion's subject must be a term in the minor premise"
            }
            Rule::SharedMiddleTerm => {
                "the major and minor premise must have identical middle terms"
            }
            Rule::MajorMiddleDistinct => {
                "the major premise's middle term must not be identical to either of the conclusion's terms"
            }
            Rule::MinorMiddleDistinct => {
                "the minor premise's middle term must not be identical to either of the conclusion's terms"
            }
            Rule::DistributedMiddle => {
                "the middle term must be distributed in at least one premise"
            }
            Rule::DistributedMinorTerm => {
                "the conclusion's subject must be distributed in a premise as it is distributed in the conclusion"
            }
            Rule::DistributedMajorTerm => {
                "the conclusion's predicate must be distributed in a premise as it is distributed in the conclusion"
            }
            Rule::AffirmativePremise => "at least one premise must be affirmative",
            Rule::NegativeConclusion => {
                "the conclusion must be negative because one of the premises is"
            }
            Rule::UniversalConclusion => {
                "the conclusion must be universal because both premises are universal"
            }
            Rule::NegativePremise => {
                "the conclusion must be affirmative because both premises are"
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.name())
    }
}
