//! Configuration for the syllogism analyzer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::proposition::ODistribution;
use crate::rule::Rule;

/// Whether universal propositions carry existential import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    /// Universal propositions assert nothing about existence. Fifteen forms are valid.
    #[default]
    Boolean,
    /// Universal propositions presuppose their subject exists. The traditional
    /// twenty-four forms are valid.
    Aristotelian,
}

impl Interpretation {
    /// Returns the validity rules that apply, in evaluation order.
    pub fn validity_rules(&self) -> Vec<Rule> {
        Rule::VALIDITY
            .into_iter()
            .filter(|rule| match rule {
                Rule::UniversalConclusion => *self == Interpretation::Boolean,
                Rule::NegativePremise => *self == Interpretation::Aristotelian,
                _ => true,
            })
            .collect()
    }

    /// Returns the adjective used when reporting a valid syllogism.
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Boolean => "boolean",
            Interpretation::Aristotelian => "aristotelian",
        }
    }
}

/// Main configuration for the `SyllogismAnalyzer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Which validity rules apply.
    pub interpretation: Interpretation,
    /// How O propositions distribute their terms.
    pub o_distribution: ODistribution,
}

impl AnalyzerConfig {
    /// Returns the default configuration: Boolean interpretation, textbook distribution.
    pub fn boolean() -> Self {
        Self::default()
    }

    /// Returns a configuration that accepts the traditional twenty-four forms.
    pub fn aristotelian() -> Self {
        Self {
            interpretation: Interpretation::Aristotelian,
            o_distribution: ODistribution::Predicate,
        }
    }

    /// Returns a configuration where O propositions distribute nothing.
    ///
    /// Matches verdicts produced by the historical analyzer: `AOO-2` (Baroco)
    /// is rejected while fallacies such as `AIO-1` are accepted.
    pub fn legacy() -> Self {
        Self {
            interpretation: Interpretation::Boolean,
            o_distribution: ODistribution::Never,
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded analyzer config from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }
}
