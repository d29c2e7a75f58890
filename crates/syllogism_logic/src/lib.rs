//! Syllogism Logic - Categorical Syllogism Analyzer
//!
//! This crate decides whether two premises and a conclusion, each an A, E, I
//! or O categorical proposition, form a well-formed categorical syllogism and,
//! if so, whether the conclusion follows necessarily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Syllogism Analyzer                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                   Propositions                        │   │
//! │  │  A (All S are P) │ E (No) │ I (Some) │ O (Some not)   │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │              Stage 1: Well-formedness                 │   │
//! │  │  Major term │ Minor term │ Shared, distinct middle    │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │              Stage 2: Validity                        │   │
//! │  │  Distribution │ Quality │ Quantity                    │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │                 Verdict → Reporter                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use syllogism_logic::{Form, Syllogism, SyllogismAnalyzer};
//!
//! let syllogism = Syllogism::builder()
//!     .major(Form::A, "mammals", "animals")
//!     .minor(Form::A, "dogs", "mammals")
//!     .conclusion(Form::A, "dogs", "animals")
//!     .build()
//!     .unwrap();
//!
//! let verdict = SyllogismAnalyzer::new().analyse(&syllogism);
//! assert!(verdict.is_valid());
//! assert_eq!(verdict.structure().unwrap().form.to_string(), "AAA-1");
//! ```

pub mod analyzer;
pub mod classical;
pub mod config;
pub mod error;
pub mod proposition;
pub mod report;
pub mod rule;
pub mod syllogism;
pub mod term;
pub mod verdict;

// Re-exports
pub use analyzer::SyllogismAnalyzer;
pub use classical::ClassicalForms;
pub use config::{AnalyzerConfig, Interpretation};
pub use error::{Error, Result};
pub use proposition::{Form, ODistribution, Proposition};
pub use report::{CollectingReporter, LogReporter, Reporter, WriterReporter};
pub use rule::{Rule, Stage};
pub use syllogism::{Figure, Mood, Syllogism, SyllogismBuilder, SyllogisticForm};
pub use term::Term;
pub use verdict::{TermStructure, ValidSyllogism, Verdict, Violation};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
