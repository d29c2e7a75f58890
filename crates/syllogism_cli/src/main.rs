//! Syllogism CLI
//!
//! Analyses categorical syllogisms from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Analyse the built-in example (All mammals are animals / All dogs are mammals / ...)
//! syllogism
//!
//! # Analyse explicit propositions in FORM:subject:predicate notation
//! syllogism analyse --major E:reptiles:mammals --minor A:dogs:mammals --conclusion E:dogs:reptiles
//!
//! # Analyse the representative syllogism of a form, with existential import
//! syllogism --aristotelian form AAI-3
//!
//! # Analyse a JSON array of syllogisms and print verdicts as JSON
//! syllogism --json batch syllogisms.json
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use syllogism_logic::{
    AnalyzerConfig, ClassicalForms, Form, Interpretation, ODistribution, Proposition, Reporter,
    Syllogism, SyllogismAnalyzer, SyllogisticForm, Verdict, WriterReporter,
};

#[derive(Parser, Debug)]
#[command(name = "syllogism")]
#[command(about = "Checks categorical syllogisms for well-formedness and validity")]
#[command(long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON analyzer configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Give universal propositions existential import (24 valid forms)
    #[arg(long, global = true)]
    aristotelian: bool,

    /// Treat O propositions as distributing no term
    #[arg(long, global = true)]
    legacy_o_distribution: bool,

    /// Print verdicts as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse one syllogism (the built-in example when no propositions are given)
    Analyse {
        /// Major premise, e.g. A:mammals:animals
        #[arg(long)]
        major: Option<Proposition>,

        /// Minor premise, e.g. A:dogs:mammals
        #[arg(long)]
        minor: Option<Proposition>,

        /// Conclusion, e.g. A:dogs:animals
        #[arg(long)]
        conclusion: Option<Proposition>,
    },

    /// Analyse the representative syllogism of a form label such as EIO-4
    Form {
        /// Mood and figure
        label: SyllogisticForm,
    },

    /// Analyse a JSON array of syllogisms
    Batch {
        /// Input file
        file: PathBuf,
    },

    /// List the forms valid under the active interpretation
    Forms,
}

#[derive(Serialize)]
struct FormEntry {
    form: String,
    name: Option<&'static str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let stdout = std::io::stdout();
    let all_valid = run(&cli, &mut stdout.lock())?;
    if !all_valid {
        std::process::exit(1);
    }
    Ok(())
}

/// The syllogism analysed when no propositions are given.
fn embedded_example() -> Result<Syllogism> {
    Syllogism::builder()
        .major(Form::A, "mammals", "animals")
        .minor(Form::A, "dogs", "mammals")
        .conclusion(Form::A, "dogs", "animals")
        .build()
        .context("Failed to build the embedded example")
}

/// Merges the configuration file with command-line overrides.
fn load_config(cli: &Cli) -> Result<AnalyzerConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    if cli.aristotelian {
        config.interpretation = Interpretation::Aristotelian;
    }
    if cli.legacy_o_distribution {
        config.o_distribution = ODistribution::Never;
    }

    log::debug!("Analyzer config: {:?}", config);
    Ok(config)
}

/// Runs the selected command, writing to `out`. Returns `true` when every
/// analysed syllogism is valid.
fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<bool> {
    let config = load_config(cli)?;
    let analyzer = SyllogismAnalyzer::with_config(config);

    let batch = matches!(cli.command, Some(Commands::Batch { .. }));
    let syllogisms = match &cli.command {
        None => vec![embedded_example()?],
        Some(Commands::Analyse {
            major,
            minor,
            conclusion,
        }) => match (major, minor, conclusion) {
            (None, None, None) => vec![embedded_example()?],
            (Some(major), Some(minor), Some(conclusion)) => {
                vec![Syllogism::new(major.clone(), minor.clone(), conclusion.clone())]
            }
            _ => anyhow::bail!("--major, --minor and --conclusion must be given together"),
        },
        Some(Commands::Form { label }) => vec![Syllogism::canonical(*label)],
        Some(Commands::Batch { file }) => {
            let contents = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let syllogisms = Syllogism::list_from_json(&contents)
                .with_context(|| format!("Failed to parse syllogisms from {}", file.display()))?;
            if syllogisms.is_empty() {
                anyhow::bail!("{} contains no syllogisms", file.display());
            }
            syllogisms
        }
        Some(Commands::Forms) => {
            list_forms(config.interpretation, cli.json, out)?;
            return Ok(true);
        }
    };

    log::info!("Analysing {} syllogism(s)", syllogisms.len());
    let verdicts = report_all(&analyzer, &syllogisms, cli.json, batch, out)?;
    Ok(verdicts.iter().all(Verdict::is_valid))
}

/// Analyses and prints each syllogism. A batch always prints a JSON array
/// and numbered text sections, even when it holds a single syllogism.
fn report_all<W: Write>(
    analyzer: &SyllogismAnalyzer,
    syllogisms: &[Syllogism],
    json: bool,
    batch: bool,
    out: &mut W,
) -> Result<Vec<Verdict>> {
    let verdicts = if json {
        let verdicts: Vec<Verdict> = syllogisms.iter().map(|s| analyzer.analyse(s)).collect();
        match verdicts.as_slice() {
            [single] if !batch => serde_json::to_writer_pretty(&mut *out, single)?,
            _ => serde_json::to_writer_pretty(&mut *out, &verdicts)?,
        }
        writeln!(out)?;
        verdicts
    } else {
        let mut reporter = WriterReporter::new(&mut *out);
        let mut verdicts = Vec::with_capacity(syllogisms.len());
        for (i, syllogism) in syllogisms.iter().enumerate() {
            if batch {
                if i > 0 {
                    reporter.report("");
                }
                reporter.report(&format!("[{}] {}", i + 1, syllogism));
            }
            verdicts.push(analyzer.analyse_and_report(syllogism, &mut reporter));
        }
        if let Some(e) = reporter.take_error() {
            return Err(e).context("Failed to write report");
        }
        verdicts
    };
    Ok(verdicts)
}

fn list_forms<W: Write>(interpretation: Interpretation, json: bool, out: &mut W) -> Result<()> {
    let entries: Vec<FormEntry> = ClassicalForms::for_interpretation(interpretation)
        .into_iter()
        .map(|form| FormEntry {
            form: form.to_string(),
            name: ClassicalForms::name(form),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
    } else {
        for entry in &entries {
            writeln!(out, "{}  {}", entry.form, entry.name.unwrap_or("-"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (bool, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let valid = run(&cli, &mut out).unwrap();
        (valid, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_runs_embedded_example() {
        let (valid, out) = run_args(&["syllogism"]);
        assert!(valid);
        assert!(out.contains("Major Term: animals"));
        assert!(out.contains("Form: AAA-1"));
        assert!(out.ends_with("All dogs are animals\n"));
    }

    #[test]
    fn test_analyse_explicit_propositions() {
        let (valid, out) = run_args(&[
            "syllogism",
            "analyse",
            "--major",
            "A:cats:mammals",
            "--minor",
            "A:cats:pets",
            "--conclusion",
            "A:pets:mammals",
        ]);
        assert!(!valid);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("rule v-2"));
    }

    #[test]
    fn test_partial_propositions_rejected() {
        let cli = Cli::try_parse_from(["syllogism", "analyse", "--major", "A:a:b"]).unwrap();
        assert!(run(&cli, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_bad_proposition_rejected_by_parser() {
        let result = Cli::try_parse_from(["syllogism", "analyse", "--major", "Q:a:b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_form_with_aristotelian_flag() {
        let (valid, out) = run_args(&["syllogism", "--aristotelian", "form", "AAI-3"]);
        assert!(valid);
        assert!(out.contains("valid aristotelian syllogism (Darapti)"));

        let (valid, _) = run_args(&["syllogism", "form", "AAI-3"]);
        assert!(!valid);
    }

    #[test]
    fn test_forms_listing() {
        let (_, out) = run_args(&["syllogism", "forms"]);
        assert_eq!(out.lines().count(), 15);
        assert!(out.contains("AAA-1  Barbara"));

        let (_, out) = run_args(&["syllogism", "forms", "--aristotelian", "--json"]);
        let entries: Vec<serde_json::Value> = serde_json::from_str(&out).unwrap();
        assert_eq!(entries.len(), 24);
    }

    #[test]
    fn test_json_output() {
        let (_, out) = run_args(&["syllogism", "--json", "form", "EAE-2"]);
        let verdict: Verdict = serde_json::from_str(&out).unwrap();
        assert!(verdict.is_valid());
    }

    #[test]
    fn test_batch_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"major": {{"form": "A", "subject": "mammals", "predicate": "animals"}},
                  "minor": {{"form": "A", "subject": "dogs", "predicate": "mammals"}},
                  "conclusion": {{"form": "A", "subject": "dogs", "predicate": "animals"}}}},
                {{"major": {{"form": "E", "subject": "M", "predicate": "P"}},
                  "minor": {{"form": "E", "subject": "S", "predicate": "M"}},
                  "conclusion": {{"form": "E", "subject": "S", "predicate": "P"}}}}
            ]"#
        )
        .unwrap();

        let path = file.path().to_str().unwrap();
        let (valid, out) = run_args(&["syllogism", "batch", path]);
        assert!(!valid);
        assert!(out.contains("[1] All mammals are animals"));
        assert!(out.contains("[2] No M are P"));
        assert!(out.contains("at least one premise must be affirmative"));
    }

    #[test]
    fn test_single_syllogism_batch_prints_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"major": {{"form": "E", "subject": "reptiles", "predicate": "mammals"}},
                 "minor": {{"form": "A", "subject": "dogs", "predicate": "mammals"}},
                 "conclusion": {{"form": "E", "subject": "dogs", "predicate": "reptiles"}}}}]"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let (valid, out) = run_args(&["syllogism", "--json", "batch", path]);
        assert!(valid);
        let verdicts: Vec<Verdict> = serde_json::from_str(&out).unwrap();
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].to_string(), "valid EAE-2");

        let (_, out) = run_args(&["syllogism", "batch", path]);
        assert!(out.starts_with("[1] No reptiles are mammals"));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["syllogism", "batch", path]).unwrap();
        let mut out = Vec::new();
        let err = run(&cli, &mut out).unwrap_err();
        assert!(err.to_string().contains("contains no syllogisms"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_config_file_with_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"o_distribution": "never"}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["syllogism", "--config", path, "--aristotelian"]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.interpretation, Interpretation::Aristotelian);
        assert_eq!(config.o_distribution, ODistribution::Never);
    }

    #[test]
    fn test_missing_config_file() {
        let cli =
            Cli::try_parse_from(["syllogism", "--config", "/nonexistent/config.json"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["syllogism", "-vv", "forms"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
