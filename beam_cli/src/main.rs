//! # BeamCee CLI Application
//!
//! Terminal front-end for the beam calculator. Reads a beam description
//! from a JSON file (`--input`) or interactive prompts, streams the analysis
//! to stdout as it arrives, then prints the segmented steps.
//!
//! Logs and interactive questions go to stderr (`RUST_LOG`, default `info`)
//! so stdout carries only the analysis.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use futures::StreamExt;
use serde::Serialize;
use tracing::{debug, info};

use beam_core::beam::{BeamConfiguration, BeamType, SupportType};
use beam_core::file_io::{load_calculation_input, load_settings, CalculationInput};
use beam_core::loads::{LoadEntry, LoadKind, LoadSet};
use beam_core::segmenter::{segment, AnalysisStep, MissingMarkerPolicy};
use beam_core::{BeamError, BeamResult, CalculationEvent, ClientSettings, CompletionClient};

#[derive(Debug, Parser)]
#[command(
    name = "beamcee",
    version,
    about = "Step-by-step beam analysis from a chat-completion endpoint"
)]
struct Args {
    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Beam and loads as JSON instead of interactive prompts
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the analysis prompt and exit without contacting the endpoint
    #[arg(long)]
    prompt_only: bool,

    /// Print the steps as JSON (the raw stream is not echoed)
    #[arg(long)]
    json: bool,

    /// What to do when the answer has no "Step N:" markers
    #[arg(long)]
    policy: Option<MissingMarkerPolicy>,
}

/// A step as printed with `--json`
#[derive(Debug, Serialize)]
struct StepOutput<'a> {
    step: String,
    text: &'a str,
}

/// Interactive prompts. Questions go to `out` (stderr in `main`) so stdout
/// carries only the analysis, even with `--json`.
struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    fn say(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }

    fn read_line(&mut self, prompt: &str) -> String {
        if write!(self.out, "{}", prompt).and_then(|_| self.out.flush()).is_err() {
            return String::new();
        }

        let mut answer = String::new();
        if self.input.read_line(&mut answer).is_err() {
            return String::new();
        }

        answer.trim().to_string()
    }

    /// Ask until the answer parses; blank (or end of input) gives the default.
    fn choice<T: FromStr<Err = BeamError> + Default>(&mut self, prompt: &str) -> T {
        loop {
            let answer = self.read_line(prompt);
            if answer.is_empty() {
                return T::default();
            }
            match answer.parse() {
                Ok(value) => return value,
                Err(e) => self.say(&format!("  {}", e)),
            }
        }
    }

    fn loads(&mut self, kind: LoadKind, loads: &mut LoadSet) {
        loop {
            let magnitude = self.read_line(&format!(
                "{} magnitude ({}) [blank to finish]: ",
                kind.list_label(),
                kind.unit()
            ));
            if magnitude.is_empty() {
                return;
            }
            let position = self.read_line("  position (m from left): ");
            loads.push(kind, LoadEntry::new(magnitude, position));
        }
    }

    fn calculation_input(&mut self) -> CalculationInput {
        self.say("BeamCee - Beam Calculator");
        self.say("=========================");
        self.say("");

        let beam_codes: Vec<&str> = BeamType::ALL.iter().map(|t| t.code()).collect();
        let support_codes: Vec<&str> = SupportType::ALL.iter().map(|t| t.code()).collect();

        let beam = BeamConfiguration {
            beam_type: self.choice(&format!("Beam type ({}): ", beam_codes.join("/"))),
            support_type: self.choice(&format!("Support type ({}): ", support_codes.join("/"))),
            length: self.read_line("Length (m): "),
            width: self.read_line("Width (m): "),
            height: self.read_line("Height (m): "),
            youngs_modulus: self.read_line("Young's Modulus (GPa): "),
        };

        let mut loads = LoadSet::new();
        self.say("");
        for kind in LoadKind::ALL {
            self.loads(kind, &mut loads);
        }

        self.say("");
        if !loads.is_empty() {
            self.say("Current Loads:");
            for line in loads.describe() {
                self.say(&format!("  {}", line));
            }
            self.say("");
        }

        CalculationInput { beam, loads }
    }
}

/// Steps as `Step N` blocks separated by a blank line
fn format_steps(steps: &[AnalysisStep]) -> String {
    steps
        .iter()
        .map(|step| format!("{}\n{}", step.label(), step.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn steps_json(steps: &[AnalysisStep]) -> BeamResult<String> {
    let output: Vec<StepOutput<'_>> = steps
        .iter()
        .map(|step| StepOutput {
            step: step.label(),
            text: &step.text,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Settings file (or defaults), then `lookup` overrides, then flags
fn settings_for(
    args: &Args,
    lookup: impl Fn(&str) -> Option<String>,
) -> BeamResult<ClientSettings> {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => ClientSettings::default(),
    };
    let mut settings = settings.with_overrides(lookup);
    if let Some(policy) = args.policy {
        settings.missing_marker_policy = policy;
    }
    settings.validate()?;
    Ok(settings)
}

async fn run(args: Args) -> BeamResult<()> {
    let settings = settings_for(&args, |key| std::env::var(key).ok())?;

    let input = match &args.input {
        Some(path) => load_calculation_input(path)?,
        None => Prompter::new(io::stdin().lock(), io::stderr()).calculation_input(),
    };
    let prompt = input.prompt();

    if args.prompt_only {
        println!("{}", prompt);
        return Ok(());
    }

    let client = CompletionClient::new(&settings)?;
    info!(url = client.url(), "Calculating");

    let mut events = client.calculate(prompt);
    let mut stdout = io::stdout();
    let text = loop {
        match events.next().await {
            Some(CalculationEvent::Chunk(chunk)) => {
                if !args.json {
                    print!("{}", chunk);
                    let _ = stdout.flush();
                }
            }
            Some(CalculationEvent::Finished(text)) => break text,
            Some(CalculationEvent::Failed(e)) => return Err(e),
            None => return Err(BeamError::stream("Stream ended without a result")),
        }
    };

    let steps = segment(&text, settings.missing_marker_policy)?;
    debug!(steps = steps.len(), chars = text.len(), "Answer segmented");

    if args.json {
        println!("{}", steps_json(&steps)?);
    } else {
        println!();
        println!();
        println!("═══════════════════════════════════════");
        println!("  ANALYSIS ({} steps)", steps.len());
        println!("═══════════════════════════════════════");
        println!();
        if steps.is_empty() {
            println!("No steps found in the answer.");
        } else {
            println!("{}", format_steps(&steps));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
