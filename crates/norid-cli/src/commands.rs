use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use colored::Colorize;
use norid_gen::{BirthNumberGenerator, GeneratorConfig, EARLIEST_DATE, LATEST_DATE};
use norid_ident::{code_for_text, IdentityNumber, NationalIdentityNumber};
use norid_types::{IdentityKind, Sex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format;
    match cli.command {
        Command::Inspect(args) => cmd_inspect(args, format),
        Command::Classify(args) => cmd_classify(args, format),
        Command::Generate(args) => cmd_generate(args, format, config),
        Command::Range(args) => cmd_range(args, format, config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    debug!(?config, "loaded generator config");
    Ok(config)
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// What the CLI reports about one input.
#[derive(Debug, Serialize)]
pub struct Inspection {
    pub input: String,
    pub kind: IdentityKind,
    pub code: &'static str,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Inspection {
    pub fn of(input: &str) -> Self {
        match IdentityNumber::parse(input) {
            Ok(number) => Self::of_number(&number),
            Err(e) => Self {
                input: input.to_string(),
                kind: IdentityKind::Other,
                code: IdentityKind::Other.code(),
                valid: false,
                sex: None,
                birthdate: None,
                application_year: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn of_number(number: &IdentityNumber) -> Self {
        let (birthdate, error) = match number.birthdate() {
            Ok(date) => (date, None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            input: number.digits().to_string(),
            kind: number.kind(),
            code: number.code(),
            valid: true,
            sex: number.sex(),
            birthdate,
            application_year: number.application_year(),
            error,
        }
    }

    fn print_text(&self) {
        if !self.valid {
            println!("{} {} {}", "✗".red().bold(), self.input.bold(), self.code.dimmed());
            if let Some(error) = &self.error {
                println!("  {}", error.red());
            }
            return;
        }
        println!("{} {} {} ({})", "✓".green().bold(), self.input.bold(), self.code.cyan(), self.kind.name());
        if let Some(sex) = self.sex {
            println!("  Sex: {} ({})", sex, sex.code());
        }
        if let Some(date) = self.birthdate {
            println!("  Birthdate: {}", date.to_string().yellow());
        }
        if let Some(year) = self.application_year {
            println!("  Application year: {}", year.to_string().yellow());
        }
        if let Some(error) = &self.error {
            println!("  {}", error.red());
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_inspect(args: InspectArgs, format: OutputFormat) -> anyhow::Result<()> {
    let report = Inspection::of(&args.number);
    match format {
        OutputFormat::Text => report.print_text(),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct Classification<'a> {
    input: &'a str,
    code: &'static str,
}

fn cmd_classify(args: ClassifyArgs, format: OutputFormat) -> anyhow::Result<()> {
    let results: Vec<Classification<'_>> = args
        .numbers
        .iter()
        .map(|input| Classification { input, code: code_for_text(input) })
        .collect();
    match format {
        OutputFormat::Text => {
            for r in &results {
                let code = if r.code == IdentityKind::Other.code() { r.code.dimmed() } else { r.code.cyan() };
                println!("{}  {}", r.input, code);
            }
        }
        OutputFormat::Json => print_json(&results)?,
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs, format: OutputFormat, config: GeneratorConfig) -> anyhow::Result<()> {
    let attempts = args.attempts.unwrap_or(config.max_attempts);
    let generator = BirthNumberGenerator::new(config);
    let mut rng = rng_from(args.seed);

    let mut reports = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let Some(number) = generator.generate_with_attempts(&mut rng, &args.pattern, attempts)? else {
            bail!("no birth number matching {} found in {} attempts", args.pattern, attempts);
        };
        reports.push(Inspection::of_number(&IdentityNumber::from(number)));
    }
    emit(&reports, format)
}

fn cmd_range(args: RangeArgs, format: OutputFormat, config: GeneratorConfig) -> anyhow::Result<()> {
    let from = args.from.unwrap_or(EARLIEST_DATE);
    let to = args.to.unwrap_or(LATEST_DATE);
    let generator = BirthNumberGenerator::new(config);
    let mut rng = rng_from(args.seed);

    let mut reports = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let number = generator
            .generate_in_range(&mut rng, from, to, args.sex.into())
            .with_context(|| format!("generating birth number between {from} and {to}"))?;
        reports.push(Inspection::of_number(&IdentityNumber::from(number)));
    }
    emit(&reports, format)
}

fn emit(reports: &[Inspection], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                report.print_text();
            }
        }
        OutputFormat::Json => print_json(&reports)?,
    }
    Ok(())
}
