use clap::{Parser, Subcommand, ValueEnum};
use gentadose_core::report::{render_json, render_report};
use gentadose_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gentadose")]
#[command(about = "Gentamicin dose calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log each calculation step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a recommended dose for one patient
    Calc {
        /// Actual body weight in kg
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,

        /// Height in cm
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Age in years
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Sex (male, female)
        #[arg(long)]
        sex: Option<String>,

        /// Serum creatinine in µmol/L
        #[arg(long, allow_hyphen_values = true)]
        creatinine: Option<String>,

        /// Output format (overrides config)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Also write the report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Leave the medical disclaimer out of the text report
        #[arg(long)]
        no_disclaimer: bool,
    },

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    // Logging level comes from config, so a broken config logs at the default
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config
            .as_ref()
            .map(|c| c.logging.level.to_lowercase())
            .unwrap_or_else(|_| "warn".to_string())
    };
    gentadose_core::logging::init_with_level(&level);

    let result = match cli.command {
        // init-config must work even when the current file is unreadable
        Commands::InitConfig { force } => cmd_init_config(cli.config, force),
        Commands::Calc {
            weight,
            height,
            age,
            sex,
            creatinine,
            format,
            output,
            no_disclaimer,
        } => config.and_then(|config| {
            let raw = RawPatientInput {
                weight_kg: weight,
                height_cm: height,
                age_years: age,
                sex,
                creatinine_umol_per_l: creatinine,
            };
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            let include_disclaimer = config.report.include_disclaimer && !no_disclaimer;
            cmd_calc(&raw, format, include_disclaimer, output.as_deref())
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn cmd_calc(
    raw: &RawPatientInput,
    format: OutputFormat,
    include_disclaimer: bool,
    output: Option<&Path>,
) -> Result<()> {
    let (input, result) = calculate_dose_from_raw(raw)?;

    let rendered = match format {
        OutputFormat::Text => render_report(&input, &result, include_disclaimer),
        OutputFormat::Json => render_json(&input, &result)?,
    };

    println!("{}", rendered);

    if let Some(path) = output {
        std::fs::write(path, format!("{}\n", rendered))?;
        tracing::info!("Report written to {:?}", path);
        eprintln!("✓ Report saved to {}", path.display());
    }

    Ok(())
}

fn cmd_init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(Config::default_config_path);

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(&path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
