use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use nursepro_calc::{
    calculate, calculate_str, drug_references, CalculationReport, CalculationRequest,
};
use nursepro_core::{CalculatorConfig, Drug};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "nursepro-cli",
    about = "Clinical calculators: syringe-pump dose rate, IV drip rate and BMI."
)]
struct Args {
    /// JSON file overriding display settings (dose_decimals, bmi_decimals,
    /// drip_window_seconds).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the full report as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pump rate (ml/h) or dose volume (ml) for an ordered dose.
    Dose {
        /// Drug id, e.g. dobutamine or norepinephrine. Unknown ids use the
        /// generic dose-to-volume conversion.
        #[arg(short, long, default_value = "generic")]
        drug: String,
        /// Ordered dose in the drug's unit.
        #[arg(long)]
        ordered: f64,
        /// Drug content of the preparation (mg or Units). Defaults to the
        /// drug's standard preparation.
        #[arg(long)]
        stock: Option<f64>,
        /// Diluent volume in ml. Defaults to the drug's standard syringe.
        #[arg(long)]
        diluent: Option<f64>,
        /// Patient weight in kg, required for mcg/kg/min drugs.
        #[arg(short, long)]
        weight: Option<f64>,
    },
    /// Drops per minute for a manual infusion.
    Drip {
        /// Total volume in ml.
        #[arg(long)]
        volume: f64,
        /// Duration in hours.
        #[arg(long)]
        hours: f64,
        /// Giving-set drop factor: 15, 20 or 60 gtt/ml.
        #[arg(long, default_value_t = 20)]
        factor: u32,
    },
    /// Body-mass index with WHO Asia category.
    Bmi {
        /// Weight in kg.
        #[arg(long)]
        weight: f64,
        /// Height in cm.
        #[arg(long)]
        height: f64,
    },
    /// List supported drugs with their standard preparation.
    Drugs,
    /// Run a calculation request stored as JSON.
    Request {
        /// Path to the JSON request.
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => CalculatorConfig::default(),
    };

    let report = match args.command {
        Command::Drugs => {
            print_drugs(args.json)?;
            return Ok(());
        }
        Command::Request { input } => {
            let data = std::fs::read_to_string(&input)
                .with_context(|| format!("cannot read request file {input:?}"))?;
            calculate_str(&data, &config)?
        }
        Command::Dose {
            drug,
            ordered,
            stock,
            diluent,
            weight,
        } => {
            let drug = Drug::from_id(&drug);
            let defaults = drug.defaults();
            let request = CalculationRequest::Dose {
                drug,
                ordered_dose: Some(ordered),
                stock_amount: stock.or(defaults.map(|d| d.stock_amount)),
                diluent_volume: diluent.or(defaults.map(|d| d.diluent_volume)),
                patient_weight: weight,
            };
            calculate(&request, &config)?
        }
        Command::Drip {
            volume,
            hours,
            factor,
        } => calculate(
            &CalculationRequest::Drip {
                total_volume: Some(volume),
                duration_hours: Some(hours),
                drop_factor: Some(factor),
            },
            &config,
        )?,
        Command::Bmi { weight, height } => calculate(
            &CalculationRequest::Bmi {
                weight_kg: Some(weight),
                height_cm: Some(height),
            },
            &config,
        )?,
    };

    print_report(&report, args.json)
}

fn load_config(path: &Path) -> anyhow::Result<CalculatorConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {path:?}"))?;
    let config: CalculatorConfig =
        serde_json::from_str(&data).with_context(|| format!("invalid config file {path:?}"))?;
    tracing::debug!(?config, "loaded calculator config");
    Ok(config)
}

fn print_report(report: &CalculationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Result: {}", report.display);
    if let Some(detail) = &report.detail {
        println!("Detail: {detail}");
    }
    if report.calculator != nursepro_calc::CalculatorKind::Bmi {
        println!("Double-check the result with a colleague before administration.");
    }
    Ok(())
}

fn print_drugs(json: bool) -> anyhow::Result<()> {
    let drugs = drug_references();
    if json {
        println!("{}", serde_json::to_string_pretty(&drugs)?);
        return Ok(());
    }

    for drug in drugs {
        let preparation = drug.preparation.unwrap_or("-");
        println!("{:<15} {:<12} {}", drug.id, drug.dose_unit, preparation);
    }
    Ok(())
}
