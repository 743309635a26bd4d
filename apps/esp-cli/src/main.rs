use clap::{Parser, Subcommand};
use esp_app::{
    AppResult, OpenedCase, chart_csv, curve_table, design_json, design_report, live_report,
    open_case,
};
use esp_core::ensure_finite;
use esp_design::DesignResult;
use esp_monitor::SensorReading;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "esp-cli")]
#[command(about = "espflow CLI - ESP design and live performance monitoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and required design fields
    Validate {
        /// Path to the case YAML file
        case_path: PathBuf,
    },
    /// Run the pump design and print every derived quantity
    Design {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Also write the design result as JSON to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Run the design, then evaluate live sensor readings against it
    Monitor {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Pump intake pressure (psi)
        #[arg(long, requires_all = ["pdp", "gradient"])]
        pip: Option<f64>,
        /// Pump discharge pressure (psi)
        #[arg(long, requires_all = ["pip", "gradient"])]
        pdp: Option<f64>,
        /// Tubing fluid gradient (psi/ft)
        #[arg(long, requires_all = ["pip", "pdp"])]
        gradient: Option<f64>,
        /// Running stages for readings that do not give one (defaults to the design count)
        #[arg(long)]
        stages: Option<u32>,
    },
    /// Export performance chart samples as CSV
    Chart {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Stage count to scale the pump curve by (defaults to the design count)
        #[arg(long)]
        stages: Option<u32>,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Look up single-stage head at the given flows
    Curve {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Flow rates (bpd)
        #[arg(required = true)]
        flows: Vec<f64>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Design { case_path, json } => cmd_design(&case_path, json.as_deref()),
        Commands::Monitor {
            case_path,
            pip,
            pdp,
            gradient,
            stages,
        } => {
            let manual = match (pip, pdp, gradient) {
                (Some(pip), Some(pdp), Some(gradient)) => Some((pip, pdp, gradient)),
                _ => None,
            };
            cmd_monitor(&case_path, manual, stages)
        }
        Commands::Chart {
            case_path,
            stages,
            output,
        } => cmd_chart(&case_path, stages, output.as_deref()),
        Commands::Curve { case_path, flows } => cmd_curve(&case_path, &flows),
    }
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let opened = open_case(case_path)?;
    let case = &opened.case;
    println!("✓ Case is valid");
    println!("  Well: {}", case.well.name);
    if let Some(model) = &case.well.pump_model {
        println!("  Pump model: {}", model);
    }
    println!(
        "  Pump curve: {} points",
        opened.session.curve().dataset().len()
    );
    println!("  Sensor readings: {}", case.sensor_readings.len());
    Ok(())
}

fn run_design(case_path: &Path) -> AppResult<(OpenedCase, DesignResult)> {
    let mut opened = open_case(case_path)?;
    let design = opened.session.compute_design(&opened.input)?.clone();
    Ok((opened, design))
}

fn cmd_design(case_path: &Path, json: Option<&Path>) -> AppResult<()> {
    let (opened, design) = run_design(case_path)?;
    println!("Well {}", opened.session.name());
    print!("{}", design_report(&design));

    if let Some(path) = json {
        std::fs::write(path, design_json(&design)?)?;
        println!("\n✓ Wrote design result to {}", path.display());
    }
    Ok(())
}

fn cmd_monitor(
    case_path: &Path,
    manual: Option<(f64, f64, f64)>,
    stages: Option<u32>,
) -> AppResult<()> {
    let (mut opened, design) = run_design(case_path)?;
    println!(
        "Design: {} stages, TDH {:.1} ft",
        design.stage_count, design.tdh
    );

    let readings = match manual {
        Some((pip, pdp, gradient)) => vec![SensorReading::new(
            pip,
            pdp,
            gradient,
            stages.unwrap_or(design.stage_count),
        )],
        None => opened.readings(stages.unwrap_or(design.stage_count)),
    };

    if readings.is_empty() {
        println!("No sensor readings in case; pass --pip, --pdp and --gradient");
        return Ok(());
    }

    for (i, reading) in readings.iter().enumerate() {
        println!("\nReading {}:", i + 1);
        let update = opened.session.update_live(reading)?;
        print!("{}", live_report(update));
    }
    Ok(())
}

fn cmd_chart(case_path: &Path, stages: Option<u32>, output: Option<&Path>) -> AppResult<()> {
    let (opened, _design) = run_design(case_path)?;
    let chart = opened.session.performance_chart(stages)?;
    let csv = chart_csv(&chart);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} chart samples at {} stages to {}",
            chart.flows.len(),
            chart.stages,
            path.display()
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_curve(case_path: &Path, flows: &[f64]) -> AppResult<()> {
    for &q in flows {
        ensure_finite(q, "flow")?;
    }
    let opened = open_case(case_path)?;
    print!("{}", curve_table(opened.session.curve(), flows));
    Ok(())
}
