use std::fs;
use std::path::PathBuf;

use attendance_charts::api::{ChartDashboard, DashboardConfig};
use attendance_charts::core::Viewport;
use attendance_charts::host::{Surface, SurfaceMap};
use attendance_charts::render::{HeadlessEngine, RenderRequest};
use serde::Serialize;

const USAGE: &str = "usage: dashboard_pass_dump [--config <path>] [--width <px>] [--height <px>] [--output <path>]";

struct CliArgs {
    config: Option<PathBuf>,
    viewport: Viewport,
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PassDump {
    pass: u64,
    rendered: Vec<String>,
    skipped: Vec<String>,
    failures: Vec<FailureDump>,
    requests: Vec<RenderRequest>,
}

#[derive(Debug, Serialize)]
struct FailureDump {
    definition_id: String,
    error: String,
}

fn main() {
    let _ = attendance_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            DashboardConfig::from_json_compat_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::attendance().map_err(|err| err.to_string())?,
    };

    let mut surfaces = SurfaceMap::new();
    for definition in &config.catalog {
        surfaces.insert(Surface::new(definition.surface_id.clone(), args.viewport));
    }

    let engine = HeadlessEngine::new();
    let mut dashboard = ChartDashboard::new(config, engine, surfaces).map_err(|err| err.to_string())?;
    let report = dashboard.initialize_all_charts();

    let requests = report
        .rendered
        .iter()
        .filter_map(|definition_id| dashboard.engine().last_request(definition_id))
        .collect();
    let dump = PassDump {
        pass: report.pass,
        rendered: report.rendered,
        skipped: report.skipped,
        failures: report
            .failures
            .into_iter()
            .map(|failure| FailureDump {
                definition_id: failure.definition_id,
                error: failure.error.to_string(),
            })
            .collect(),
        requests,
    };

    let payload = serde_json::to_string_pretty(&dump)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut viewport = Viewport::new(600, 300);

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--width" => viewport.width = parse_dimension("--width", args.next())?,
            "--height" => viewport.height = parse_dimension("--height", args.next())?,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        config,
        viewport,
        output,
    })
}
