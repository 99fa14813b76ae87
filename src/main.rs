use green_cover::config::{self, OutputFormat, RuntimeConfig};
use green_cover::estimator::EstimationReport;
use green_cover::image::io::{load_rgb_image, save_mask, write_json_file};
use green_cover::{parse_area, EstimateError, VegetationEstimator};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EstimateError> {
    let mut args = env::args().skip(1);
    let config_path = args
        .next()
        .ok_or_else(|| EstimateError::missing_input(usage()))?;
    let mut config = config::load_config(Path::new(&config_path))?;
    if let Some(area) = args.next() {
        config.area_km2 = Some(parse_area(Some(area.as_str()))?);
    }
    let area_km2 = config
        .area_km2
        .ok_or_else(|| EstimateError::missing_input("area_km2 missing from config and arguments"))?;

    let mut params = config.params.clone();
    params.keep_mask |= config.output.mask_out.is_some();
    let estimator = VegetationEstimator::new(params)?;

    let decoded = load_rgb_image(&config.input_path, config.params.max_pixels)?;
    let report = estimator.process(decoded.image.as_view(), area_km2)?;

    emit(&config, &report)
}

fn emit(config: &RuntimeConfig, report: &EstimationReport) -> Result<(), EstimateError> {
    let format = config.output.format;
    let response = report.result.to_response();

    if format.includes_text() {
        print_text_summary(report);
    }

    if format.includes_json() {
        match &config.output.json_out {
            Some(path) => {
                write_json_file(path, &response)?;
                println!("JSON result written to {}", path.display());
            }
            None => {
                let json = serde_json::to_string_pretty(&response)
                    .map_err(|e| EstimateError::config(format!("failed to serialize JSON: {e}")))?;
                if format == OutputFormat::Both {
                    println!("\nJSON result:\n{json}");
                } else {
                    println!("{json}");
                }
            }
        }
    }

    if let Some(path) = &config.output.report_out {
        write_json_file(path, &report.detailed())?;
        log::info!("detailed report written to {}", path.display());
    }

    if let (Some(path), Some(mask)) = (&config.output.mask_out, &report.mask) {
        save_mask(mask, path)?;
        log::info!("mask written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(report: &EstimationReport) {
    let res = &report.result;
    println!("Estimation summary");
    println!(
        "  image: {}x{} ({} of {} pixels green)",
        report.input.width, report.input.height, report.input.matched_pixels, report.input.total_pixels
    );
    println!("  green_percentage: {:.2}", res.vegetation_percentage);
    println!("  area_km2: {}", res.area_km2);
    println!("  tree_count: {}", res.tree_count);
    println!("  suggestion: {}", res.advisory);
    let stages: Vec<String> = report
        .timing
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "  timings (ms): {} total={:.3}",
        stages.join(" "),
        report.timing.total_ms
    );
}

fn usage() -> String {
    "Usage: green-cover <config.json> [area_km2]".to_string()
}
