use clap::error::ErrorKind;
use clap::Parser;
use dcp_dehaze::config::{self, CliArgs};
use dcp_dehaze::diagnostics::DehazeReport;
use dcp_dehaze::image::io::{load_rgb_image, save_grayscale_f32, save_rgb_image, write_json_file};
use dcp_dehaze::{DehazeError, Dehazer, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match CliArgs::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => return Err(DehazeError::Config(err.to_string().trim_end().to_string())),
    };
    let config = config::resolve(&cli)?;

    let input = match &config.input {
        Some(path) => path.clone(),
        None => prompt_for_input()?,
    };

    let dehazer = Dehazer::new(config.params.clone())?;
    let hazy = load_rgb_image(&input)?;
    let report = dehazer.process_with_diagnostics(hazy.as_view())?;

    let output = config.output_path(&input);
    save_rgb_image(report.output.as_view(), &output)?;
    print_text_summary(&input, &output, &report);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }
    if let Some(dir) = &config.output.debug_dir {
        save_debug_artifacts(dir, &report)?;
        println!("Debug artifacts written to {}", dir.display());
    }
    Ok(())
}

fn prompt_for_input() -> Result<PathBuf> {
    print!("Enter the path of the hazy image: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(DehazeError::Config("no input image given".to_string()));
    }
    Ok(PathBuf::from(trimmed))
}

fn save_debug_artifacts(dir: &Path, report: &DehazeReport) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    save_grayscale_f32(&report.dark_channel, 1.0, &dir.join("dark_channel.png"))?;
    save_grayscale_f32(&report.transmission, 255.0, &dir.join("transmission.png"))?;
    write_json_file(&dir.join("trace.json"), &report.trace)?;
    Ok(())
}

fn print_text_summary(input: &Path, output: &Path, report: &DehazeReport) {
    let trace = &report.trace;
    let light = trace.atmospheric_light.components();
    println!("Dehazing summary");
    println!("  input: {} ({}x{})", input.display(), trace.input.width, trace.input.height);
    println!("  output: {}", output.display());
    println!(
        "  params: window={} omega={:.3} t0={:.3} top_fraction={:.4} atmosphere={:?}",
        trace.params.window_size,
        trace.params.omega,
        trace.params.t0,
        trace.params.top_fraction,
        trace.params.atmosphere
    );
    println!(
        "  atmospheric_light: [{:.1}, {:.1}, {:.1}] from {} pixel(s)",
        light[0], light[1], light[2], trace.light_candidates
    );
    println!(
        "  dark_channel: min={:.1} max={:.1} mean={:.2}",
        trace.dark_channel.min, trace.dark_channel.max, trace.dark_channel.mean
    );
    println!(
        "  transmission: min={:.3} max={:.3} mean={:.3} floored={} ({:.1}%)",
        trace.transmission.min,
        trace.transmission.max,
        trace.transmission.mean,
        trace.floored_pixels,
        trace.floored_fraction() * 100.0
    );
    let stages: Vec<String> = trace
        .timings
        .stages
        .iter()
        .map(|s| format!("{}={:.3}", s.label, s.elapsed_ms))
        .collect();
    println!(
        "\nTimings (ms): {} total={:.3}",
        stages.join(" "),
        trace.timings.total_ms
    );
}
