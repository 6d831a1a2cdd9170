//! Write an analysis configuration file
//!
//! Starts from the defaults, applies optional overrides, validates the
//! result and saves it as pretty JSON for `cli --config`.

use skin_tone_scan::{analysis::DominantStrategy, AnalysisConfig};
use std::{env, path::PathBuf, process};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <output.json> [--seed N] [--k N] [--strategy NAME]", program);
    eprintln!();
    eprintln!("Strategies: second_brightest (default), brightest, median_luminance");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} config/analysis.json --seed 42", program);
    process::exit(1);
}

fn parse_strategy(name: &str) -> Option<DominantStrategy> {
    match name {
        "second_brightest" => Some(DominantStrategy::SecondBrightest),
        "brightest" => Some(DominantStrategy::Brightest),
        "median_luminance" => Some(DominantStrategy::MedianLuminance),
        _ => None,
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];

    let mut output: Option<PathBuf> = None;
    let mut config = AnalysisConfig::default();

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        let mut value = || rest.next().cloned().unwrap_or_else(|| usage(program));
        match arg.as_str() {
            "--seed" => match value().parse() {
                Ok(seed) => config.clustering.seed = Some(seed),
                Err(_) => usage(program),
            },
            "--k" => match value().parse() {
                Ok(k) => config.clustering.k = k,
                Err(_) => usage(program),
            },
            "--strategy" => match parse_strategy(&value()) {
                Some(strategy) => config.selection = strategy,
                None => usage(program),
            },
            path if output.is_none() && !path.starts_with("--") => output = Some(PathBuf::from(path)),
            _ => usage(program),
        }
    }

    let Some(output) = output else { usage(program) };

    if let Err(e) = config.validate() {
        eprintln!("Refusing to write invalid configuration: {}", e);
        process::exit(1);
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating {}: {}", parent.display(), e);
            process::exit(1);
        }
    }

    if let Err(e) = config.to_json_file(&output) {
        eprintln!("Error saving config: {}", e);
        process::exit(1);
    }

    eprintln!("Wrote {}", output.display());
    eprintln!(
        "  k = {}, {} iterations, seed {}, selection {:?}",
        config.clustering.k,
        config.clustering.max_iterations,
        config
            .clustering
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string()),
        config.selection
    );
}
