//! Command-line interface for skin_tone_scan
//!
//! Analyzes a photo and prints the result as JSON on stdout, with a
//! human-readable summary on stderr. Set `RUST_LOG=skin_tone_scan=debug` to
//! see pipeline logging.

use skin_tone_scan::{
    image_loader::load_image, AnalysisConfig, BeautyAnalysis, FaceLandmarks, PixelBuffer, Region,
    ToneAnalyzer,
};
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut landmarks_path = None;
    let mut checked = false;
    let mut image_path_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--landmarks" if i + 1 >= args.len() => {
                eprintln!("Error: {} needs a file argument", args[i]);
                process::exit(1);
            }
            "--config" => {
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--landmarks" => {
                landmarks_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--checked" => checked = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => AnalysisConfig::from_json_file(Path::new(&path)).unwrap_or_else(|e| fail(e)),
        None => AnalysisConfig::default(),
    };

    let landmarks: Option<FaceLandmarks> = landmarks_path.map(|path| {
        let content = std::fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("Error reading landmarks {}: {}", path, e);
            process::exit(1);
        });
        serde_json::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Error parsing landmarks {}: {}", path, e);
            process::exit(1);
        })
    });

    let analyzer = ToneAnalyzer::from_config(&config).unwrap_or_else(|e| fail(e));
    let image = load_image(Path::new(&image_path_str)).unwrap_or_else(|e| fail(e));
    let buffer = PixelBuffer::from(&image);

    let result = match (&landmarks, checked) {
        (Some(landmarks), true) => analyzer
            .analyze_landmarks_checked(&buffer, landmarks)
            .unwrap_or_else(|e| fail(e)),
        (Some(landmarks), false) => analyzer.analyze_landmarks(&buffer, landmarks),
        (None, true) => {
            let center = Region::center_face(buffer.width(), buffer.height());
            analyzer
                .analyze_checked(&buffer, &[center], None)
                .unwrap_or_else(|e| fail(e))
        }
        (None, false) => analyzer.analyze_center(&buffer),
    };

    print_result(&result);
}

fn fail(error: skin_tone_scan::AnalysisError) -> ! {
    eprintln!("Analysis failed: {}", error);
    if error.is_recoverable() {
        eprintln!("Suggestion: {}", error.user_message());
    }
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Classify skin tone and undertone from a photo.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE      Load analysis parameters from JSON");
    eprintln!("  --landmarks FILE   Face keypoints JSON (leftCheek, rightCheek, noseTip,");
    eprintln!("                     forehead, upperLipTop, lowerLipBottom); default is");
    eprintln!("                     the centered face region");
    eprintln!("  --checked          Fail instead of reporting black when no skin is found");
    eprintln!("  --help, -h         Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} selfie.jpg", program_name);
    eprintln!("  {} --landmarks face.json --checked selfie.jpg", program_name);
}

fn print_result(result: &BeautyAnalysis) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    let hsl = result.skin_tone_rgb.to_hsl();
    eprintln!();
    eprintln!("Skin Analysis Summary:");
    eprintln!("  Skin Tone: {}", result.skin_tone);
    eprintln!("  Undertone: {}", result.undertone);
    eprintln!("  Skin Color: {} ({})", result.skin_tone_rgb.to_hex(), result.skin_tone_rgb);
    eprintln!("  HSL: h={:.0}, s={:.0}%, l={:.0}%", hsl.h, hsl.s, hsl.l);
    eprintln!("  Lip Color: {}", result.lip_color.to_hex());
}
