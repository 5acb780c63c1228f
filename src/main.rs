use color_segmenter::image::io::{load_rgb_image, save_label_image, write_json_file};
use color_segmenter::labels::format_region_report;
use color_segmenter::smooth::SmoothingOptions;
use color_segmenter::{ColorSegmenter, SegmenterParams};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "color-segmenter".to_string());
    let config = parse_args(&program)?;

    let image = load_rgb_image(&config.input)?;
    let view = image.as_view();

    let mut params = SegmenterParams {
        k: config.k,
        ..Default::default()
    };
    if config.no_smoothing {
        params.smoothing = None;
    } else {
        let mut smoothing = SmoothingOptions::default();
        if let Some(mask_size) = config.mask_size {
            smoothing.mask_size = mask_size;
        }
        if let Some(sigma) = config.sigma {
            smoothing.sigma = sigma;
        }
        params.smoothing = Some(smoothing);
    }

    let segmenter = ColorSegmenter::new(params);
    let detailed = segmenter.process_with_diagnostics(view);

    let report = format_region_report(&detailed.result.labels);
    match &config.report_out {
        Some(path) => {
            fs::write(path, &report)
                .map_err(|e| format!("Failed to write report to {}: {e}", path.display()))?;
            println!(
                "{} regions; report written to {}",
                detailed.result.region_count,
                path.display()
            );
        }
        None => print!("{report}"),
    }

    if let Some(path) = &config.json_out {
        write_json_file(path, &detailed)?;
        eprintln!("Diagnostics written to {}", path.display());
    }

    if let Some(path) = &config.labels_png {
        save_label_image(
            &detailed.result.labels,
            detailed.result.width,
            detailed.result.height,
            path,
        )?;
        eprintln!("Label rendering written to {}", path.display());
    }

    Ok(())
}

struct CliConfig {
    input: PathBuf,
    k: f32,
    no_smoothing: bool,
    mask_size: Option<usize>,
    sigma: Option<f32>,
    report_out: Option<PathBuf>,
    json_out: Option<PathBuf>,
    labels_png: Option<PathBuf>,
}

fn parse_args(program: &str) -> Result<CliConfig, String> {
    let mut input = None;
    let mut k = 300.0f32;
    let mut no_smoothing = false;
    let mut mask_size = None;
    let mut sigma = None;
    let mut report_out = None;
    let mut json_out = None;
    let mut labels_png = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--k" => {
                let value = next_value(&mut args, "--k")?;
                k = value
                    .parse()
                    .map_err(|_| format!("Invalid value for --k: {value}"))?;
            }
            "--no-smoothing" => no_smoothing = true,
            "--mask-size" => {
                let value = next_value(&mut args, "--mask-size")?;
                mask_size = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid value for --mask-size: {value}"))?,
                );
            }
            "--sigma" => {
                let value = next_value(&mut args, "--sigma")?;
                sigma = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid value for --sigma: {value}"))?,
                );
            }
            "--report" => report_out = Some(PathBuf::from(next_value(&mut args, "--report")?)),
            "--json" => json_out = Some(PathBuf::from(next_value(&mut args, "--json")?)),
            "--labels-png" => {
                labels_png = Some(PathBuf::from(next_value(&mut args, "--labels-png")?))
            }
            "--help" | "-h" => return Err(usage(program)),
            other if other.starts_with('-') => {
                return Err(format!("Unknown option {other}\n\n{}", usage(program)))
            }
            other => {
                if input.replace(PathBuf::from(other)).is_some() {
                    return Err(format!("More than one input image\n\n{}", usage(program)));
                }
            }
        }
    }

    if k < 0.0 || !k.is_finite() {
        return Err(format!("--k must be finite and non-negative, got {k}"));
    }
    if let Some(mask_size) = mask_size {
        if mask_size < 3 || mask_size % 2 == 0 {
            return Err(format!("--mask-size must be an odd integer >= 3, got {mask_size}"));
        }
    }
    if let Some(sigma) = sigma {
        if sigma <= 0.0 {
            return Err(format!("--sigma must be positive, got {sigma}"));
        }
    }

    Ok(CliConfig {
        input: input.ok_or_else(|| usage(program))?,
        k,
        no_smoothing,
        mask_size,
        sigma,
        report_out,
        json_out,
        labels_png,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{flag} expects a value"))
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <image> [options]\n\
         \n\
         Segments the image and prints the region-size report (first line:\n\
         region count; then one pixel count per line, largest first).\n\
         \n\
         Options:\n\
         \x20 --k <value>          region-scale parameter (default 300)\n\
         \x20 --no-smoothing       segment raw pixels, skip the Gaussian pre-filter\n\
         \x20 --mask-size <n>      Gaussian mask size, odd >= 3 (default 5)\n\
         \x20 --sigma <s>          Gaussian sigma, positive (default 0.8)\n\
         \x20 --report <path>      write the report to a file instead of stdout\n\
         \x20 --json <path>        write pretty-JSON diagnostics\n\
         \x20 --labels-png <path>  write a colourised label rendering"
    )
}
