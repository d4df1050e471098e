#![deny(unsafe_code)]
//! CLI binary for gamut-search.
//!
//! Subcommands:
//! - `search`: find N in-gamut sRGB colors by sampling CIELAB
//! - `swatch`: render a saved color list (e.g. `search --json` output) as PNG
//! - `defaults`: print the default search configuration

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use gamut_search_core::{find_in_gamut_colors, SearchConfig, SearchOutcome, Srgb, Xorshift64};
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

/// Side length in pixels of one swatch cell.
const SWATCH_CELL: usize = 32;

#[derive(Parser)]
#[command(
    name = "gamut-search",
    about = "Find displayable sRGB colors by rejection sampling CIELAB"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search for in-gamut colors.
    Search(SearchArgs),
    /// Render hex colors from a JSON file as a PNG strip.
    ///
    /// Accepts `search --json` output or a bare array of "#rrggbb" strings.
    Swatch {
        /// JSON file holding the colors.
        input: PathBuf,

        /// Output PNG path.
        #[arg(short, long, default_value = "swatch.png")]
        output: PathBuf,
    },
    /// Print the default search configuration.
    Defaults,
}

#[derive(Args, Default)]
struct SearchArgs {
    /// Number of colors to find.
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// PRNG seed. Taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Lower bound of the L* sampling range.
    #[arg(long, allow_negative_numbers = true)]
    l_min: Option<f64>,

    /// Upper bound of the L* sampling range.
    #[arg(long, allow_negative_numbers = true)]
    l_max: Option<f64>,

    /// Lower bound of the a*/b* sampling range.
    #[arg(long, allow_negative_numbers = true)]
    ab_min: Option<f64>,

    /// Upper bound of the a*/b* sampling range.
    #[arg(long, allow_negative_numbers = true)]
    ab_max: Option<f64>,

    /// Give up after this many attempts.
    #[arg(long)]
    max_attempts: Option<u64>,

    /// JSON file with a search configuration; flags override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a PNG strip of the found colors.
    #[arg(long)]
    swatch: Option<PathBuf>,
}

/// Builds the configuration from an optional base and flag overrides.
fn resolve_config(args: &SearchArgs, base: Option<SearchConfig>) -> SearchConfig {
    let mut config = base.unwrap_or_default();
    if let Some(count) = args.count {
        config.count = count;
    }
    if let Some(v) = args.l_min {
        config.lightness.min = v;
    }
    if let Some(v) = args.l_max {
        config.lightness.max = v;
    }
    if let Some(v) = args.ab_min {
        config.chroma.min = v;
    }
    if let Some(v) = args.ab_max {
        config.chroma.max = v;
    }
    if args.max_attempts.is_some() {
        config.max_attempts = args.max_attempts;
    }
    config
}

fn load_config(path: &Path) -> Result<SearchConfig, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    SearchConfig::from_json(&text).map_err(|e| CliError::Input(e.to_string()))
}

/// Reads hex colors from `search --json` output or a bare JSON array.
fn parse_colors(text: &str) -> Result<Vec<Srgb>, CliError> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| CliError::Input(format!("invalid color list JSON: {e}")))?;
    let list = value.get("colors").unwrap_or(&value);
    let hexes: Vec<String> = serde_json::from_value(list.clone())
        .map_err(|e| CliError::Input(format!("expected an array of hex colors: {e}")))?;
    let colors = hexes
        .iter()
        .map(|h| Srgb::from_hex(h))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(colors)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn render_text(outcome: &SearchOutcome) -> String {
    let mut out = String::new();
    for (i, c) in outcome.colors.iter().enumerate() {
        let [r, g, b] = c.to_rgb8();
        out.push_str(&format!("Found color {}: sRGB({r}, {g}, {b})\n", i + 1));
    }
    out.push_str(&format!(
        "\nFinished! It took {} attempts to find {} valid colors.\n",
        outcome.attempts,
        outcome.colors.len()
    ));
    out
}

fn render_json(seed: u64, config: &SearchConfig, outcome: &SearchOutcome) -> serde_json::Value {
    let rgb8: Vec<[u8; 3]> = outcome.colors.iter().map(|c| c.to_rgb8()).collect();
    serde_json::json!({
        "seed": seed,
        "config": config,
        "colors": outcome.colors,
        "rgb8": rgb8,
        "attempts": outcome.attempts,
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Defaults => {
            let config = SearchConfig::default();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("count:        {}", config.count);
                println!(
                    "lightness:    [{}, {}]",
                    config.lightness.min, config.lightness.max
                );
                println!("chroma (a,b): [{}, {}]", config.chroma.min, config.chroma.max);
                println!("max_attempts: unbounded");
            }
        }
        Command::Swatch { input, output } => {
            let text = std::fs::read_to_string(&input)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", input.display())))?;
            let colors = parse_colors(&text)?;
            gamut_search_swatch::png::write_png(&colors, SWATCH_CELL, &output)?;
            if cli.json {
                let info = serde_json::json!({
                    "colors": colors.len(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!("wrote {} colors -> {}", colors.len(), output.display());
            }
        }
        Command::Search(args) => {
            let base = args.config.as_deref().map(load_config).transpose()?;
            let config = resolve_config(&args, base);
            let seed = args.seed.unwrap_or_else(clock_seed);
            log::info!("searching with seed {seed}: {config:?}");

            if !cli.json {
                println!(
                    "Searching for {} in-gamut colors by sampling LAB space (seed {seed})...\n",
                    config.count
                );
            }

            let outcome = find_in_gamut_colors(config.clone(), Xorshift64::new(seed))?;

            if let Some(path) = &args.swatch {
                gamut_search_swatch::png::write_png(&outcome.colors, SWATCH_CELL, path)?;
            }

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&render_json(seed, &config, &outcome))?
                );
            } else {
                print!("{}", render_text(&outcome));
                if let Some(path) = &args.swatch {
                    eprintln!("wrote swatch -> {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamut_search_core::SampleRange;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_search_flags_including_negative_bounds() {
        let cli = Cli::try_parse_from([
            "gamut-search",
            "--json",
            "search",
            "-n",
            "4",
            "--seed",
            "9",
            "--ab-min",
            "-64",
            "--ab-max",
            "63",
            "--max-attempts",
            "1000",
        ])
        .unwrap();
        assert!(cli.json);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        let config = resolve_config(&args, None);
        assert_eq!(config.count, 4);
        assert_eq!(config.chroma, SampleRange::new(-64.0, 63.0));
        assert_eq!(config.lightness, SearchConfig::DEFAULT_LIGHTNESS);
        assert_eq!(config.max_attempts, Some(1000));
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn flags_override_config_file_fields() {
        let base = SearchConfig {
            count: 3,
            lightness: SampleRange::new(10.0, 20.0),
            chroma: SampleRange::new(-5.0, 5.0),
            max_attempts: Some(50),
        };
        let args = SearchArgs {
            l_max: Some(90.0),
            ..SearchArgs::default()
        };
        let config = resolve_config(&args, Some(base));
        assert_eq!(config.count, 3);
        assert_eq!(config.lightness, SampleRange::new(10.0, 90.0));
        assert_eq!(config.max_attempts, Some(50));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/gamut-search.json")).unwrap_err();
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn text_output_lists_floor_quantized_colors_and_attempts() {
        let outcome = SearchOutcome {
            colors: vec![
                Srgb {
                    r: 0.999,
                    g: 0.5,
                    b: 0.0,
                },
                Srgb {
                    r: 1.0,
                    g: 1.0,
                    b: 1.0,
                },
            ],
            attempts: 17,
        };
        let text = render_text(&outcome);
        assert!(text.contains("Found color 1: sRGB(254, 127, 0)"), "{text}");
        assert!(text.contains("Found color 2: sRGB(255, 255, 255)"), "{text}");
        assert!(
            text.contains("It took 17 attempts to find 2 valid colors."),
            "{text}"
        );
    }

    #[test]
    fn json_output_has_expected_keys() {
        let config = SearchConfig::with_count(2);
        let outcome = find_in_gamut_colors(config.clone(), Xorshift64::new(3)).unwrap();
        let v = render_json(3, &config, &outcome);
        assert_eq!(v["seed"], 3);
        assert_eq!(v["colors"].as_array().unwrap().len(), 2);
        assert_eq!(v["rgb8"].as_array().unwrap().len(), 2);
        assert_eq!(v["attempts"], outcome.attempts);
        assert_eq!(v["config"]["count"], 2);
    }

    #[test]
    fn parse_colors_reads_search_json_output() {
        let config = SearchConfig::with_count(3);
        let outcome = find_in_gamut_colors(config.clone(), Xorshift64::new(8)).unwrap();
        let text = serde_json::to_string(&render_json(8, &config, &outcome)).unwrap();
        let colors = parse_colors(&text).unwrap();
        assert_eq!(colors.len(), 3);
        for (parsed, found) in colors.iter().zip(&outcome.colors) {
            assert_eq!(parsed.to_hex(), found.to_hex());
        }
    }

    #[test]
    fn parse_colors_reads_bare_array() {
        let colors = parse_colors(r##"["#ff0000", "00ff00"]"##).unwrap();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].to_rgb8(), [255, 0, 0]);
        assert_eq!(colors[1].to_rgb8(), [0, 255, 0]);
    }

    #[test]
    fn parse_colors_rejects_bad_hex_as_input_error() {
        let err = parse_colors(r##"{"colors": ["#ff0000", "#zzzzzz"]}"##).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("invalid"), "{err}");
    }

    #[test]
    fn parse_colors_rejects_non_array() {
        let err = parse_colors(r#"{"colors": 5}"#).unwrap_err();
        assert_eq!(err.exit_code(), 12);
        let err = parse_colors("not json").unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn parses_swatch_subcommand() {
        let cli = Cli::try_parse_from(["gamut-search", "swatch", "found.json", "-o", "out.png"])
            .unwrap();
        let Command::Swatch { input, output } = cli.command else {
            panic!("expected swatch");
        };
        assert_eq!(input, PathBuf::from("found.json"));
        assert_eq!(output, PathBuf::from("out.png"));
    }
}
