use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{Parser, ValueEnum};
use storeshot_config::{Config, load_or_init};
use storeshot_output::{
    OutputError, WriteOptions, render_marketing_table, render_mockup_table, write_records,
};
use storeshot_prompt::catalog::find_device_preset;
use storeshot_prompt::styles::find_style;
use storeshot_prompt::{
    AspectRatio, CUSTOM_DEVICE_KEY, DEFAULT_COUNT, MockupRequest, PlatformChoice, PromptRequest,
    device_keys, generate_prompts, generate_screen_mockup_prompts, story_arc_keys, style_keys,
};
use storeshot_utils::{non_empty_items, trimmed_or_none};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Final store screenshots with device framing and headlines.
    Marketing,
    /// Raw full-screen app UI, used as input for marketing screenshots.
    Mockup,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marketing => f.write_str("marketing"),
            Self::Mockup => f.write_str("mockup"),
        }
    }
}

/// storeshot CLI entry point.
///
/// storeshot assembles prompts for image-generation models that render app
/// store screenshots, and writes them to a JSON file for the next step.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "storeshot",
    author,
    version,
    about = "Generate app store screenshot prompts for image-generation models.",
    long_about = None
)]
struct Cli {
    /// Generation mode.
    #[arg(long, value_enum, default_value_t = Mode::Marketing)]
    mode: Mode,
    /// App name.
    #[arg(long, value_name = "NAME")]
    name: String,
    /// App category, e.g. Health or Finance.
    #[arg(long, value_name = "CATEGORY")]
    category: String,
    /// Unique selling proposition.
    #[arg(long, value_name = "USP")]
    usp: String,
    /// Number of screenshots (default: number of --screenshots, or the configured count).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,
    /// Visual style (marketing mode).
    #[arg(long, value_name = "STYLE", value_parser = PossibleValuesParser::new(style_keys()))]
    style: Option<String>,
    /// Existing app screenshots, mapped to images in order (marketing mode).
    #[arg(long, value_name = "PATH", num_args = 1..)]
    screenshots: Vec<String>,
    /// Screen descriptions for mockup mode; padded from the category's suggestions.
    #[arg(long = "screen-descriptions", value_name = "TEXT", num_args = 1..)]
    screen_descriptions: Vec<String>,
    /// Headline per screenshot, in order (marketing mode).
    #[arg(long, value_name = "TEXT", num_args = 1..)]
    headlines: Vec<String>,
    /// Aspect ratio of the generated images.
    #[arg(
        long = "aspect-ratio",
        value_name = "RATIO",
        default_value = "9:16",
        value_parser = PossibleValuesParser::new(["9:16", "16:9"])
            .try_map(|value| value.parse::<AspectRatio>())
    )]
    aspect_ratio: AspectRatio,
    /// Story arc (marketing mode; default: hero, features, call to action).
    #[arg(long = "story-arc", value_name = "ARC", value_parser = PossibleValuesParser::new(story_arc_keys()))]
    story_arc: Option<String>,
    /// Device frame to render.
    #[arg(
        long,
        value_name = "DEVICE",
        value_parser = PossibleValuesParser::new(device_keys().chain([CUSTOM_DEVICE_KEY]))
    )]
    device: Option<String>,
    /// Device name used with `--device custom`.
    #[arg(long = "custom-device-name", value_name = "NAME")]
    custom_device_name: Option<String>,
    /// Brand color palette, e.g. "Navy Blue, Warm Cream, Gold".
    #[arg(long = "app-colors", value_name = "COLORS")]
    app_colors: Option<String>,
    /// Target store; `auto` detects it from the device.
    #[arg(
        long,
        value_name = "PLATFORM",
        value_parser = PossibleValuesParser::new(["auto", "play_store", "app_store"])
            .try_map(|value| value.parse::<PlatformChoice>())
    )]
    platform: Option<PlatformChoice>,
    /// Directory that receives the prompts file.
    #[arg(long = "output-dir", value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Log resolution decisions to stderr.
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let context = run(cli);

    for message in &context.infos {
        eprintln!("{message}");
    }

    for warning in &context.warnings {
        eprintln!("{warning}");
    }

    match &context.outcome {
        Ok(path) => {
            println!();
            println!(
                "Generated {} {} prompts → {}",
                context.record_count,
                context.mode,
                path.display()
            );
            println!();
            println!("{}", context.table);
            println!();
            ExitCode::SUCCESS
        }
        Err(why) => {
            error!(error = %why, "failed to write prompts");
            eprintln!("Error: {why}.");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug)]
struct RunContext {
    mode: Mode,
    infos: Vec<String>,
    warnings: Vec<String>,
    record_count: usize,
    table: String,
    outcome: Result<PathBuf, OutputError>,
}

fn run(cli: Cli) -> RunContext {
    let mut infos = Vec::new();
    let mut warnings = Vec::new();

    let config = match load_or_init() {
        Ok(outcome) => {
            if outcome.created {
                infos.push(format!(
                    "Created storeshot configuration at {}",
                    outcome.path.display()
                ));
            } else if outcome.backfilled {
                infos.push(format!(
                    "Updated storeshot configuration at {}",
                    outcome.path.display()
                ));
            }
            outcome.config
        }
        Err(error) => {
            warnings.push(format!(
                "Warning: failed to load storeshot configuration ({error}). Falling back to defaults."
            ));
            Config::default()
        }
    };

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let default_count = configured_count(&config, &mut warnings);

    let (record_count, table, outcome) = match cli.mode {
        Mode::Marketing => {
            let request = marketing_request(&cli, &config, default_count, &mut warnings);
            let generation = generate_prompts(&request);
            warnings.extend(generation.warnings.iter().map(ToString::to_string));

            let outcome = write_records(&generation.records, WriteOptions::prompts(&output_dir));
            (
                generation.records.len(),
                render_marketing_table(&generation.records),
                outcome,
            )
        }
        Mode::Mockup => {
            let request = mockup_request(&cli, &config, default_count);
            let records = generate_screen_mockup_prompts(&request);

            let outcome = write_records(&records, WriteOptions::mockups(&output_dir));
            (records.len(), render_mockup_table(&records), outcome)
        }
    };

    debug!(mode = %cli.mode, records = record_count, "generation finished");

    RunContext {
        mode: cli.mode,
        infos,
        warnings,
        record_count,
        table,
        outcome,
    }
}

/// Configured count, replaced by the built-in one when it is zero.
fn configured_count(config: &Config, warnings: &mut Vec<String>) -> usize {
    if config.default_count == 0 {
        warnings.push(format!(
            "Warning: default_count = 0 in configuration; using {DEFAULT_COUNT} instead."
        ));
        DEFAULT_COUNT
    } else {
        config.default_count
    }
}

fn marketing_request(
    cli: &Cli,
    config: &Config,
    default_count: usize,
    warnings: &mut Vec<String>,
) -> PromptRequest {
    let screenshots = non_empty_items(&cli.screenshots);
    let style_mode = cli
        .style
        .clone()
        .unwrap_or_else(|| config.default_style.clone());
    let device = cli
        .device
        .clone()
        .unwrap_or_else(|| config.default_device.clone());

    if find_style(&style_mode).is_none() {
        warnings.push(format!(
            "Warning: unknown style '{style_mode}' in configuration; using the default style."
        ));
    }
    if device != CUSTOM_DEVICE_KEY && find_device_preset(&device).is_none() {
        warnings.push(format!(
            "Warning: unknown device '{device}' in configuration; using the default device."
        ));
    }

    let custom_device_name = trimmed_or_none(cli.custom_device_name.as_deref()).map(str::to_string);
    if custom_device_name.is_some() && device != CUSTOM_DEVICE_KEY {
        warnings.push(
            "Warning: --custom-device-name is ignored unless --device custom is selected."
                .to_string(),
        );
    }

    // Without screenshots the configured count stands in for the built-in default.
    let count = cli
        .count
        .map(|count| count as usize)
        .or_else(|| screenshots.is_empty().then_some(default_count));

    PromptRequest {
        count,
        style_mode,
        screenshots,
        headlines: cli.headlines.clone(),
        aspect_ratio: cli.aspect_ratio,
        story_arc: cli.story_arc.clone(),
        device,
        custom_device_name,
        app_colors: trimmed_or_none(cli.app_colors.as_deref()).map(str::to_string),
        platform: cli.platform.unwrap_or(config.default_platform),
        ..PromptRequest::new(&cli.name, &cli.category, &cli.usp)
    }
}

fn mockup_request(cli: &Cli, config: &Config, default_count: usize) -> MockupRequest {
    MockupRequest {
        count: cli
            .count
            .map(|count| count as usize)
            .unwrap_or(default_count),
        screen_descriptions: non_empty_items(&cli.screen_descriptions),
        app_colors: trimmed_or_none(cli.app_colors.as_deref()).map(str::to_string),
        platform: cli.platform.unwrap_or(config.default_platform),
        device: cli
            .device
            .clone()
            .unwrap_or_else(|| config.default_device.clone()),
        ..MockupRequest::new(&cli.name, &cli.category, &cli.usp)
    }
}
