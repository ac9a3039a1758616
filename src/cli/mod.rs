pub mod commands;
pub mod output;

pub use commands::{CliArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use tracing::{debug, error, info};

/// Runs one generation and returns the process exit code.
///
/// JSON output reports detection only and never writes the rules document.
pub fn handle_generate(args: &CliArgs) -> i32 {
    info!("Starting rules generation");

    let default_config = GeneratorConfig::default();
    let config = GeneratorConfig {
        project_dir: args
            .project_dir
            .clone()
            .unwrap_or(default_config.project_dir.clone()),
        output_file: args
            .output
            .clone()
            .unwrap_or(default_config.output_file.clone()),
        dry_run: args.dry_run,
        ..default_config
    };
    debug!("{}", config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        eprintln!("❌ {}", e);
        return 1;
    }

    let generator = Generator::new(config);
    let formatter = OutputFormatter::new(args.format.into());

    let rendered = match formatter.format() {
        OutputFormat::Json => generator
            .detect()
            .map_err(anyhow::Error::from)
            .and_then(|detection| formatter.format_detection_json(&detection)),
        OutputFormat::Human => generator
            .run()
            .map_err(anyhow::Error::from)
            .and_then(|report| formatter.format_generation(&report)),
    };

    match rendered {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Generation failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            1
        }
    }
}
