use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use valcheck::{catalogue, CheckerConfig, Record, SchemaAccessor, ValueCheckerPlugin};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Types => {
            println!("{}", catalogue());
            Ok(())
        }
        Commands::Check {
            file,
            config,
            data_type,
            attr,
            result,
            min,
            max,
        } => run_check(file, config, data_type, attr, result, min, max),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_check(
    file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    data_type: Option<usize>,
    attr: Option<String>,
    result_attr: Option<String>,
    min: Option<String>,
    max: Option<String>,
) -> Result<()> {
    let mut config = CheckerConfig::load(config_path.as_deref())
        .context("failed to load configuration")?;

    // Flags override the config file.
    if let Some(index) = data_type {
        config.data_type = index;
    }
    if let Some(name) = attr {
        config.checked_attr = name;
    }
    if let Some(name) = result_attr {
        config.result_attr = name;
    }
    if let Some(text) = min {
        config.min_value = text;
    }
    if let Some(text) = max {
        config.max_value = text;
    }

    let reader: Box<dyn BufRead> = match &file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut checked = 0usize;
    let mut passed = 0usize;

    // The schema comes from the shape of the first record; the plugin
    // is built lazily once that record has been seen.
    let mut plugin: Option<ValueCheckerPlugin<SchemaAccessor>> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut record: Record = serde_json::from_str(&line)
            .with_context(|| format!("line {}: invalid record", line_no + 1))?;

        if plugin.is_none() {
            let accessor = SchemaAccessor::from_record(&record);
            plugin = Some(
                ValueCheckerPlugin::from_config(accessor, &config)
                    .context("configuration rejected")?,
            );
        }
        let Some(active) = plugin.as_ref() else {
            unreachable!("plugin was just constructed");
        };

        let verdict = active
            .process(&mut record)
            .with_context(|| format!("line {}: check failed", line_no + 1))?;
        checked += 1;
        if verdict {
            passed += 1;
        }

        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }

    eprintln!("{passed}/{checked} records in limits");
    Ok(())
}
