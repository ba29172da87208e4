// Keysymgen CLI
// Generates the Qt key -> X11 keysym dispatch table from system headers

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use keysymgen_core::config::{is_up_to_date, write_output, GeneratorConfig, SourcePaths};
use keysymgen_core::{generate, Generated, OutputFormat, SourceKind};

/// Qt key to X11 keysym table generator
#[derive(Parser, Debug)]
#[command(name = "keysymgen")]
#[command(author = "keysymgen contributors")]
#[command(version = "0.2.1")]
#[command(about = "Generate a Qt key to X11 keysym dispatch table", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Path to keysymdef.h
    #[arg(long, value_name = "PATH")]
    keysymdef: Option<PathBuf>,

    /// Path to XF86keysym.h
    #[arg(long, value_name = "PATH")]
    vendor: Option<PathBuf>,

    /// Path to Qt's qnamespace.h
    #[arg(long, value_name = "PATH")]
    toolkit: Option<PathBuf>,

    /// Where to write the generated file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output language: rust or cpp-header
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Fail if the existing output differs, without writing
    #[arg(long)]
    check: bool,

    /// Fail without writing if any Qt key stays unresolved
    #[arg(long)]
    deny_unresolved: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Apply command line paths on top of the file configuration
    fn merge_into(&self, config: &mut GeneratorConfig) {
        let inputs = &mut config.inputs;
        for (flag, slot) in [
            (&self.keysymdef, &mut inputs.keysymdef),
            (&self.vendor, &mut inputs.vendor),
            (&self.toolkit, &mut inputs.toolkit),
        ] {
            if flag.is_some() {
                slot.clone_from(flag);
            }
        }
        if self.output.is_some() {
            config.output.path.clone_from(&self.output);
        }
        if self.format.is_some() {
            config.output.format = self.format;
        }
    }
}

fn load_config(args: &Args) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_toml_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::load_default().context("failed to load default config")?,
    };
    args.merge_into(&mut config);
    Ok(config)
}

fn report(generated: &Generated) {
    let diagnostics = generated.table.diagnostics();
    for diagnostic in diagnostics {
        eprintln!("  {}", diagnostic);
    }
    log::info!(
        "{} keys mapped, {} text cases, {} unresolved",
        generated.table.entries().len(),
        generated.table.text_cases().count(),
        diagnostics.len()
    );
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    let paths = SourcePaths::locate(&config.inputs)?;
    for kind in [SourceKind::Keysymdef, SourceKind::Vendor, SourceKind::Toolkit] {
        log::info!("{}: {}", kind, paths.get(kind).display());
    }
    let sources = paths.read()?;

    let format = config.output.format.unwrap_or_default();
    let emitter = format.emitter(config.output.function.as_deref());
    let generated = generate(&sources, &config.overrides(), emitter.as_ref())
        .context("generation failed")?;
    report(&generated);

    if args.deny_unresolved && !generated.table.diagnostics().is_empty() {
        bail!(
            "{} Qt keys could not be resolved",
            generated.table.diagnostics().len()
        );
    }

    let output = config
        .output
        .path
        .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
    if args.check {
        return check(&output, &generated.output);
    }

    write_output(&output, &generated.output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {}", output.display());
    Ok(())
}

fn check(output: &Path, contents: &str) -> Result<()> {
    let fresh = is_up_to_date(output, contents)
        .with_context(|| format!("failed to read {}", output.display()))?;
    if !fresh {
        bail!("{} is out of date", output.display());
    }
    log::info!("{} is up to date", output.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(&args)
}
