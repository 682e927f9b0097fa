use crate::config::Config;
use crate::error::CliResult;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use xbrlld_mapping::{build_context, Conversion, Converter};

/// Output options shared by both conversions
pub struct OutputOpts<'a> {
    pub output: &'a Path,
    pub context: Option<&'a Path>,
    pub format: Option<&'a str>,
    pub quiet: bool,
}

pub fn run_taxonomy(url: &str, opts: &OutputOpts<'_>, config: &Config) -> CliResult<()> {
    let converter = Converter::new(config.loader()).with_options(config.converter_options());
    let conversion = converter.taxonomy(url)?;
    finish(&conversion, opts, config)?;
    println!("Converted taxonomy to {}", opts.output.display());
    Ok(())
}

pub fn run_instance(
    file: &str,
    with_taxonomy: bool,
    opts: &OutputOpts<'_>,
    config: &Config,
) -> CliResult<()> {
    let converter = Converter::new(config.loader()).with_options(config.converter_options());
    let conversion = converter.instance(file, with_taxonomy)?;
    finish(&conversion, opts, config)?;
    println!("Converted instance document to {}", opts.output.display());
    Ok(())
}

fn finish(conversion: &Conversion, opts: &OutputOpts<'_>, config: &Config) -> CliResult<()> {
    if !opts.quiet {
        for warning in &conversion.warnings {
            eprintln!("{} {warning}", "warning:".yellow().bold());
        }
    }

    let format = config.output_format(opts.format, opts.output)?;
    let mut out = BufWriter::new(File::create(opts.output)?);
    format.write(&conversion.dataset, &mut out)?;
    out.flush()?;
    tracing::info!(
        output = %opts.output.display(),
        %format,
        quads = conversion.dataset.len(),
        derived = conversion.diagnostics.quads_inserted,
        "dataset written"
    );

    if let Some(path) = opts.context {
        let context = build_context(&conversion.dataset);
        let mut out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut out, &context)?;
        writeln!(out)?;
        out.flush()?;
    }
    Ok(())
}
