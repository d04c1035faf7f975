//! Default command: package every (tool, language) pair.

use crate::{
    bundler::{
        Archiver, CommandArchiver, PackageOutcome, PackageStatus, Packager, SettingsBuilder,
        ZipArchiver, load_settings_file,
    },
    cli::{ArchiverKind, Args, OutputManager, RuntimeConfig},
    error::Result,
};
use anyhow::Context;

/// Builds settings from the arguments, packages all pairs and prints the
/// summary line.
///
/// Returns exit code 0 once the batch completes, even if some pairs failed.
pub fn execute_package(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let mut builder = match &args.config {
        Some(path) => load_settings_file(path)
            .with_context(|| format!("Failed to load bundle config {}", path.display()))?,
        None => SettingsBuilder::builtin(),
    };
    if let Some(root) = &args.root {
        builder = builder.root(root);
    }
    if let Some(output) = &args.output {
        builder = builder.output_dir(output);
    }
    if let Some(date) = args.date {
        builder = builder.generated_on(date);
    }
    let settings = builder.build()?;

    let archiver: Box<dyn Archiver> = match args.archiver {
        ArchiverKind::Zip => Box::new(ZipArchiver),
        ArchiverKind::Command => Box::new(CommandArchiver::locate()?),
    };

    config.section(&format!(
        "Packaging {} offline bundles from {}",
        settings.pair_count(),
        settings.root().display()
    ))?;

    let packager = Packager::with_archiver(settings, archiver);
    let output = config.output();
    let summary = packager.package_all_with(|outcome| {
        if let Err(e) = report_outcome(output, outcome) {
            log::debug!("Failed to write progress: {e}");
        }
    })?;

    output.println(&format!(
        "{}/{} offline bundles created in {}",
        summary.succeeded(),
        summary.total(),
        summary.output_dir.display()
    ))?;
    Ok(0)
}

fn report_outcome(output: &OutputManager, outcome: &PackageOutcome) -> std::io::Result<()> {
    let label = format!("{}-{}", outcome.tool_id, outcome.language);
    match &outcome.status {
        PackageStatus::Packaged(archive) => {
            output.success(&format!("{label}.zip ({})", format_size(archive.size)))?;
            output.verbose(&format!("    sha256 {}", archive.checksum))?;
        }
        PackageStatus::Failed { reason } => {
            output.warn(&format!("{label} failed: {reason}"))?;
        }
    }
    for warning in &outcome.warnings {
        output.indent(&warning.to_string())?;
    }
    Ok(())
}

/// Human-readable byte size with one decimal (B, KB, MB).
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KB {
        format!("{bytes} B")
    } else if value < KB * KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{:.1} MB", value / (KB * KB))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1_572_864), "1.5 MB");
    }
}
