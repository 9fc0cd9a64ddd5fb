// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Scadport CLI
//! Headless driver for the OpenSCAD import add-on

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use scadport::addon::{self, ImportProps, ImporterPreferences, CONFIG_FILE};
use scadport::cli::{discover_scad_files, ImportReport, ImportResult, Reporter};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "scadport")]
#[command(about = "Scadport - OpenSCAD import add-on for mesh hosts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Import .scad files into a fresh scene
    Import {
        /// Input .scad file(s) or folder(s)
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Uniform scale applied to imported meshes
        #[arg(short, long, default_value_t = 1.0)]
        scale: f64,

        /// OpenSCAD executable to use
        #[arg(long)]
        openscad: Option<String>,

        /// Output directory for import reports
        #[arg(short, long)]
        report: Option<String>,
    },

    /// Check that the OpenSCAD binary can be spawned
    Check {
        /// OpenSCAD executable to check
        #[arg(long)]
        openscad: Option<String>,
    },

    /// Show or set the configured OpenSCAD path
    Config {
        /// OpenSCAD executable path to save
        #[arg(long)]
        openscad: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Import {
            inputs,
            scale,
            openscad,
            report,
        } => {
            import_command(inputs, *scale, openscad.as_deref(), report.as_deref(), cli.verbose)?;
        }
        Commands::Check { openscad } => {
            check_command(openscad.as_deref())?;
        }
        Commands::Config { openscad } => {
            config_command(openscad.as_deref())?;
        }
        Commands::Version => {
            println!("Scadport v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn import_command(
    inputs: &[String],
    scale: f64,
    openscad: Option<&str>,
    report_dir: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let paths: Vec<PathBuf> = inputs.iter().map(PathBuf::from).collect();
    let files = discover_scad_files(&paths)?;

    if files.is_empty() {
        eprintln!("{}", "No .scad files found".red());
        std::process::exit(1);
    }

    if verbose {
        println!("Found {} files to import", files.len());
    }

    let mut host = scadport::install()?;

    if let Some(path) = openscad {
        ImporterPreferences {
            openscad_path: PathBuf::from(path),
        }
        .write_to_store(&mut host.preferences)?;
    }

    let progress = if verbose {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut report = ImportReport::new();

    for file in &files {
        if let Some(ref pb) = progress {
            pb.set_message(format!("Importing {}", file.display()));
        }

        let before = host.scene.object_count();
        let start = Instant::now();

        let props = serde_json::to_value(ImportProps {
            filepath: file.clone(),
            scale,
        })?;
        host.invoke(addon::IDNAME, &props)?;

        let elapsed = start.elapsed();

        // The operator reports finished either way; a new object tells
        // success from failure
        if host.scene.object_count() > before {
            if let Some(object) = host.scene.active().and_then(|id| host.scene.object(id)) {
                report.add_result(ImportResult {
                    file: file.display().to_string(),
                    object: object.name.clone(),
                    vertices: object.mesh.vertex_count(),
                    triangles: object.mesh.triangle_count(),
                    time_ms: elapsed.as_millis() as u64,
                });

                Reporter::report_import(
                    &file.display().to_string(),
                    &object.name,
                    object.mesh.vertex_count(),
                    object.mesh.triangle_count(),
                    &object.mesh.bounding_box(),
                    elapsed,
                );
            }
        } else {
            report.add_error(
                file.display().to_string(),
                "Running OpenSCAD failed".to_string(),
            );
        }

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Import complete");
    }

    if let Some(out) = report_dir {
        let output_dir = PathBuf::from(out);
        std::fs::create_dir_all(&output_dir)?;
        report.write_json(&output_dir.join("latest.json"))?;
        report.write_markdown(&output_dir.join("report.md"))?;

        println!(
            "\n  {} {}",
            "JSON Report:".bright_black(),
            output_dir.join("latest.json").display().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Markdown Report:".bright_black(),
            output_dir.join("report.md").display().to_string().cyan()
        );
    }

    println!("\n{}", "═".repeat(80).bright_black());
    println!("{}", "Import Summary".bold());
    println!("{}", "═".repeat(80).bright_black());
    println!(
        "  {} {}",
        "Total Files:".bright_black(),
        report.total_files.to_string().cyan()
    );
    println!(
        "  {} {} ({:.1}%)",
        "Imported:".bright_black(),
        report.imported.to_string().green(),
        report.success_rate()
    );
    println!(
        "  {} {}",
        "Failed:".bright_black(),
        if report.failed > 0 {
            report.failed.to_string().red()
        } else {
            report.failed.to_string().green()
        }
    );
    println!("{}", "═".repeat(80).bright_black());

    if report.failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn check_command(openscad: Option<&str>) -> Result<()> {
    let mut prefs = ImporterPreferences::load()?;
    if let Some(path) = openscad {
        prefs.openscad_path = PathBuf::from(path);
    }

    Reporter::progress(&format!("Checking {}", prefs.openscad_path.display()));

    if addon::is_openscad_available(&prefs.openscad_path) {
        Reporter::success(&format!(
            "OpenSCAD available: {}",
            prefs.openscad_path.display()
        ));
    } else {
        Reporter::report_error(&format!(
            "OpenSCAD not found: {}",
            prefs.openscad_path.display()
        ));
        std::process::exit(1);
    }

    Ok(())
}

fn config_command(openscad: Option<&str>) -> Result<()> {
    match openscad {
        Some(path) => {
            let prefs = ImporterPreferences {
                openscad_path: PathBuf::from(path),
            };
            prefs.save(CONFIG_FILE)?;
            Reporter::success(&format!("OpenSCAD path saved to {}", CONFIG_FILE));
        }
        None => {
            let prefs = ImporterPreferences::load()?;
            println!(
                "{} {}",
                "OpenSCAD path:".bold(),
                prefs.openscad_path.display().to_string().cyan()
            );
        }
    }

    Ok(())
}
