// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! CLI output reporter with colored formatting

use crate::geometry::BoundingBox;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a completed import with colors
    pub fn report_import(
        file: &str,
        object: &str,
        vertices: usize,
        triangles: usize,
        bbox: &BoundingBox,
        duration: Duration,
    ) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Imported:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Object:".bright_black(),
            object.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Vertices:".bright_black(),
            vertices.to_string().cyan()
        );
        println!(
            "  {} {}",
            "Triangles:".bright_black(),
            triangles.to_string().cyan()
        );

        let size = bbox.size();
        println!(
            "  {} {}",
            "Size:".bright_black(),
            format!("{:.3} x {:.3} x {:.3}", size.x, size.y, size.z).cyan()
        );
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Format duration for display
    pub fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print progress message
    pub fn progress(message: &str) {
        println!("{} {}...", "⏳".bright_blue(), message.bright_black());
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
