// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! Import report generation (JSON and Markdown)

use anyhow::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Outcome of one successful file import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResult {
    pub file: String,
    pub object: String,
    pub vertices: usize,
    pub triangles: usize,
    pub time_ms: u64,
}

/// Error information for failed imports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportError {
    pub file: String,
    pub error: String,
}

/// Complete import report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub timestamp: String,
    pub total_files: usize,
    pub imported: usize,
    pub failed: usize,
    pub results: Vec<ImportResult>,
    pub error_details: Vec<ImportError>,
}

impl ImportReport {
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            total_files: 0,
            imported: 0,
            failed: 0,
            results: Vec::new(),
            error_details: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: ImportResult) {
        self.total_files += 1;
        self.imported += 1;
        self.results.push(result);
    }

    pub fn add_error(&mut self, file: String, error: String) {
        self.total_files += 1;
        self.failed += 1;
        self.error_details.push(ImportError { file, error });
    }

    pub fn success_rate(&self) -> f32 {
        if self.total_files == 0 {
            0.0
        } else {
            (self.imported as f32 / self.total_files as f32) * 100.0
        }
    }

    /// Write JSON report
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Write Markdown report
    pub fn write_markdown(&self, path: &Path) -> Result<()> {
        let mut md = String::new();

        md.push_str(&format!(
            "# Scadport Import Report ({})\n\n",
            Utc::now().format("%Y-%m-%d")
        ));

        md.push_str("## Summary\n\n");
        md.push_str(&format!("- **Total Files**: {}\n", self.total_files));
        md.push_str(&format!(
            "- **Imported**: {} ({:.1}%)\n",
            self.imported,
            self.success_rate()
        ));
        md.push_str(&format!("- **Failed**: {}\n\n", self.failed));

        md.push_str("## Imported Objects\n\n");
        md.push_str("| File | Object | Vertices | Triangles | Time |\n");
        md.push_str("|------|--------|----------|-----------|------|\n");

        for result in &self.results {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {}ms |\n",
                result.file, result.object, result.vertices, result.triangles, result.time_ms
            ));
        }

        if self.failed > 0 {
            md.push_str("\n## Failed Imports\n\n");
            for error in &self.error_details {
                md.push_str(&format!("- ⚠️ **{}**\n", error.file));
                md.push_str(&format!("  ```\n  {}\n  ```\n", error.error));
            }
        }

        md.push_str(&format!("\n---\n\n*Generated on {}*\n", self.timestamp));

        fs::write(path, md)?;
        Ok(())
    }
}

impl Default for ImportReport {
    fn default() -> Self {
        Self::new()
    }
}
