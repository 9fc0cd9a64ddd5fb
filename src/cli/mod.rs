// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Scadport Developers

//! CLI subsystem for Scadport

pub mod discover;
pub mod report;
pub mod reporter;

pub use discover::discover_scad_files;
pub use report::{ImportError, ImportReport, ImportResult};
pub use reporter::Reporter;
