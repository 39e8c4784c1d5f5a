// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Verify that a checked-in release configuration matches what would be
//! generated now.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

/// Verify a checked-in release configuration is current
#[derive(Debug, Args)]
pub struct CmdCheck {
    #[clap(flatten)]
    inputs: crate::GenerationFlags,

    /// Checked-in release configuration
    #[clap(short, long, default_value = distrel::RELEASE_CONFIG_FILENAME)]
    file: PathBuf,
}

impl CmdCheck {
    pub fn run(&mut self) -> Result<i32> {
        let inputs = self.inputs.resolve()?;
        let project = inputs.project()?;
        let rendered = distrel::render_yaml(&project)?;

        if !self.file.exists() {
            eprintln!("No release configuration found at {:?}", self.file);
            return Ok(2);
        }

        let existing = std::fs::read_to_string(&self.file)
            .map_err(|e| miette::miette!("Failed to read {:?}: {e}", self.file))?;

        match compare(&existing, &project, &rendered) {
            Comparison::Current => {
                println!("✓ {} is up to date", self.file.display());
                Ok(0)
            }
            Comparison::Reformatted(drift) => {
                eprintln!(
                    "{} has the current content but is not formatted as generated \
                    (first difference at line {}):",
                    self.file.display(),
                    drift.line
                );
                print_drift(&drift);
                eprintln!("\nRun 'distrel generate -o {}' to rewrite it", self.file.display());
                Ok(1)
            }
            Comparison::Changed(drift) => {
                eprintln!(
                    "{} is out of date (first difference at line {}):",
                    self.file.display(),
                    drift.line
                );
                print_drift(&drift);
                eprintln!("\nRun 'distrel generate -o {}' to regenerate it", self.file.display());
                Ok(1)
            }
        }
    }
}

/// How a checked-in document relates to the freshly generated one.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Comparison {
    Current,
    /// Same document once parsed, different text.
    Reformatted(distrel::Drift),
    Changed(distrel::Drift),
}

pub(crate) fn compare(existing: &str, project: &distrel::Project, rendered: &str) -> Comparison {
    let Some(drift) = distrel::Drift::between(existing, rendered) else {
        return Comparison::Current;
    };
    match distrel::parse_yaml(existing) {
        Ok(parsed) if &parsed == project => Comparison::Reformatted(drift),
        Ok(_) => Comparison::Changed(drift),
        Err(err) => {
            tracing::debug!(%err, "checked-in release configuration does not parse");
            Comparison::Changed(drift)
        }
    }
}

fn print_drift(drift: &distrel::Drift) {
    eprintln!("  - {}", drift.expected.as_deref().unwrap_or("<end of file>"));
    eprintln!("  + {}", drift.actual.as_deref().unwrap_or("<end of file>"));
}
