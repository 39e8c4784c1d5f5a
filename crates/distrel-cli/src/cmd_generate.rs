// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `distrel generate` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

/// Write the release configuration
#[derive(Debug, Args)]
pub struct CmdGenerate {
    #[clap(flatten)]
    pub(crate) inputs: crate::GenerationFlags,

    /// Write to FILE instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

impl CmdGenerate {
    pub fn run(&mut self) -> Result<i32> {
        let inputs = self.inputs.resolve()?;
        let project = inputs.project()?;
        let yaml = distrel::render_yaml(&project)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &yaml)
                    .map_err(|e| miette::miette!("Failed to write {:?}: {e}", path))?;
                tracing::info!(
                    path = %path.display(),
                    builds = project.builds.len(),
                    dockers = project.dockers.len(),
                    "wrote release configuration"
                );
            }
            None => print!("{yaml}"),
        }

        Ok(0)
    }
}
