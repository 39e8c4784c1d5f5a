// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `distrel init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

/// Create a release policy file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to create file in
    #[clap(default_value = ".")]
    path: PathBuf,

    /// Image name prefix to start from (repeatable)
    #[clap(long = "image-prefix")]
    image_prefixes: Vec<String>,

    /// Overwrite an existing policy file
    #[clap(long)]
    force: bool,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let policy_path = self.path.join(distrel::POLICY_FILENAME);

        // Check if file already exists
        if policy_path.exists() && !self.force {
            return Err(miette::miette!(
                help = "Use --force to overwrite it",
                "{} already exists at {:?}",
                distrel::POLICY_FILENAME,
                policy_path
            ));
        }

        let content = self.generate_policy()?;
        std::fs::write(&policy_path, content)
            .map_err(|e| miette::miette!("Failed to write {:?}: {}", policy_path, e))?;
        tracing::info!(path = %policy_path.display(), "wrote release policy");

        println!("Created {} at {:?}", distrel::POLICY_FILENAME, policy_path);
        println!();
        println!("Next steps:");
        println!("  1. Edit the prefixes and architectures to match your registry");
        println!(
            "  2. Run 'distrel show --policy {} -d <dist>' to preview",
            policy_path.display()
        );
        println!(
            "  3. Run 'distrel generate --policy {} -d <dist> -o {}'",
            policy_path.display(),
            distrel::RELEASE_CONFIG_FILENAME
        );

        Ok(0)
    }

    fn generate_policy(&self) -> Result<String> {
        let mut policy = distrel::ReleasePolicy::default();
        if !self.image_prefixes.is_empty() {
            policy.image_prefixes = self.image_prefixes.clone();
        }
        policy.validate()?;

        Ok(format!(
            "# distrel release policy\n\
            # Image architectures use docker platform form, e.g. amd64 or arm/v7.\n\
            # The public image name must not contain the internal token.\n\
            \n\
            {}",
            policy.to_yaml()?
        ))
    }
}
