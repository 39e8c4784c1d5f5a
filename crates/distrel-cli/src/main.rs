// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! distrel - Release configuration generator CLI

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_check;
mod cmd_generate;
mod cmd_init;
mod cmd_show;

use cmd_check::CmdCheck;
use cmd_generate::CmdGenerate;
use cmd_init::CmdInit;
use cmd_show::CmdShow;


#[derive(Parser)]
#[clap(
    name = "distrel",
    about = "Release configuration generator",
    version,
    long_about = "Generate the release automation configuration for every distribution of a modular project"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

/// Inputs shared by every command that generates a document.
#[derive(Parser, Clone, Debug, Default)]
pub struct GenerationFlags {
    /// Distributions to generate for, comma-separated
    #[clap(
        short = 'd',
        long = "distributions",
        value_delimiter = ',',
        env = "DISTREL_DISTRIBUTIONS"
    )]
    pub distributions: Vec<String>,

    /// Image name prefixes, comma-separated (default: from the policy)
    #[clap(long = "images", value_delimiter = ',', env = "DISTREL_IMAGES")]
    pub images: Option<Vec<String>>,

    /// Release policy file (default: the built-in reference policy)
    #[clap(long, env = "DISTREL_POLICY")]
    pub policy: Option<PathBuf>,
}

impl GenerationFlags {
    /// Load the policy and check the inputs before generation.
    pub fn resolve(&self) -> Result<Inputs> {
        let policy = match &self.policy {
            Some(path) => distrel::ReleasePolicy::load(path)?,
            None => distrel::ReleasePolicy::default(),
        };
        policy.validate()?;

        if self.distributions.is_empty() {
            return Err(miette::miette!(
                help = "Pass one or more names with -d, e.g. -d otelcol,otelcol-contrib",
                "no distributions to build"
            ));
        }
        let distributions = distrel::Distribution::parse_list(self.distributions.iter().cloned())?;

        let image_prefixes = self
            .images
            .clone()
            .unwrap_or_else(|| policy.image_prefixes.clone());
        if image_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(miette::miette!("image prefixes must not be empty"));
        }
        let mut seen = HashSet::new();
        if let Some(prefix) = image_prefixes.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(miette::miette!("image prefix {prefix:?} given more than once"));
        }
        if image_prefixes.is_empty() {
            tracing::warn!("no image prefixes configured, images will have no tags");
        }

        Ok(Inputs {
            policy,
            image_prefixes,
            distributions,
        })
    }
}

/// Validated generation inputs.
pub struct Inputs {
    pub policy: distrel::ReleasePolicy,
    pub image_prefixes: Vec<String>,
    pub distributions: Vec<distrel::Distribution>,
}

impl Inputs {
    /// Generate and cross-check the release configuration.
    pub fn project(&self) -> Result<distrel::Project> {
        let project = distrel::generate(&self.policy, &self.image_prefixes, &self.distributions);
        project.validate()?;
        Ok(project)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Write the release configuration
    Generate(CmdGenerate),

    /// Verify a checked-in release configuration is current
    Check(CmdCheck),

    /// Summarize what would be generated
    Show(CmdShow),

    /// Create a release policy file
    Init(CmdInit),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Generate(mut cmd) => cmd.run(),
            Command::Check(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Init(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
