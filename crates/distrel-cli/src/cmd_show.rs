// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `distrel show` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Summarize what would be generated
#[derive(Debug, Args)]
pub struct CmdShow {
    #[clap(flatten)]
    inputs: crate::GenerationFlags,

    /// Show binary builds and archives
    #[clap(long)]
    artifacts: bool,

    /// Show container images and manifests
    #[clap(long)]
    containers: bool,

    /// Show all information
    #[clap(long)]
    all: bool,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let inputs = self.inputs.resolve()?;
        let project = inputs.project()?;

        let neither = !self.artifacts && !self.containers;
        let show_builds = self.artifacts || self.all || neither;
        let show_images = self.containers || self.all || neither;

        println!("{} {}", "Project:".bold(), project.project_name.cyan());
        println!();

        if show_builds {
            self.show_builds(&project);
        }
        if show_builds && show_images {
            println!();
        }
        if show_images {
            self.show_images(&project);
        }

        Ok(0)
    }

    fn show_builds(&self, project: &distrel::Project) {
        println!("{}", "Builds:".bold());
        println!();

        for (i, build) in project.builds.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, build.binary.cyan(), build.dir.dimmed());
            println!(
                "     os: {}  arch: {}{}",
                build.goos.join(", ").green(),
                build.goarch.join(", ").green(),
                if build.goarm.is_empty() {
                    String::new()
                } else {
                    format!("  arm: {}", build.goarm.join(", ").yellow())
                }
            );
        }

        println!();
        println!(
            "Total: {} build(s), {} archive(s)",
            project.builds.len(),
            project.archives.len()
        );
    }

    fn show_images(&self, project: &distrel::Project) {
        println!("{}", "Images:".bold());
        println!();

        if project.dockers.is_empty() {
            println!("  {}", "(no images)".dimmed());
        }
        for docker in &project.dockers {
            let platform = if docker.goarm.is_empty() {
                format!("{}/{}", docker.goos, docker.goarch)
            } else {
                format!("{}/{}/v{}", docker.goos, docker.goarch, docker.goarm)
            };
            println!("  {} [{}]", docker.dockerfile.cyan(), platform.yellow());
            if docker.image_templates.is_empty() {
                println!("    {}", "(no tags)".dimmed());
            }
            for tag in &docker.image_templates {
                println!("    - {}", tag.green());
            }
        }

        println!();
        println!("{}", "Manifests:".bold());
        println!();

        if project.docker_manifests.is_empty() {
            println!("  {}", "(no manifests)".dimmed());
        }
        for manifest in &project.docker_manifests {
            println!(
                "  {} <- {}",
                manifest.name_template.cyan(),
                manifest.image_templates.join(", ")
            );
        }

        println!();
        println!(
            "Total: {} image(s), {} manifest(s)",
            project.dockers.len(),
            project.docker_manifests.len()
        );
    }
}
