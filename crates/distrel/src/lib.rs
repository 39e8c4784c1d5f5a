// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! distrel - Release configuration generator for multi-distribution projects
//!
//! This crate derives the release automation configuration of a modular
//! project from a list of distribution names: one binary build and one
//! archive per distribution, container images for the image architectures,
//! and multi-architecture manifests tying those images together under each
//! registry prefix.
//!
//! # Overview
//!
//! Generation is a pure function of a [`ReleasePolicy`], the image prefixes
//! and the distributions. Output order follows input order, so the rendered
//! file can be checked in and compared for drift.
//!
//! # Example
//!
//! ```yaml
//! # release-policy.yaml
//! api: distrel/v0
//! project_name: opentelemetry-collector-releases
//!
//! image_prefixes:
//!   - otel
//!
//! # Binaries get every architecture, images only these
//! architectures: [amd64, arm64]
//! image_architectures: [amd64]
//!
//! image_name:
//!   internal: otelcol
//!   public: opentelemetry-collector
//! ```

pub mod archive;
pub mod build;
pub mod distribution;
pub mod docker;
pub mod error;
pub mod generate;
pub mod naming;
pub mod policy;
pub mod project;
pub mod render;

pub use distribution::Distribution;
pub use error::{Error, Result};
pub use generate::{generate, generate_default};
pub use naming::image_name;
pub use policy::{ApiVersion, ImageArch, ImageNameSubstitution, ReleasePolicy};
pub use project::{Archive, Build, BuildDetails, Checksum, Docker, DockerManifest, Project};
pub use render::{parse_yaml, render_yaml, Drift};

/// Well-known filename for the generated release configuration.
pub const RELEASE_CONFIG_FILENAME: &str = ".goreleaser.yaml";

/// Well-known filename for release policy files.
pub const POLICY_FILENAME: &str = "release-policy.yaml";
