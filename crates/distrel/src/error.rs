// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for distrel operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with distrel Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading policy or checking generated output.
///
/// The generators themselves never fail; these come from the boundaries
/// around them.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Invalid YAML in a policy or release file
    #[error("Invalid YAML document: {error}")]
    #[diagnostic(
        code(distrel::invalid_yaml),
        help("Check YAML syntax and ensure 'api: distrel/v0' is present")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(distrel::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Distribution identifier rejected at the boundary
    #[error("Invalid distribution identifier {name:?}: {reason}")]
    #[diagnostic(
        code(distrel::invalid_distribution),
        help("Distribution identifiers are directory names under the distributions root")
    )]
    InvalidDistribution { name: String, reason: String },

    /// Policy violates one of its invariants
    #[error("Invalid release policy: {0}")]
    #[diagnostic(code(distrel::invalid_policy))]
    InvalidPolicy(String),

    /// Image architecture entry could not be parsed
    #[error("Invalid image architecture {0:?}")]
    #[diagnostic(
        code(distrel::invalid_image_arch),
        help("Use a plain architecture such as 'amd64' or an ARM variant such as 'arm/v7'")
    )]
    InvalidImageArch(String),

    /// Two builds share an id
    #[error("Build id {0:?} appears more than once")]
    #[diagnostic(code(distrel::duplicate_build))]
    DuplicateBuild(String),

    /// Archive references a build that does not exist
    #[error("Archive {archive:?} references unknown build {build:?}")]
    #[diagnostic(code(distrel::dangling_build_reference))]
    DanglingBuildReference { archive: String, build: String },

    /// Manifest aggregates an image that no docker spec produces
    #[error("Manifest {manifest:?} references image {image:?} which no docker spec builds")]
    #[diagnostic(
        code(distrel::dangling_manifest_image),
        help("Manifest image references must match a docker spec's image_templates entry")
    )]
    DanglingManifestImage { manifest: String, image: String },

    /// Manifest aggregates no images at all
    #[error("Manifest {0:?} lists no images")]
    #[diagnostic(
        code(distrel::empty_manifest),
        help("The policy needs at least one entry in image_architectures")
    )]
    EmptyManifest(String),

    /// Two manifests publish the same reference
    #[error("Manifest {0:?} appears more than once")]
    #[diagnostic(code(distrel::duplicate_manifest))]
    DuplicateManifest(String),

    /// Two docker specs publish the same image reference
    #[error("Image {0:?} is built more than once")]
    #[diagnostic(code(distrel::duplicate_image))]
    DuplicateImage(String),

    /// Serialization of the generated document failed
    #[error("Failed to render release configuration")]
    #[diagnostic(code(distrel::render_failed))]
    Render(#[source] serde_yaml::Error),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(distrel::io_error))]
    Io(#[from] std::io::Error),
}
