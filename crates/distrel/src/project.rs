// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Release configuration document consumed by the release automation engine.
//!
//! Field declaration order is the serialized order, so reordering fields here
//! changes the generated file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "./project_test.rs"]
mod project_test;

/// Root of the generated release configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub project_name: String,

    pub checksum: Checksum,

    #[serde(default)]
    pub builds: Vec<Build>,

    #[serde(default)]
    pub archives: Vec<Archive>,

    #[serde(default)]
    pub dockers: Vec<Docker>,

    #[serde(default)]
    pub docker_manifests: Vec<DockerManifest>,
}

/// Naming of the checksum file published alongside the archives.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Checksum {
    pub name_template: String,
}

/// One compiled binary, built for every target OS/arch combination.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Build {
    pub id: String,
    pub dir: String,
    pub binary: String,

    #[serde(flatten)]
    pub details: BuildDetails,

    pub goos: Vec<String>,
    pub goarch: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub goarm: Vec<String>,
}

/// Compiler environment and flags for a build.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BuildDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ldflags: Vec<String>,
}

/// Tarball packaging of one build's binaries.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Archive {
    pub id: String,
    pub name_template: String,

    /// Ids of the builds whose artifacts go into this archive.
    pub builds: Vec<String>,
}

/// A single-architecture container image build.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Docker {
    #[serde(default)]
    pub image_templates: Vec<String>,

    pub dockerfile: String,

    #[serde(rename = "use")]
    pub builder: String,

    #[serde(default)]
    pub build_flag_templates: Vec<String>,

    #[serde(default)]
    pub extra_files: Vec<String>,

    pub goos: String,
    pub goarch: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub goarm: String,
}

/// A multi-architecture manifest aggregating per-architecture images.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DockerManifest {
    pub name_template: String,
    pub image_templates: Vec<String>,
}

impl Project {
    /// Check the references between entries of the document.
    ///
    /// Build ids, image references and manifest names must be unique, every
    /// archive must point at builds that exist, and every manifest must
    /// aggregate at least one image produced by one of the docker specs.
    pub fn validate(&self) -> crate::Result<()> {
        let mut build_ids = HashSet::new();
        for build in &self.builds {
            if !build_ids.insert(build.id.as_str()) {
                return Err(Error::DuplicateBuild(build.id.clone()));
            }
        }

        for archive in &self.archives {
            if archive.builds.is_empty() {
                return Err(Error::DanglingBuildReference {
                    archive: archive.id.clone(),
                    build: String::new(),
                });
            }
            for build in &archive.builds {
                if !build_ids.contains(build.as_str()) {
                    return Err(Error::DanglingBuildReference {
                        archive: archive.id.clone(),
                        build: build.clone(),
                    });
                }
            }
        }

        let mut images = HashSet::new();
        for image in self.dockers.iter().flat_map(|d| &d.image_templates) {
            if !images.insert(image.as_str()) {
                return Err(Error::DuplicateImage(image.clone()));
            }
        }

        let mut manifest_names = HashSet::new();
        for manifest in &self.docker_manifests {
            if !manifest_names.insert(manifest.name_template.as_str()) {
                return Err(Error::DuplicateManifest(manifest.name_template.clone()));
            }
            if manifest.image_templates.is_empty() {
                return Err(Error::EmptyManifest(manifest.name_template.clone()));
            }
            for image in &manifest.image_templates {
                if !images.contains(image.as_str()) {
                    return Err(Error::DanglingManifestImage {
                        manifest: manifest.name_template.clone(),
                        image: image.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
