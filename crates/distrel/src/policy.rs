// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Release policy: the architectures, prefixes and naming rules that drive
//! generation.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "./policy_test.rs"]
mod policy_test;

/// API version for policy files.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "distrel/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Helper for two-stage deserialization to determine API version first.
#[derive(Deserialize)]
struct ApiVersionMapping {
    #[serde(default)]
    api: ApiVersion,
}

/// Mapping from the internal project token to the public image name.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImageNameSubstitution {
    pub internal: String,
    pub public: String,
}

impl Default for ImageNameSubstitution {
    fn default() -> Self {
        Self {
            internal: "otelcol".to_string(),
            public: "opentelemetry-collector".to_string(),
        }
    }
}

/// Inputs to generation other than the distribution list.
///
/// Every list is ordered and that order is reproduced in the output.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReleasePolicy {
    pub api: ApiVersion,

    pub project_name: String,

    /// Registry namespaces every image is published under.
    pub image_prefixes: Vec<String>,

    /// Operating systems binaries are built for.
    pub target_os: Vec<String>,

    /// Architectures binaries are built for.
    pub architectures: Vec<String>,

    /// ARM revisions applied to ARM binary builds.
    pub arm_versions: Vec<String>,

    /// Architectures container images are built for, in docker platform
    /// form (`amd64`, `arm/v7`). Usually narrower than `architectures`.
    pub image_architectures: Vec<ImageArch>,

    /// Operating system of container images.
    pub image_os: String,

    pub image_name: ImageNameSubstitution,

    /// Directory holding one subdirectory per distribution.
    pub distributions_root: String,

    /// Build output folder inside a distribution directory.
    pub build_dir: String,

    /// Directory of per-distribution collector configuration files.
    pub configs_dir: String,
}

impl Default for ReleasePolicy {
    fn default() -> Self {
        Self {
            api: ApiVersion::default(),
            project_name: "opentelemetry-collector-releases".to_string(),
            image_prefixes: vec!["otel".to_string()],
            target_os: vec!["darwin".to_string(), "linux".to_string()],
            architectures: vec!["amd64".to_string(), "arm64".to_string()],
            arm_versions: vec!["7".to_string()],
            image_architectures: vec![ImageArch::new("amd64", "")],
            image_os: "linux".to_string(),
            image_name: ImageNameSubstitution::default(),
            distributions_root: "distributions".to_string(),
            build_dir: "_build".to_string(),
            configs_dir: "configs".to_string(),
        }
    }
}

impl ReleasePolicy {
    /// Parse policy from YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();

        // Stage 1: Parse to get API version
        let value: serde_yaml::Value =
            serde_yaml::from_str(&yaml).map_err(|e| Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        let with_version: ApiVersionMapping =
            serde_yaml::from_value(value.clone()).map_err(|e| Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        // Stage 2: Deserialize based on version
        match with_version.api {
            ApiVersion::V0 => serde_yaml::from_value(value).map_err(|e| Error::InvalidYaml {
                error: e,
                yaml_content: yaml,
            }),
        }
    }

    /// Load policy from file path.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let policy = Self::from_yaml(yaml)?;
        tracing::debug!(path = %path.display(), "loaded release policy");
        Ok(policy)
    }

    /// Serialize policy to YAML.
    pub fn to_yaml(&self) -> crate::Result<String> {
        serde_yaml::to_string(self).map_err(Error::Render)
    }

    /// Check the invariants the generators rely on.
    pub fn validate(&self) -> crate::Result<()> {
        if self.project_name.trim().is_empty() {
            return Err(Error::InvalidPolicy(
                "project_name must not be empty".to_string(),
            ));
        }

        for (field, values) in [
            ("image_prefixes", &self.image_prefixes),
            ("target_os", &self.target_os),
            ("architectures", &self.architectures),
            ("arm_versions", &self.arm_versions),
        ] {
            if values.iter().any(|v| v.trim().is_empty()) {
                return Err(Error::InvalidPolicy(format!(
                    "{field} contains an empty entry"
                )));
            }
        }

        if self.target_os.is_empty() {
            return Err(Error::InvalidPolicy(
                "target_os must list at least one operating system".to_string(),
            ));
        }
        if self.architectures.is_empty() {
            return Err(Error::InvalidPolicy(
                "architectures must list at least one architecture".to_string(),
            ));
        }
        if self.image_architectures.is_empty() {
            return Err(Error::InvalidPolicy(
                "image_architectures must list at least one architecture".to_string(),
            ));
        }
        if self.image_os.trim().is_empty() {
            return Err(Error::InvalidPolicy("image_os must not be empty".to_string()));
        }

        let mut prefixes = HashSet::new();
        for prefix in &self.image_prefixes {
            if !prefixes.insert(prefix.as_str()) {
                return Err(Error::InvalidPolicy(format!(
                    "image prefix {prefix:?} appears more than once"
                )));
            }
        }

        // Images are built from the binaries, so every image target needs a
        // matching build.
        let mut image_archs = HashSet::new();
        for arch in &self.image_architectures {
            if !image_archs.insert(arch) {
                return Err(Error::InvalidPolicy(format!(
                    "image architecture {:?} appears more than once",
                    arch.to_string()
                )));
            }
            if !self.architectures.contains(&arch.goarch) {
                return Err(Error::InvalidPolicy(format!(
                    "image architecture {:?} has no binary build, add {:?} to architectures",
                    arch.to_string(),
                    arch.goarch
                )));
            }
            if !arch.goarm.is_empty() && !self.arm_versions.contains(&arch.goarm) {
                return Err(Error::InvalidPolicy(format!(
                    "image architecture {:?} has no binary build, add {:?} to arm_versions",
                    arch.to_string(),
                    arch.goarm
                )));
            }
        }

        let names = &self.image_name;
        if !names.internal.is_empty() && names.public.contains(&names.internal) {
            return Err(Error::InvalidPolicy(format!(
                "public image name {:?} contains the internal token {:?}",
                names.public, names.internal
            )));
        }

        Ok(())
    }
}

/// Target of one container image build.
///
/// Serialized in docker platform form, so an unparseable entry is rejected
/// while the policy is loaded.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ImageArch {
    pub goarch: String,

    /// ARM revision, empty for non-ARM targets.
    pub goarm: String,
}

impl ImageArch {
    /// Parse the docker platform form: `amd64` or `arm/v7`.
    pub fn parse(value: &str) -> crate::Result<Self> {
        let invalid = || Error::InvalidImageArch(value.to_string());
        match value.split_once('/') {
            None if !value.is_empty() => Ok(Self::new(value, "")),
            None => Err(invalid()),
            Some((arch, variant)) => {
                let revision = variant.strip_prefix('v').ok_or_else(invalid)?;
                if arch.is_empty() || revision.is_empty() || revision.contains('/') {
                    return Err(invalid());
                }
                Ok(Self::new(arch, revision))
            }
        }
    }

    pub fn new(goarch: impl Into<String>, goarm: impl Into<String>) -> Self {
        Self {
            goarch: goarch.into(),
            goarm: goarm.into(),
        }
    }

    /// Architecture in docker platform form.
    pub fn docker_arch(&self) -> String {
        if self.goarm.is_empty() {
            self.goarch.clone()
        } else {
            format!("{}/v{}", self.goarch, self.goarm)
        }
    }

    /// Architecture as used in image tags.
    pub fn tag(&self) -> String {
        crate::naming::arch_tag(&self.docker_arch())
    }
}

impl fmt::Display for ImageArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.docker_arch())
    }
}

impl FromStr for ImageArch {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ImageArch {
    type Error = Error;

    fn try_from(value: String) -> crate::Result<Self> {
        Self::parse(&value)
    }
}

impl From<ImageArch> for String {
    fn from(arch: ImageArch) -> Self {
        arch.docker_arch()
    }
}
