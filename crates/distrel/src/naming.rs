// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Naming rules and the template strings embedded in the generated document.
//!
//! Values wrapped in `{{ }}` are templates expanded later by the release
//! engine, they are emitted verbatim.

use crate::policy::ImageNameSubstitution;

#[cfg(test)]
#[path = "./naming_test.rs"]
mod naming_test;

/// Tag placeholder for the release version.
pub const VERSION_TAG: &str = "{{ .Version }}";

/// Tag for the rolling "latest" image.
pub const LATEST_TAG: &str = "latest";

/// Checksum file name.
pub const CHECKSUM_NAME_TEMPLATE: &str = "{{ .ProjectName }}_checksums.txt";

/// Archive file name. The ARM and MIPS suffixes only render when the build
/// target sets them.
pub const ARCHIVE_NAME_TEMPLATE: &str = "{{ .Binary }}_{{ .Version }}_{{ .Os }}_{{ .Arch }}{{ if .Arm }}v{{ .Arm }}{{ end }}{{ if .Mips }}_{{ .Mips }}{{ end }}";

/// Public image name for a distribution.
///
/// Replaces the first occurrence of the internal token with the public name.
/// Re-applying is only safe while the public name does not itself contain
/// the internal token, which `ReleasePolicy::validate` enforces.
pub fn image_name(substitution: &ImageNameSubstitution, dist: &str) -> String {
    if substitution.internal.is_empty() {
        return dist.to_string();
    }
    dist.replacen(&substitution.internal, &substitution.public, 1)
}

/// Architecture as it appears in an image tag, `arm/v7` becomes `armv7`.
pub fn arch_tag(docker_arch: &str) -> String {
    docker_arch.replace('/', "")
}

/// Fully qualified reference of a per-architecture image.
pub fn image_reference(prefix: &str, image: &str, tag: &str, arch_tag: &str) -> String {
    format!("{prefix}/{image}:{tag}-{arch_tag}")
}

/// Fully qualified name of a multi-architecture manifest.
pub fn manifest_reference(prefix: &str, image: &str, tag: &str) -> String {
    format!("{prefix}/{image}:{tag}")
}

/// OCI image label flag whose value is a release engine template field.
pub fn label_flag(name: &str, template: &str) -> String {
    format!("--label=org.opencontainers.image.{name}={{{{{template}}}}}")
}
