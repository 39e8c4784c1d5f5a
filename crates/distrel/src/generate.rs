// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Assembly of the complete release configuration.

use crate::archive::archives;
use crate::build::builds;
use crate::docker::{docker_images, docker_manifests};
use crate::naming::CHECKSUM_NAME_TEMPLATE;
use crate::project::{Checksum, Project};
use crate::{Distribution, ReleasePolicy};

#[cfg(test)]
#[path = "./generate_test.rs"]
mod generate_test;

/// Generate the release configuration for the given distributions.
///
/// Pure and deterministic: the same inputs always give an equal document.
/// An empty distribution list gives a document with no entries.
pub fn generate(
    policy: &ReleasePolicy,
    image_prefixes: &[String],
    dists: &[Distribution],
) -> Project {
    let project = Project {
        project_name: policy.project_name.clone(),
        checksum: Checksum {
            name_template: CHECKSUM_NAME_TEMPLATE.to_string(),
        },
        builds: builds(policy, dists),
        archives: archives(dists),
        dockers: docker_images(policy, image_prefixes, dists),
        docker_manifests: docker_manifests(policy, image_prefixes, dists),
    };

    tracing::debug!(
        distributions = dists.len(),
        prefixes = image_prefixes.len(),
        builds = project.builds.len(),
        archives = project.archives.len(),
        dockers = project.dockers.len(),
        manifests = project.docker_manifests.len(),
        "generated release configuration"
    );
    project
}

/// Generate using the policy's own image prefixes.
pub fn generate_default(policy: &ReleasePolicy, dists: &[Distribution]) -> Project {
    generate(policy, &policy.image_prefixes, dists)
}
