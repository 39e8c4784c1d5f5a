// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Container image and multi-architecture manifest entries.

use crate::naming::{
    image_name, image_reference, label_flag, manifest_reference, LATEST_TAG, VERSION_TAG,
};
use crate::policy::ImageArch;
use crate::project::{Docker, DockerManifest};
use crate::{Distribution, ReleasePolicy};

#[cfg(test)]
#[path = "./docker_test.rs"]
mod docker_test;

/// Image builder invoked by the release engine.
pub const DOCKER_BUILDER: &str = "buildx";

/// Tags every image and manifest is published under, in emission order.
pub const TAG_KINDS: [&str; 2] = [VERSION_TAG, LATEST_TAG];

/// OCI labels attached to every image as `(label, template field)`.
///
/// The order is part of the generated output.
pub const IMAGE_LABELS: [(&str, &str); 5] = [
    ("created", ".Date"),
    ("name", ".ProjectName"),
    ("revision", ".FullCommit"),
    ("version", ".Version"),
    ("source", ".GitURL"),
];

/// One image per distribution and image architecture.
///
/// Distributions are the outer loop, so all images of a distribution are
/// adjacent in the output.
pub fn docker_images(
    policy: &ReleasePolicy,
    prefixes: &[String],
    dists: &[Distribution],
) -> Vec<Docker> {
    let mut images = Vec::with_capacity(dists.len() * policy.image_architectures.len());
    for dist in dists {
        for arch in &policy.image_architectures {
            images.push(docker_image(policy, prefixes, dist, &arch.goarch, &arch.goarm));
        }
    }
    images
}

/// Image of one distribution for one architecture.
///
/// Each prefix contributes a version tag followed by a latest tag. An empty
/// prefix list yields an image with no tags, which is left for the release
/// engine to reject.
pub fn docker_image(
    policy: &ReleasePolicy,
    prefixes: &[String],
    dist: &Distribution,
    arch: &str,
    arm_version: &str,
) -> Docker {
    let target = ImageArch::new(arch, arm_version);
    let docker_arch = target.docker_arch();
    let arch_tag = target.tag();
    let image = image_name(&policy.image_name, dist.as_str());

    let mut image_templates = Vec::with_capacity(prefixes.len() * TAG_KINDS.len());
    for prefix in prefixes {
        for tag in TAG_KINDS {
            image_templates.push(image_reference(prefix, &image, tag, &arch_tag));
        }
    }
    tracing::trace!(%dist, arch = %docker_arch, tags = image_templates.len(), "generating image");

    let mut build_flag_templates = vec![
        "--pull".to_string(),
        format!("--platform={}/{}", policy.image_os, docker_arch),
    ];
    build_flag_templates.extend(
        IMAGE_LABELS
            .iter()
            .map(|(name, template)| label_flag(name, template)),
    );

    Docker {
        image_templates,
        dockerfile: format!("{}/{}/Dockerfile", policy.distributions_root, dist),
        builder: DOCKER_BUILDER.to_string(),
        build_flag_templates,
        extra_files: vec![format!("{}/{}.yaml", policy.configs_dir, dist)],
        goos: policy.image_os.clone(),
        goarch: target.goarch,
        goarm: target.goarm,
    }
}

/// Two manifests per distribution and prefix, version tag before latest tag.
pub fn docker_manifests(
    policy: &ReleasePolicy,
    prefixes: &[String],
    dists: &[Distribution],
) -> Vec<DockerManifest> {
    let mut manifests = Vec::with_capacity(dists.len() * prefixes.len() * TAG_KINDS.len());
    for dist in dists {
        for prefix in prefixes {
            for tag in TAG_KINDS {
                manifests.push(docker_manifest(policy, prefix, tag, dist));
            }
        }
    }
    manifests
}

/// Manifest aggregating the per-architecture images of one prefix and tag.
pub fn docker_manifest(
    policy: &ReleasePolicy,
    prefix: &str,
    tag: &str,
    dist: &Distribution,
) -> DockerManifest {
    let image = image_name(&policy.image_name, dist.as_str());
    DockerManifest {
        name_template: manifest_reference(prefix, &image, tag),
        image_templates: policy
            .image_architectures
            .iter()
            .map(|arch| image_reference(prefix, &image, tag, &arch.tag()))
            .collect(),
    }
}
