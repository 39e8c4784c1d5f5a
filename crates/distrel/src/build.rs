// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Binary build entries.

use crate::project::{Build, BuildDetails};
use crate::{Distribution, ReleasePolicy};

#[cfg(test)]
#[path = "./build_test.rs"]
mod build_test;

/// Environment for every build; binaries are statically linked.
pub const BUILD_ENV: &[&str] = &["CGO_ENABLED=0"];

/// Compiler flags for every build; no local paths end up in the binary.
pub const BUILD_FLAGS: &[&str] = &["-trimpath"];

/// Linker flags for every build; symbol table and debug info are stripped.
pub const BUILD_LDFLAGS: &[&str] = &["-s", "-w"];

/// One build per distribution, in input order.
pub fn builds(policy: &ReleasePolicy, dists: &[Distribution]) -> Vec<Build> {
    dists.iter().map(|dist| build(policy, dist)).collect()
}

/// Build of a distribution's binary for every configured OS and architecture.
pub fn build(policy: &ReleasePolicy, dist: &Distribution) -> Build {
    tracing::trace!(%dist, "generating build");
    Build {
        id: dist.to_string(),
        dir: format!(
            "{}/{}/{}",
            policy.distributions_root, dist, policy.build_dir
        ),
        binary: dist.to_string(),
        details: BuildDetails {
            env: to_strings(BUILD_ENV),
            flags: to_strings(BUILD_FLAGS),
            ldflags: to_strings(BUILD_LDFLAGS),
        },
        goos: policy.target_os.clone(),
        goarch: policy.architectures.clone(),
        goarm: policy.arm_versions.clone(),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
