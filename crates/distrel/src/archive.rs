// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Archive entries packaging each build.

use crate::naming::ARCHIVE_NAME_TEMPLATE;
use crate::project::Archive;
use crate::Distribution;

#[cfg(test)]
#[path = "./archive_test.rs"]
mod archive_test;

/// One archive per distribution, in input order.
pub fn archives(dists: &[Distribution]) -> Vec<Archive> {
    dists.iter().map(archive).collect()
}

/// Archive of the build sharing the distribution's id.
pub fn archive(dist: &Distribution) -> Archive {
    Archive {
        id: dist.to_string(),
        name_template: ARCHIVE_NAME_TEMPLATE.to_string(),
        builds: vec![dist.to_string()],
    }
}
