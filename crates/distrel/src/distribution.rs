// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Distribution identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "./distribution_test.rs"]
mod distribution_test;

/// Name of one buildable variant of the project, e.g. `otelcol-contrib`.
///
/// The same identifier names the build, its archive, its directory under the
/// distributions root and its configuration file, so it is checked once here
/// and the generators can take it as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Distribution(String);

impl Distribution {
    pub fn new<S: Into<String>>(name: S) -> crate::Result<Self> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("must not be empty")
        } else if name.trim() != name {
            Some("must not have surrounding whitespace")
        } else if name.contains(['/', '\\']) {
            Some("must not contain a path separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidDistribution {
                name,
                reason: reason.to_string(),
            }),
            None => Ok(Self(name)),
        }
    }

    /// Parse a list of identifiers, failing on the first invalid one.
    pub fn parse_list<I, S>(names: I) -> crate::Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Self::new).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Distribution {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Distribution {
    type Error = Error;

    fn try_from(value: String) -> crate::Result<Self> {
        Self::new(value)
    }
}

impl From<Distribution> for String {
    fn from(dist: Distribution) -> Self {
        dist.0
    }
}
