// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! YAML rendering of the release configuration and drift detection against
//! a checked-in copy.

use crate::project::Project;
use crate::Error;

#[cfg(test)]
#[path = "./render_test.rs"]
mod render_test;

/// Header written above the generated document.
pub const GENERATED_HEADER: &str = "# Code generated by distrel. DO NOT EDIT.\n\n";

/// Render the document as YAML, header included.
pub fn render_yaml(project: &Project) -> crate::Result<String> {
    let body = serde_yaml::to_string(project).map_err(Error::Render)?;
    Ok(format!("{GENERATED_HEADER}{body}"))
}

/// Parse a rendered document back into its structured form.
pub fn parse_yaml<S: Into<String>>(yaml: S) -> crate::Result<Project> {
    let yaml = yaml.into();
    serde_yaml::from_str(&yaml).map_err(|e| Error::InvalidYaml {
        error: e,
        yaml_content: yaml.clone(),
    })
}

/// First difference between a checked-in document and a fresh rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drift {
    /// 1-based line number of the first differing line.
    pub line: usize,

    /// Line in the checked-in document, `None` past its end.
    pub expected: Option<String>,

    /// Line in the fresh rendering, `None` past its end.
    pub actual: Option<String>,
}

impl Drift {
    /// Compare line by line, `None` when the documents are identical.
    pub fn between(expected: &str, actual: &str) -> Option<Self> {
        let mut expected_lines = expected.lines();
        let mut actual_lines = actual.lines();
        let mut line = 0;
        loop {
            line += 1;
            match (expected_lines.next(), actual_lines.next()) {
                (None, None) => break,
                (e, a) if e == a => continue,
                (e, a) => {
                    return Some(Self {
                        line,
                        expected: e.map(String::from),
                        actual: a.map(String::from),
                    });
                }
            }
        }

        // Identical lines; only line terminators can still differ.
        if expected == actual {
            return None;
        }
        let longer = Some(String::new());
        let (expected, actual) = if expected.len() > actual.len() {
            (longer, None)
        } else {
            (None, longer)
        };
        Some(Self {
            line,
            expected,
            actual,
        })
    }
}
