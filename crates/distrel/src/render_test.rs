// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;
use crate::{generate, Distribution, ReleasePolicy};

fn reference_project() -> Project {
    let dists = Distribution::parse_list(["otelcol", "otelcol-contrib"]).unwrap();
    let policy = ReleasePolicy::default();
    generate(&policy, &policy.image_prefixes, &dists)
}

#[rstest]
fn test_render_has_header_and_top_level_keys() {
    let yaml = render_yaml(&reference_project()).unwrap();

    assert!(yaml.starts_with(GENERATED_HEADER));
    assert!(yaml.contains("project_name: opentelemetry-collector-releases\n"));
    assert!(yaml.contains("\nbuilds:\n"));
    assert!(yaml.contains("\narchives:\n"));
    assert!(yaml.contains("\ndockers:\n"));
    assert!(yaml.contains("\ndocker_manifests:\n"));
}

#[rstest]
fn test_render_key_order() {
    let yaml = render_yaml(&reference_project()).unwrap();
    let position = |key: &str| yaml.find(key).expect(key);

    assert!(position("project_name:") < position("checksum:"));
    assert!(position("checksum:") < position("\nbuilds:"));
    assert!(position("\nbuilds:") < position("\narchives:"));
    assert!(position("\narchives:") < position("\ndockers:"));
    assert!(position("\ndockers:") < position("\ndocker_manifests:"));
}

#[rstest]
fn test_rendered_document_parses_back() {
    let project = reference_project();
    let yaml = render_yaml(&project).unwrap();
    let parsed = parse_yaml(yaml).expect("Should parse rendered document");
    assert_eq!(parsed, project);
}

#[rstest]
fn test_parse_invalid_document() {
    assert!(matches!(
        parse_yaml("builds: [unclosed"),
        Err(Error::InvalidYaml { .. })
    ));
}

#[rstest]
fn test_no_drift_for_identical_documents() {
    let yaml = render_yaml(&reference_project()).unwrap();
    assert_eq!(Drift::between(&yaml, &yaml), None);
}

#[rstest]
fn test_drift_reports_first_changed_line() {
    let expected = "a: 1\nb: 2\nc: 3\n";
    let actual = "a: 1\nb: 20\nc: 30\n";

    let drift = Drift::between(expected, actual).expect("Should detect drift");
    assert_eq!(drift.line, 2);
    assert_eq!(drift.expected.as_deref(), Some("b: 2"));
    assert_eq!(drift.actual.as_deref(), Some("b: 20"));
}

#[rstest]
fn test_drift_reports_added_lines() {
    let drift = Drift::between("a: 1\n", "a: 1\nb: 2\n").expect("Should detect drift");
    assert_eq!(drift.line, 2);
    assert_eq!(drift.expected, None);
    assert_eq!(drift.actual.as_deref(), Some("b: 2"));
}

#[rstest]
fn test_drift_reports_missing_trailing_newline() {
    let drift = Drift::between("a: 1\n", "a: 1").expect("Should detect drift");
    assert_eq!(drift.line, 2);
    assert_eq!(drift.expected.as_deref(), Some(""));
    assert_eq!(drift.actual, None);
}

#[rstest]
fn test_drift_after_distribution_added() {
    let policy = ReleasePolicy::default();
    let before = render_yaml(&reference_project()).unwrap();
    let dists = Distribution::parse_list(["otelcol", "otelcol-contrib", "otelcol-k8s"]).unwrap();
    let after = render_yaml(&generate(&policy, &policy.image_prefixes, &dists)).unwrap();

    assert!(Drift::between(&before, &after).is_some());
}
