// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_default_policy() {
    let policy = ReleasePolicy::default();
    assert_eq!(policy.api, ApiVersion::V0);
    assert_eq!(policy.project_name, "opentelemetry-collector-releases");
    assert_eq!(policy.image_prefixes, vec!["otel"]);
    assert_eq!(policy.target_os, vec!["darwin", "linux"]);
    assert_eq!(policy.architectures, vec!["amd64", "arm64"]);
    assert_eq!(policy.arm_versions, vec!["7"]);
    assert_eq!(policy.image_architectures, vec![ImageArch::new("amd64", "")]);
    assert_eq!(policy.image_os, "linux");
    policy.validate().expect("Default policy should be valid");
}

#[rstest]
fn test_parse_minimal_policy() {
    let yaml = r#"
api: distrel/v0
"#;
    let policy = ReleasePolicy::from_yaml(yaml).expect("Should parse minimal policy");
    assert_eq!(policy, ReleasePolicy::default());
}

#[rstest]
fn test_parse_full_policy() {
    let yaml = r#"
api: distrel/v0
project_name: acme-releases
image_prefixes:
  - ghcr.io/acme
  - acme
target_os: [linux]
architectures: [amd64, arm64, arm]
arm_versions: ["6", "7"]
image_architectures:
  - amd64
  - arm/v7
image_os: linux
image_name:
  internal: acmecol
  public: acme-collector
distributions_root: dists
build_dir: out
configs_dir: conf
"#;
    let policy = ReleasePolicy::from_yaml(yaml).expect("Should parse full policy");
    assert_eq!(policy.project_name, "acme-releases");
    assert_eq!(policy.image_prefixes, vec!["ghcr.io/acme", "acme"]);
    assert_eq!(policy.arm_versions, vec!["6", "7"]);
    assert_eq!(
        policy.image_architectures,
        vec![ImageArch::new("amd64", ""), ImageArch::new("arm", "7")]
    );
    assert_eq!(policy.image_name.internal, "acmecol");
    assert_eq!(policy.distributions_root, "dists");
    policy.validate().expect("Should be valid");
}

#[rstest]
fn test_parse_unknown_api() {
    let yaml = r#"
api: distrel/v9
"#;
    let result = ReleasePolicy::from_yaml(yaml);
    assert!(matches!(result, Err(Error::InvalidYaml { .. })));
}

#[rstest]
fn test_parse_invalid_image_arch() {
    let yaml = r#"
api: distrel/v0
image_architectures: [arm/7]
"#;
    assert!(ReleasePolicy::from_yaml(yaml).is_err());
}

#[rstest]
fn test_yaml_round_trip() {
    let mut policy = ReleasePolicy::default();
    policy.image_architectures.push(ImageArch::new("arm", "7"));
    let yaml = policy.to_yaml().unwrap();
    assert!(yaml.contains("arm/v7"));
    assert_eq!(ReleasePolicy::from_yaml(yaml).unwrap(), policy);
}

#[rstest]
fn test_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(crate::POLICY_FILENAME);
    std::fs::write(&path, "api: distrel/v0\nimage_prefixes: [custom]\n").unwrap();

    let policy = ReleasePolicy::load(&path).expect("Should load policy");
    assert_eq!(policy.image_prefixes, vec!["custom"]);
}

#[rstest]
fn test_load_missing_file() {
    let tmp = TempDir::new().unwrap();
    let result = ReleasePolicy::load(tmp.path().join("missing.yaml"));
    assert!(matches!(result, Err(Error::ReadFailed { .. })));
}

#[rstest]
fn test_validate_rejects_self_containing_public_name() {
    let policy = ReleasePolicy {
        image_name: ImageNameSubstitution {
            internal: "col".to_string(),
            public: "collector".to_string(),
        },
        ..Default::default()
    };
    assert!(matches!(policy.validate(), Err(Error::InvalidPolicy(_))));
}

#[rstest]
#[case::empty_project(ReleasePolicy { project_name: " ".to_string(), ..Default::default() })]
#[case::empty_prefix(ReleasePolicy { image_prefixes: vec![String::new()], ..Default::default() })]
#[case::no_os(ReleasePolicy { target_os: Vec::new(), ..Default::default() })]
#[case::no_arch(ReleasePolicy { architectures: Vec::new(), ..Default::default() })]
#[case::empty_arm(ReleasePolicy { arm_versions: vec![String::new()], ..Default::default() })]
#[case::empty_image_os(ReleasePolicy { image_os: String::new(), ..Default::default() })]
#[case::no_image_arch(ReleasePolicy { image_architectures: Vec::new(), ..Default::default() })]
#[case::duplicate_prefix(ReleasePolicy {
    image_prefixes: vec!["otel".to_string(), "otel".to_string()],
    ..Default::default()
})]
#[case::duplicate_image_arch(ReleasePolicy {
    image_architectures: vec![ImageArch::new("amd64", ""), ImageArch::new("amd64", "")],
    ..Default::default()
})]
fn test_validate_rejects(#[case] policy: ReleasePolicy) {
    assert!(matches!(policy.validate(), Err(Error::InvalidPolicy(_))));
}

#[rstest]
fn test_image_architectures_match_builds() {
    let policy = ReleasePolicy {
        architectures: vec!["amd64".to_string(), "arm64".to_string(), "arm".to_string()],
        arm_versions: vec!["7".to_string()],
        image_architectures: vec![ImageArch::new("amd64", ""), ImageArch::new("arm", "7")],
        ..Default::default()
    };
    policy.validate().expect("Should accept images backed by builds");
}

#[rstest]
#[case::unknown_arch("s390x", &["amd64", "arm64"])]
#[case::arm_not_built("arm/v7", &["amd64", "arm64"])]
#[case::unknown_arm_version("arm/v6", &["amd64", "arm"])]
fn test_image_architectures_without_builds(
    #[case] image_arch: &str,
    #[case] architectures: &[&str],
) {
    let policy = ReleasePolicy {
        architectures: architectures.iter().map(|a| a.to_string()).collect(),
        arm_versions: vec!["7".to_string()],
        image_architectures: vec![image_arch.parse().expect("Should parse image arch")],
        ..Default::default()
    };

    let err = policy.validate().expect_err("Should reject image without build");
    let Error::InvalidPolicy(message) = err else {
        panic!("Expected invalid policy, got {err:?}");
    };
    assert!(message.contains(image_arch));
}

#[rstest]
fn test_validate_allows_empty_prefix_list() {
    let policy = ReleasePolicy {
        image_prefixes: Vec::new(),
        ..Default::default()
    };
    policy.validate().expect("Empty prefix list is allowed");
}

#[rstest]
#[case("amd64", "amd64", "", "amd64")]
#[case("arm/v7", "arm", "7", "armv7")]
#[case("arm64/v8", "arm64", "8", "arm64v8")]
fn test_image_arch_parse(
    #[case] input: &str,
    #[case] goarch: &str,
    #[case] goarm: &str,
    #[case] tag: &str,
) {
    let arch = ImageArch::parse(input).expect("Should parse");
    assert_eq!(arch.goarch, goarch);
    assert_eq!(arch.goarm, goarm);
    assert_eq!(arch.docker_arch(), input);
    assert_eq!(arch.tag(), tag);
}

#[rstest]
#[case("")]
#[case("arm/")]
#[case("/v7")]
#[case("arm/7")]
#[case("arm/v")]
#[case("arm/v7/x")]
fn test_image_arch_parse_invalid(#[case] input: &str) {
    assert!(matches!(
        ImageArch::parse(input),
        Err(Error::InvalidImageArch(_))
    ));
}
