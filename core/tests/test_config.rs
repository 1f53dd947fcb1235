//! Tests for GeneratorConfig

use hash_random_core::{Algorithm, AnyHashRandom, ConfigError, GeneratorConfig, HashRandom, Sha256Random};

#[test]
fn test_parse_full_config() {
    let config = GeneratorConfig::from_json(
        r#"{"algorithm": "sha256", "seed": "42", "start_position": 10}"#,
    )
    .unwrap();

    assert_eq!(config.algorithm, Algorithm::Sha256);
    assert_eq!(config.seed.as_deref(), Some("42"));
    assert_eq!(config.start_position, Some(10));
}

#[test]
fn test_built_generator_matches_direct_construction() {
    for algorithm in Algorithm::ALL {
        let mut built = GeneratorConfig::new(algorithm, "42").build().unwrap();
        let mut direct = AnyHashRandom::new(algorithm, "42");
        assert_eq!(built.algorithm(), algorithm);
        for _ in 0..10 {
            assert_eq!(built.next_long(), direct.next_long());
        }
    }
}

#[test]
fn test_start_position_seeks_counter_generator() {
    let config = GeneratorConfig::from_json(
        r#"{"algorithm": "sha256", "seed": "42", "start_position": 2}"#,
    )
    .unwrap();
    let mut built = config.build().unwrap();

    let mut direct = Sha256Random::new("42");
    direct.seek(2);
    assert_eq!(built.next_long(), direct.next_long());
}

#[test]
fn test_start_position_rejected_for_feedback() {
    let config = GeneratorConfig::from_json(
        r#"{"algorithm": "md5", "seed": "42", "start_position": 2}"#,
    )
    .unwrap();
    let err = config.build().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
    assert!(err.to_string().contains("md5"), "got: {}", err);
}

#[test]
fn test_missing_seed_uses_clock() {
    let config = GeneratorConfig::from_json(r#"{"algorithm": "sha512"}"#).unwrap();
    let rng = config.build().unwrap();
    let secs: u64 = rng.seed().as_str().parse().expect("clock seed is whole seconds");
    assert!(secs > 1_600_000_000);
}

#[test]
fn test_unknown_algorithm_is_reported_by_name() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": "crc32", "seed": "1"}"#).unwrap_err();
    assert_eq!(err, ConfigError::UnknownAlgorithm("crc32".to_string()));
    assert_eq!(
        err.to_string(),
        "Unknown algorithm: crc32 (expected sha256, sha512 or md5)"
    );
}

#[test]
fn test_algorithm_names_match_from_str_rules() {
    for name in ["SHA256", "Sha-256", " sha256 "] {
        let json = format!(r#"{{"algorithm": "{}", "seed": "1"}}"#, name);
        let config = GeneratorConfig::from_json(&json).unwrap();
        assert_eq!(config.algorithm, name.parse::<Algorithm>().unwrap());
        assert_eq!(config.algorithm, Algorithm::Sha256);
    }
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = GeneratorConfig::from_json(r#"{"algorithm": 7}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_json_round_trip() {
    let config = GeneratorConfig::new(Algorithm::Md5, "round");
    let json = config.to_json().unwrap();
    assert_eq!(json, r#"{"algorithm":"md5","seed":"round","start_position":null}"#);
    assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
}
