//! Environment configuration as seen by a whole session.

use std::time::Duration;

use edlin::filter::EnvironmentPolicy;
use edlin::foundation::ErrorKind;
use edlin::runtime::EdlinConfig;

fn config(pairs: &[(&str, &str)]) -> edlin::foundation::Result<EdlinConfig> {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    EdlinConfig::from_lookup(move |key| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    })
}

#[test]
fn defaults_without_variables() {
    let config = config(&[]).unwrap();
    assert_eq!(config.prompt, "edlin> ");
    assert_eq!(config.filter.timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.filter.environment, EnvironmentPolicy::PathOnly);
    assert!(!config.filter.require_success);
}

#[test]
fn variables_override_defaults() {
    let config = config(&[
        ("EDLIN_SHELL", "/bin/bash"),
        ("EDLIN_FILTER_TIMEOUT", "5"),
        ("EDLIN_FILTER_ENV", "inherit"),
        ("EDLIN_FILTER_STRICT", "yes"),
    ])
    .unwrap();
    assert_eq!(config.filter.shell.to_str(), Some("/bin/bash"));
    assert_eq!(config.filter.timeout, Some(Duration::from_secs(5)));
    assert_eq!(config.filter.environment, EnvironmentPolicy::InheritAll);
    assert!(config.filter.require_success);
}

#[test]
fn malformed_variable_is_named() {
    let err = config(&[("EDLIN_FILTER_TIMEOUT", "soon")]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Config { .. }));
    assert!(err.to_string().contains("EDLIN_FILTER_TIMEOUT"));
}
