use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.public_dir, PathBuf::from("public"));
    assert_eq!(config.port, None);
}

#[test]
fn public_dir_and_port_are_read() {
    let config = ServerConfig::from_lookup(lookup(&[("PUBLIC_DIR", "/srv/folio"), ("PORT", "8080")])).unwrap();
    assert_eq!(config.public_dir, PathBuf::from("/srv/folio"));
    assert_eq!(config.port, Some(8080));
}

#[test]
fn values_are_trimmed_and_blank_means_unset() {
    let config = ServerConfig::from_lookup(lookup(&[("PUBLIC_DIR", "   "), ("PORT", " 3000 ")])).unwrap();
    assert_eq!(config.public_dir, PathBuf::from("public"));
    assert_eq!(config.port, Some(3000));
}

#[test]
fn invalid_ports_are_rejected() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()), "expected rejection for {raw:?}");
    }
}

#[test]
fn invalid_port_message_names_value() {
    let err = ConfigError::InvalidPort("abc".to_owned());
    assert_eq!(err.to_string(), "invalid PORT \"abc\": expected an integer between 1 and 65535");
}

#[test]
fn from_env_reads_process_environment() {
    // Only asserts it does not fail on the ambient environment when PORT is
    // unset or valid; CI may export a PORT.
    if std::env::var("PORT").map_or(true, |p| p.trim().parse::<u16>().is_ok_and(|n| n != 0)) {
        assert!(ServerConfig::from_env().is_ok());
    }
}
