//! Tests for functional options.

use patterns::domain::{set_addr, set_db_uri, set_log_file, set_timeout, ServiceConfig};

#[test]
fn given_addr_and_db_uri_when_building_then_display_matches() {
    let config = ServiceConfig::new(vec![set_addr("Some addr"), set_db_uri("db uri")]);

    assert_eq!(
        config.to_string(),
        "config {addr:Some addr, dburi:db uri, timeout:0, logFile:}"
    );
}

#[test]
fn given_all_options_when_building_then_every_field_set() {
    let config = ServiceConfig::new(vec![
        set_addr("localhost:8080"),
        set_db_uri("postgres://db"),
        set_timeout(30),
        set_log_file("/var/log/app.log"),
    ]);

    assert_eq!(config.addr, "localhost:8080");
    assert_eq!(config.db_uri, "postgres://db");
    assert_eq!(config.timeout, 30);
    assert_eq!(config.log_file, "/var/log/app.log");
}

#[test]
fn given_repeated_option_when_building_then_last_wins() {
    let config = ServiceConfig::new(vec![set_timeout(5), set_addr("a"), set_timeout(10)]);

    assert_eq!(config.timeout, 10);
    assert_eq!(config.addr, "a");
}

#[test]
fn given_option_iterator_when_building_then_accepted() {
    let addrs = ["first", "second"];
    let config = ServiceConfig::new(addrs.iter().map(|a| set_addr(*a)));

    assert_eq!(config.addr, "second");
}
