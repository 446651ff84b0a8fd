//! Tests for the check subcommand and global flags.

use super::parse;
use crate::cli::{Cli, CliCommand, Toggle};
use clap::Parser;

#[test]
fn cli_parse_check_chain() {
    match parse(&[
        "trustgate",
        "check",
        "https://cdn.example.com/x",
        "https://browseros.com/installer.exe",
    ]) {
        CliCommand::Check {
            urls,
            safe_browsing,
            json,
        } => {
            assert_eq!(
                urls,
                vec![
                    "https://cdn.example.com/x".to_string(),
                    "https://browseros.com/installer.exe".to_string()
                ]
            );
            assert!(safe_browsing.is_none());
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_overrides() {
    match parse(&[
        "trustgate",
        "check",
        "--safe-browsing",
        "off",
        "--json",
        "https://example.com/x",
    ]) {
        CliCommand::Check {
            safe_browsing,
            json,
            ..
        } => {
            assert_eq!(safe_browsing, Some(Toggle::Off));
            assert!(!Toggle::Off.enabled());
            assert!(json);
        }
        _ => panic!("expected Check with overrides"),
    }
}

#[test]
fn cli_parse_check_requires_url() {
    assert!(Cli::try_parse_from(["trustgate", "check"]).is_err());
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from([
        "trustgate",
        "check",
        "https://example.com/x",
        "--config",
        "/tmp/trustgate.toml",
    ])
    .unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/trustgate.toml"))
    );
}
