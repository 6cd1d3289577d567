use crate::{Cli, Commands, parse_key_value};

use clap::Parser;

#[test]
fn given_name_and_value_when_parsed_then_split_on_first_equals() {
    assert_eq!(
        parse_key_value("securitytenant=a=b"),
        Ok(("securitytenant".to_string(), "a=b".to_string()))
    );
}

#[test]
fn given_empty_value_when_parsed_then_kept_empty() {
    assert_eq!(
        parse_key_value("securitytenant="),
        Ok(("securitytenant".to_string(), String::new()))
    );
}

#[test]
fn given_missing_equals_or_name_when_parsed_then_error() {
    assert!(parse_key_value("securitytenant").is_err());
    assert!(parse_key_value("=ops").is_err());
}

#[test]
fn given_resolve_flags_when_cli_parsed_then_args_collected_in_order() {
    // Given
    let argv = [
        "tenancy",
        "resolve",
        "--username",
        "alice",
        "--role",
        "analyst",
        "--tenant",
        "ops",
        "--tenant",
        "alice",
        "--query",
        "security_tenant=ops",
        "--header",
        "securitytenant=finance",
        "--cookie-tenant",
        "",
        "--explain",
        "--pretty",
    ];

    // When
    let cli = Cli::try_parse_from(argv).unwrap();

    // Then
    assert!(cli.pretty);
    let Commands::Resolve(args) = cli.command else {
        panic!("expected resolve command");
    };
    assert_eq!(args.username.as_deref(), Some("alice"));
    assert_eq!(args.roles, vec!["analyst".to_string()]);
    assert_eq!(args.tenants, vec!["ops".to_string(), "alice".to_string()]);
    assert_eq!(
        args.query,
        vec![("security_tenant".to_string(), "ops".to_string())]
    );
    assert_eq!(
        args.headers,
        vec![("securitytenant".to_string(), "finance".to_string())]
    );
    assert_eq!(args.cookie_tenant.as_deref(), Some(""));
    assert!(args.explain);
}

#[test]
fn given_malformed_query_when_cli_parsed_then_error() {
    let result = Cli::try_parse_from(["tenancy", "resolve", "--query", "nope"]);

    assert!(result.is_err());
}

#[test]
fn given_config_command_with_path_when_cli_parsed_then_path_kept() {
    let cli = Cli::try_parse_from(["tenancy", "config", "--config", "/etc/tenancy.toml"]).unwrap();

    assert!(matches!(cli.command, Commands::Config));
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/tenancy.toml"))
    );
}
