use super::*;

#[test]
fn parses_check_with_skus() {
    let cli = Cli::try_parse_from([
        "stockcheck-cli",
        "check",
        "--zip-code",
        "23223",
        "--skus",
        "12345,54321",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Check { ref zip_code, skus: Some(ref skus) })
            if zip_code == "23223" && skus == "12345,54321"
    ));
}

#[test]
fn check_requires_zip_code() {
    assert!(Cli::try_parse_from(["stockcheck-cli", "check"]).is_err());
}

#[test]
fn parses_migrate_and_ping() {
    let cli = Cli::try_parse_from(["stockcheck-cli", "migrate"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Migrate)));

    let cli = Cli::try_parse_from(["stockcheck-cli", "ping"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Ping)));
}

#[test]
fn recent_defaults_to_twenty_rows() {
    let cli = Cli::try_parse_from(["stockcheck-cli", "recent"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Recent {
            sku: None,
            limit: 20
        })
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["stockcheck-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn check_event_omits_skus_when_not_given() {
    let event = check_event("23223".to_string(), None);
    let params = event.query_string_parameters.expect("params");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("zip_code").map(String::as_str), Some("23223"));
}

#[test]
fn check_event_passes_skus_through_verbatim() {
    let event = check_event("23223-1234".to_string(), Some(" 12345, 54321".to_string()));
    let params = event.query_string_parameters.expect("params");
    assert_eq!(params.get("skus").map(String::as_str), Some(" 12345, 54321"));
}
