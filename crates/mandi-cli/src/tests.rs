use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["mandi-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.content_dir.is_none());
}

#[test]
fn parses_validate_command() {
    let cli = Cli::try_parse_from(["mandi-cli", "validate"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Validate { json: false })
    ));
}

#[test]
fn content_dir_is_global() {
    let cli = Cli::try_parse_from(["mandi-cli", "tree", "--content-dir", "/srv/content"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Tree)));
    assert_eq!(cli.content_dir, Some(PathBuf::from("/srv/content")));

    let cli = Cli::try_parse_from(["mandi-cli", "--content-dir", "./c", "paths", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Paths { json: true })));
    assert_eq!(cli.content_dir, Some(PathBuf::from("./c")));
}

#[test]
fn search_defaults_to_full_text_without_limit() {
    let cli = Cli::try_parse_from(["mandi-cli", "search", "candle"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref query,
            suggest: false,
            limit: None,
        }) if query == "candle"
    ));
}

#[test]
fn search_accepts_suggest_and_limit() {
    let cli = Cli::try_parse_from(["mandi-cli", "search", "diya", "--suggest", "--limit", "3"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            suggest: true,
            limit: Some(3),
            ..
        })
    ));
}

#[test]
fn search_requires_query() {
    assert!(Cli::try_parse_from(["mandi-cli", "search"]).is_err());
}

#[test]
fn parses_enquiry_slug() {
    let cli = Cli::try_parse_from(["mandi-cli", "enquiry", "brass-diya"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Enquiry { ref slug }) if slug == "brass-diya"
    ));
}

#[test]
fn slugify_collects_every_word() {
    let cli = Cli::try_parse_from(["mandi-cli", "slugify", "Wall", "Art"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Slugify { text }) => {
            assert_eq!(mandi_core::slugify(&text.join(" ")), "wall-art");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn slugify_requires_text() {
    assert!(Cli::try_parse_from(["mandi-cli", "slugify"]).is_err());
}
