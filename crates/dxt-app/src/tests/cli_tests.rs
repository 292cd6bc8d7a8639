use std::path::PathBuf;

use clap::Parser;

use crate::{Cli, Command, Format};

#[test]
fn parses_lookup() {
    let cli = Cli::try_parse_from(["dxtionary", "lookup", "Winter"]).unwrap();

    match cli.command {
        Command::Lookup { word, json } => {
            assert_eq!(word, "Winter");
            assert!(!json);
        }
        other => panic!("Wrong command: {:?}", other),
    }
}

#[test]
fn parses_import_with_format_and_target() {
    let cli = Cli::try_parse_from([
        "dxtionary",
        "--profile",
        "main.json",
        "import",
        "dewiki.xml",
        "--format",
        "wiki",
        "--target",
        "/data",
    ])
    .unwrap();

    assert_eq!(cli.profile, Some(PathBuf::from("main.json")));
    match cli.command {
        Command::Import {
            file,
            format,
            target,
        } => {
            assert_eq!(file, PathBuf::from("dewiki.xml"));
            assert_eq!(format, Format::Wiki);
            assert_eq!(target, Some(PathBuf::from("/data")));
        }
        other => panic!("Wrong command: {:?}", other),
    }
}

#[test]
fn import_defaults_to_ding_format() {
    let cli = Cli::try_parse_from(["dxtionary", "import", "de-en.txt"]).unwrap();

    assert!(matches!(
        cli.command,
        Command::Import {
            format: Format::Ding,
            target: None,
            ..
        }
    ));
}

#[test]
fn rejects_missing_word() {
    assert!(Cli::try_parse_from(["dxtionary", "lookup"]).is_err());
}
