//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Query input: positional file, `-` for stdin, or -q text
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Conversion into command args (chaining mode, color)

use std::path::PathBuf;

use cardql_lib::Chaining;

use super::*;
use crate::cli::commands::{ast_command, check_command, predicate_command, tokens_command};
use crate::commands::ast::AstArgs;
use crate::commands::predicate::PredicateArgs;

#[test]
fn tokens_accepts_inline_query() {
    let result = tokens_command().try_get_matches_from(["tokens", "-q", "c=UR"]);
    assert!(result.is_ok(), "tokens should accept -q: {:?}", result.err());

    let params = TokensParams::from_matches(&result.unwrap());
    assert_eq!(params.query_text.as_deref(), Some("c=UR"));
    assert_eq!(params.query_path, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn tokens_accepts_stdin_marker() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "-"])
        .unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.query_path, Some(PathBuf::from("-")));
}

#[test]
fn inline_query_may_start_with_hyphen() {
    let m = check_command()
        .try_get_matches_from(["check", "-q", "-cmc"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.query_text.as_deref(), Some("-cmc"));
}

#[test]
fn path_and_inline_query_conflict() {
    let result = check_command().try_get_matches_from(["check", "saved.cql", "-q", "cmc<4"]);

    assert!(result.is_err());
}

#[test]
fn ast_legacy_chaining() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-q", "name=a OR name=b", "--legacy-chaining"])
        .unwrap();
    let args: AstArgs = AstParams::from_matches(&m).into();

    assert_eq!(args.options.chaining, Chaining::Legacy);
    assert_eq!(args.input.text.as_deref(), Some("name=a OR name=b"));
}

#[test]
fn ast_defaults_to_left_to_right() {
    let m = ast_command()
        .try_get_matches_from(["ast", "saved.cql"])
        .unwrap();
    let args: AstArgs = AstParams::from_matches(&m).into();

    assert_eq!(args.options.chaining, Chaining::LeftToRight);
    assert_eq!(args.input.path, Some(PathBuf::from("saved.cql")));
}

#[test]
fn check_color_choices() {
    for (flag, expected) in [
        ("always", ColorChoice::Always),
        ("never", ColorChoice::Never),
        ("auto", ColorChoice::Auto),
    ] {
        let m = check_command()
            .try_get_matches_from(["check", "-q", "cmc<4", "--color", flag])
            .unwrap();
        assert_eq!(CheckParams::from_matches(&m).color, expected);
    }
}

#[test]
fn check_rejects_unknown_color() {
    let result =
        check_command().try_get_matches_from(["check", "-q", "cmc<4", "--color", "sometimes"]);

    assert!(result.is_err());
}

#[test]
fn predicate_compact() {
    let m = predicate_command()
        .try_get_matches_from(["predicate", "-q", "cmc<4", "--compact", "--color", "never"])
        .unwrap();
    let args: PredicateArgs = PredicateParams::from_matches(&m).into();

    assert!(args.compact);
    assert!(!args.color);
}

#[test]
fn tokens_has_no_legacy_flag() {
    let result =
        tokens_command().try_get_matches_from(["tokens", "-q", "a=b", "--legacy-chaining"]);

    assert!(result.is_err());
}

#[test]
fn verbose_is_global() {
    let m = build_cli()
        .try_get_matches_from(["cardql", "check", "-q", "cmc<4", "-vv"])
        .unwrap();

    assert_eq!(m.get_count("verbose"), 2);
    assert!(matches!(m.subcommand(), Some(("check", _))));
}

#[test]
fn fields_takes_no_query() {
    let result = build_cli().try_get_matches_from(["cardql", "fields", "-q", "cmc<4"]);

    assert!(result.is_err());
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["cardql"]);

    assert!(result.is_err());
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
