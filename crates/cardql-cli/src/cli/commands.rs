//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Add query input args (file/stdin positional, or inline text).
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_path_arg()).arg(query_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cardql")
        .about("Filter query language for card records")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(predicate_command())
        .subcommand(fields_command())
}

/// Print the token stream of a query.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the tokens of a query")
        .override_usage(
            "\
  cardql tokens <QUERY_FILE>
  cardql tokens -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  cardql tokens -q 'name="Static Orb" AND cmc<4'
  echo 'c=UR' | cardql tokens -"#,
        )
        .arg(color_arg());

    with_query_args(cmd)
}

/// Print the AST of a query.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Print the AST of a query")
        .override_usage(
            "\
  cardql ast <QUERY_FILE>
  cardql ast -q <TEXT> [--legacy-chaining]",
        )
        .after_help(
            r#"EXAMPLES:
  cardql ast -q 'name=orb OR cmc<2 AND c=U'
  cardql ast -q 'name=orb OR cmc<2 AND c=U' --legacy-chaining"#,
        )
        .arg(legacy_chaining_arg())
        .arg(color_arg());

    with_query_args(cmd)
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a query")
        .override_usage(
            "\
  cardql check <QUERY_FILE>
  cardql check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  cardql check saved.cql              # silent when valid
  cardql check -q 'nmae=orb'          # reports the error, exits with 1"#,
        )
        .arg(legacy_chaining_arg())
        .arg(color_arg());

    with_query_args(cmd)
}

/// Compile a query and print its predicate.
pub fn predicate_command() -> Command {
    let cmd = Command::new("predicate")
        .about("Compile a query and print the predicate as JSON")
        .override_usage(
            "\
  cardql predicate <QUERY_FILE> [--compact]
  cardql predicate -q <TEXT> [--compact]",
        )
        .arg(legacy_chaining_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_query_args(cmd)
}

/// List the default fields.
pub fn fields_command() -> Command {
    Command::new("fields").about("List queryable fields, their aliases and operators")
}
