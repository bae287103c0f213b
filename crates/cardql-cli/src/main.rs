mod cli;
mod commands;
mod logging;

use cli::{AstParams, CheckParams, PredicateParams, TokensParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("predicate", m)) => {
            let params = PredicateParams::from_matches(m);
            commands::predicate::run(params.into());
        }
        Some(("fields", _)) => commands::fields::run(),
        _ => unreachable!("clap should have caught this"),
    }
}
