//! Print the token stream of a query.

use cardql_lib::tokenize;

use super::query_loader::QueryInput;
use super::run_common::{load_query, report_and_exit};

pub struct TokensArgs {
    pub input: QueryInput,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let query = load_query(&args.input);

    let tokens = match tokenize(&query.text) {
        Ok(tokens) => tokens,
        Err(err) => report_and_exit(&err, &query, args.color),
    };

    for token in tokens {
        println!("{}", token);
    }
}
