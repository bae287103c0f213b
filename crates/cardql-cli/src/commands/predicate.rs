//! Compile a query and print the predicate as JSON.

use cardql_lib::ParseOptions;

use super::query_loader::QueryInput;
use super::run_common::{load_query, parse_query};

pub struct PredicateArgs {
    pub input: QueryInput,
    pub options: ParseOptions,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: PredicateArgs) {
    let query = load_query(&args.input);
    let predicate = parse_query(&query, args.options, args.color).predicate();

    let json = if args.compact {
        serde_json::to_string(&predicate)
    } else {
        serde_json::to_string_pretty(&predicate)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: failed to serialize predicate: {}", err);
            std::process::exit(1);
        }
    }
}
