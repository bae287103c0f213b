use cardql_lib::ParseOptions;

use super::query_loader::QueryInput;
use super::run_common::{load_query, parse_query};

pub struct CheckArgs {
    pub input: QueryInput,
    pub options: ParseOptions,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let query = load_query(&args.input);
    parse_query(&query, args.options, args.color);

    // Silent on success (like cargo check)
}
