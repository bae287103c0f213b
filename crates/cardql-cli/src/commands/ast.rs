//! Print the AST of a query.

use cardql_lib::ParseOptions;

use super::query_loader::QueryInput;
use super::run_common::{load_query, parse_query};

pub struct AstArgs {
    pub input: QueryInput,
    pub options: ParseOptions,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let query = load_query(&args.input);
    let parsed = parse_query(&query, args.options, args.color);

    print!("{}", parsed.format_tree());
}
