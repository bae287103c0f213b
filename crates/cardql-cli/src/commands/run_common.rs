//! Shared plumbing for commands that read and compile a query.

use cardql_lib::{Error, ParseOptions, Query, QueryParser};

use super::query_loader::{LoadedQuery, QueryInput};

pub fn load_query(input: &QueryInput) -> LoadedQuery {
    match input.load() {
        Ok(query) => query,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

pub fn parse_query(query: &LoadedQuery, options: ParseOptions, color: bool) -> Query {
    let parser = QueryParser::default().with_options(options);
    match parser.parse(&query.text) {
        Ok(parsed) => parsed,
        Err(err) => report_and_exit(&err, query, color),
    }
}

/// Renders `err` against the query text on stderr and exits with status 1.
pub fn report_and_exit(err: &Error, query: &LoadedQuery, color: bool) -> ! {
    tracing::debug!(kind = ?err.kind(), "query rejected");

    let mut printer = err.printer().source(&query.text).colored(color);
    if let Some(origin) = &query.origin {
        printer = printer.path(origin);
    }
    eprintln!("{}", printer.render());
    std::process::exit(1);
}
