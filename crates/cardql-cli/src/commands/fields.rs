//! List the fields a query can filter on.

use cardql_lib::{FieldFilter, QueryParser};

pub fn run() {
    print!("{}", render(QueryParser::default().filters()));
}

pub(crate) fn render(filters: &[FieldFilter]) -> String {
    let width = filters.iter().map(|f| f.name().len()).max().unwrap_or(0);

    let mut out = String::new();
    for filter in filters {
        let aliases = if filter.aliases().is_empty() {
            String::new()
        } else {
            format!(" ({})", filter.aliases().join(", "))
        };
        let operators: Vec<&str> = filter.operators().map(|op| op.as_str()).collect();
        out.push_str(&format!(
            "{:width$}  {}{}\n",
            filter.name(),
            operators.join(" "),
            aliases,
        ));
    }
    out
}
