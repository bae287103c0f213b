use cardql_core::{Card, ColorSet};
use indoc::indoc;
use rowan::{TextRange, TextSize};

use super::{Chaining, ParseOptions, QueryParser};
use crate::ast::{Combinator, Node};
use crate::error::{Error, Expected, ValueError};
use crate::filter::{FieldFilter, number_handler};
use crate::predicate::Predicate;
use crate::ql::{Operator, Token, TokenFamily};

fn parse(query: &str) -> crate::Result<crate::Query> {
    QueryParser::default().parse(query)
}

fn tree(query: &str) -> String {
    parse(query).expect("query should parse").format_tree()
}

fn legacy() -> QueryParser {
    QueryParser::default().with_options(ParseOptions {
        chaining: Chaining::Legacy,
    })
}

fn legacy_tree(query: &str) -> String {
    legacy()
        .parse(query)
        .expect("query should parse")
        .format_tree()
}

fn legacy_predicate(query: &str) -> Predicate {
    legacy().parse(query).expect("query should parse").predicate()
}

fn assert_send_sync<T: Send + Sync>() {}

fn matches(query: &str, card: &Card) -> bool {
    parse(query)
        .expect("query should parse")
        .predicate()
        .matches(card)
}

fn cmc(value: f64) -> Card {
    Card::new("test").with_cmc(value)
}

fn colored(letters: &str) -> Card {
    let colors: ColorSet = letters.parse().unwrap();
    Card::new("test").with_colors(colors)
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

#[test]
fn empty_query_matches_everything() {
    let query = parse("").unwrap();

    assert!(query.is_empty());
    assert_eq!(query.predicate(), Predicate::Always);
    insta::assert_snapshot!(query.format_tree(), @"Query");
}

#[test]
fn blank_query_is_empty() {
    assert!(parse("   ").unwrap().is_empty());
}

#[test]
fn single_expression() {
    insta::assert_snapshot!(tree(r#"name="Static Orb""#), @r#"
    Query
      Leaf name ~ "Static Orb"
    "#);
}

#[test]
fn chained_and() {
    let query = parse(r#"name="Static Orb" AND cmc<4"#).unwrap();

    assert_eq!(
        query.predicate(),
        Predicate::And(vec![
            Predicate::contains_fold("name", "Static Orb"),
            Predicate::compare("cmc", Operator::Lt, 4.0),
        ])
    );
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(parse("name=x or name=y"), parse("name=x OR name=y"));
    assert_eq!(parse("name=x And name=y"), parse("name=x AND name=y"));
}

#[test]
fn mixed_chain_left_to_right() {
    insta::assert_snapshot!(tree("name=a OR name=b AND cmc>2"), @r#"
    Query
      And
        Or
          Leaf name ~ "a"
          Leaf name ~ "b"
        Leaf cmc > 2
    "#);
}

#[test]
fn mixed_chain_legacy() {
    insta::assert_snapshot!(legacy_tree("name=a OR name=b AND cmc>2"), @r#"
    Query
      And
        Leaf name ~ "a"
        Or
          Leaf name ~ "b"
          Leaf cmc > 2
    "#);
}

#[test]
fn legacy_trailing_or_does_not_match_everything() {
    let predicate = legacy_predicate("name=orb OR name=sphere");

    assert!(!predicate.matches(&Card::new("Lightning Bolt")));
    assert!(predicate.matches(&Card::new("Static Orb")));
}

#[test]
fn legacy_or_differs_from_and() {
    assert_ne!(
        legacy_predicate("name=orb OR name=sphere"),
        legacy_predicate("name=orb AND name=sphere")
    );
    assert_eq!(
        legacy_predicate("name=orb OR name=sphere"),
        Predicate::contains_fold("name", "orb")
    );
}

#[test]
fn legacy_and_then_trailing_or() {
    let predicate = legacy_predicate("name=a AND cmc>2 OR name=z");

    assert_eq!(
        predicate,
        Predicate::And(vec![
            Predicate::contains_fold("name", "a"),
            Predicate::compare("cmc", Operator::Gt, 2.0),
        ])
    );
    assert!(predicate.matches(&Card::new("Static Orb").with_cmc(3.0)));
    assert!(!predicate.matches(&Card::new("Static Orb").with_cmc(1.0)));
    assert!(!predicate.matches(&Card::new("Fizz").with_cmc(3.0)));
}

#[test]
fn legacy_repeated_or_keeps_first() {
    let predicate = legacy_predicate("name=orb OR name=bolt OR name=sphere");

    assert_eq!(predicate, Predicate::contains_fold("name", "orb"));
    assert!(predicate.matches(&Card::new("Static Orb")));
    assert!(!predicate.matches(&Card::new("Lightning Bolt")));
}

#[test]
fn legacy_still_resolves_dropped_expressions() {
    let err = legacy().parse("name=orb OR foo=bar").unwrap_err();

    assert!(matches!(err, Error::NoField { .. }));
}

#[test]
fn parser_is_send_and_sync() {
    assert_send_sync::<QueryParser>();
    assert_send_sync::<FieldFilter>();
}

#[test]
fn adjacent_expressions_are_anded() {
    assert_eq!(parse("name=a cmc=1"), parse("name=a AND cmc=1"));
}

#[test]
fn stray_keywords_are_ignored() {
    assert_eq!(parse("AND name=a OR"), parse("name=a"));
    assert_eq!(parse("name=a AND OR name=b"), parse("name=a OR name=b"));
}

#[test]
fn numeric_comparisons() {
    assert!(matches("cmc<4", &cmc(3.0)));
    assert!(!matches("cmc<4", &cmc(4.0)));
    assert!(!matches("cmc<4", &cmc(5.0)));
    assert!(matches("cmc<=4", &cmc(4.0)));
    assert!(matches("cmc=>4", &cmc(4.0)));
    assert!(matches("cmc:2.5", &cmc(2.5)));
}

#[test]
fn color_exact() {
    assert!(matches("colors=RW", &colored("RW")));
    assert!(!matches("colors=RW", &colored("R")));
    assert!(!matches("colors=RW", &colored("RWU")));
    assert!(!matches("colors=RW", &colored("")));
}

#[test]
fn color_subset() {
    for letters in ["", "R", "W", "RW"] {
        assert!(matches("colors<RW", &colored(letters)), "{letters:?}");
    }
    assert!(!matches("colors<RW", &colored("RWU")));
}

#[test]
fn color_superset() {
    assert!(matches("colors>R", &colored("R")));
    assert!(matches("colors>R", &colored("RW")));
    assert!(!matches("colors>R", &colored("")));
    assert!(!matches("colors>R", &colored("W")));
}

#[test]
fn color_alias_end_to_end() {
    let query = parse("c=UR").unwrap();

    insta::assert_snapshot!(query.format_tree(), @"
    Query
      Leaf (colors has U AND colors has R AND colors lacks W AND colors lacks B AND colors lacks G)
    ");
    assert!(query.predicate().matches(&colored("UR")));
    assert!(!query.predicate().matches(&colored("URB")));
}

#[test]
fn quoted_keyword_is_a_value() {
    insta::assert_snapshot!(tree(r#"o="and" or o="or""#), @r#"
    Query
      Or
        Leaf oracle_text ~ "and"
        Leaf oracle_text ~ "or"
    "#);
}

#[test]
fn realistic_query() {
    let query = indoc! {r#"
        name="Static Orb" OR o=untap AND c<=UB AND cmc>=3
    "#};

    insta::assert_snapshot!(tree(query.trim_end()), @r#"
    Query
      And
        And
          Or
            Leaf name ~ "Static Orb"
            Leaf oracle_text ~ "untap"
          Leaf (colors lacks W AND colors lacks R AND colors lacks G)
        Leaf cmc >= 3
    "#);
}

#[test]
fn unknown_field() {
    let err = parse("foo=bar").unwrap_err();

    assert_eq!(
        err,
        Error::NoField {
            field: "foo".into(),
            suggestion: None,
            span: range(0, 3),
        }
    );
}

#[test]
fn unknown_field_suggests_close_name() {
    let err = parse("nmae=orb").unwrap_err();

    assert!(matches!(
        err,
        Error::NoField { ref suggestion, .. } if suggestion.as_deref() == Some("name")
    ));
}

#[test]
fn field_names_are_case_sensitive() {
    let err = parse("Name=orb").unwrap_err();

    assert!(matches!(err, Error::NoField { ref field, .. } if field == "Name"));
}

#[test]
fn unsupported_operator() {
    let err = parse("name>bar").unwrap_err();

    assert_eq!(
        err,
        Error::NoOperationForField {
            field: "name".into(),
            operator: Operator::Gt,
            span: range(4, 5),
        }
    );
}

#[test]
fn alias_error_names_canonical_field() {
    let err = parse("o<=draw").unwrap_err();

    assert!(matches!(
        err,
        Error::NoOperationForField { ref field, operator: Operator::Le, .. } if field == "oracle"
    ));
}

#[test]
fn not_equal_is_unsupported_by_default() {
    let err = parse("cmc!=3").unwrap_err();

    assert!(matches!(
        err,
        Error::NoOperationForField { operator: Operator::Ne, .. }
    ));
    assert_eq!(err.span(), range(3, 5));
}

#[test]
fn custom_filter_with_not_equal() {
    let mut parser = QueryParser::default();
    parser.register(FieldFilter::new("power").on(
        Operator::Ne,
        number_handler(|n| Predicate::compare("power", Operator::Ne, n)),
    ));

    let query = parser.parse("power!=2").unwrap();
    assert_eq!(query.predicate(), Predicate::compare("power", Operator::Ne, 2.0));
}

#[test]
fn register_replaces_same_name() {
    let parser = QueryParser::default()
        .with_filter(FieldFilter::new("name").on(Operator::Gt, |_| Ok(Predicate::Always)));

    assert_eq!(parser.filters().len(), 4);
    assert!(parser.parse("name=x").is_err());
    assert!(parser.parse("name>x").is_ok());
}

#[test]
fn invalid_number() {
    let err = parse("cmc<four").unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidValue { ref field, ref value, source: ValueError::InvalidNumber(_), .. }
            if field == "cmc" && value == "four"
    ));
    assert_eq!(err.span(), range(4, 8));
}

#[test]
fn invalid_color() {
    let err = parse("colors=UX").unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidValue { source: ValueError::UnknownColor(_), .. }
    ));
    insta::assert_snapshot!(err, @r#"invalid value "UX" for field "colors": unknown color: X"#);
}

#[test]
fn operator_in_field_position() {
    let err = parse("=name").unwrap_err();

    assert_eq!(
        err,
        Error::UnexpectedOperator {
            operator: "=".into(),
            span: range(0, 1),
        }
    );
}

#[test]
fn parentheses_are_rejected() {
    let err = parse("(name=a OR name=b)").unwrap_err();

    assert_eq!(err, Error::ParenthesesUnsupported { span: range(0, 1) });
}

#[test]
fn missing_operator_at_end() {
    let err = parse("name=a AND cmc").unwrap_err();

    assert_eq!(
        err,
        Error::UnexpectedEof {
            expected: Expected::Operator,
            span: range(14, 14),
        }
    );
}

#[test]
fn missing_value_at_end() {
    let err = parse("cmc<").unwrap_err();

    assert_eq!(
        err,
        Error::UnexpectedEof {
            expected: Expected::Value,
            span: range(4, 4),
        }
    );
}

#[test]
fn literal_where_operator_expected() {
    let err = parse("name orb").unwrap_err();

    assert_eq!(
        err,
        Error::ExpectedOperator {
            found: "orb".into(),
            span: range(5, 8),
        }
    );
}

#[test]
fn keyword_where_value_expected() {
    let err = parse("name= AND").unwrap_err();

    assert!(matches!(err, Error::ExpectedValue { ref found, .. } if found == "AND"));
}

#[test]
fn unterminated_quote_fails_before_parsing() {
    let err = parse(r#"foo="bar"#).unwrap_err();

    assert!(matches!(err, Error::UnterminatedQuote { .. }));
}

#[test]
fn unrecognized_keyword_from_hand_built_tokens() {
    let tokens = vec![Token::new(TokenFamily::Keyword, "XOR", range(0, 3))];
    let err = QueryParser::default().parse_tokens(tokens).unwrap_err();

    assert_eq!(
        err,
        Error::UnrecognizedKeyword {
            keyword: "XOR".into(),
            span: range(0, 3),
        }
    );
}

#[test]
fn operator_token_must_parse() {
    let tokens = vec![
        Token::new(TokenFamily::Literal, "cmc", range(0, 3)),
        Token::new(TokenFamily::Operator, "~", range(3, 4)),
        Token::new(TokenFamily::Literal, "1", range(4, 5)),
    ];
    let err = QueryParser::default().parse_tokens(tokens).unwrap_err();

    assert!(matches!(err, Error::ExpectedOperator { ref found, .. } if found == "~"));
}

#[test]
fn resolve_without_source() {
    let parser = QueryParser::default();

    let node = parser.resolve("c", Operator::Ge, "g").unwrap();
    assert_eq!(node, Node::Leaf(Predicate::has_color(cardql_core::Color::Green)));

    let err = parser.resolve("cmc", Operator::Ne, "1").unwrap_err();
    assert_eq!(err.span(), TextRange::default());
}

#[test]
fn empty_parser_knows_no_fields() {
    let err = QueryParser::empty().parse("name=x").unwrap_err();

    assert!(matches!(err, Error::NoField { suggestion: None, .. }));
}

#[test]
fn parse_options_from_json() {
    let options: ParseOptions = serde_json::from_str(r#"{"chaining":"legacy"}"#).unwrap();
    assert_eq!(options.chaining, Chaining::Legacy);

    let defaults: ParseOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, ParseOptions::default());
    assert_eq!(defaults.chaining, Chaining::LeftToRight);
}

#[test]
fn predicate_is_repeatable() {
    let query = parse("name=a OR cmc<2").unwrap();

    assert_eq!(query.predicate(), query.predicate());
}

#[test]
fn tree_shape_for_two_leaves() {
    let query = parse("name=a OR name=b").unwrap();

    assert_eq!(
        query.root(),
        Some(&Node::logic(
            Combinator::Or,
            Node::leaf(Predicate::contains_fold("name", "a")),
            Node::leaf(Predicate::contains_fold("name", "b")),
        ))
    );
}
