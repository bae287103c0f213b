//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use cardql_lib::{Chaining, ParseOptions};
use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::predicate::PredicateArgs;
use crate::commands::query_loader::QueryInput;
use crate::commands::tokens::TokensArgs;

pub struct TokensParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: QueryInput::new(p.query_path, p.query_text),
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub legacy_chaining: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            legacy_chaining: m.get_flag("legacy_chaining"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: QueryInput::new(p.query_path, p.query_text),
            options: parse_options(p.legacy_chaining),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub legacy_chaining: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            legacy_chaining: m.get_flag("legacy_chaining"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: QueryInput::new(p.query_path, p.query_text),
            options: parse_options(p.legacy_chaining),
            color: p.color.should_colorize(),
        }
    }
}

pub struct PredicateParams {
    pub query_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub legacy_chaining: bool,
    pub compact: bool,
    pub color: ColorChoice,
}

impl PredicateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query_path: m.get_one::<PathBuf>("query_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            legacy_chaining: m.get_flag("legacy_chaining"),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<PredicateParams> for PredicateArgs {
    fn from(p: PredicateParams) -> Self {
        Self {
            input: QueryInput::new(p.query_path, p.query_text),
            options: parse_options(p.legacy_chaining),
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_options(legacy_chaining: bool) -> ParseOptions {
    let chaining = if legacy_chaining {
        Chaining::Legacy
    } else {
        Chaining::LeftToRight
    };
    ParseOptions { chaining }
}
