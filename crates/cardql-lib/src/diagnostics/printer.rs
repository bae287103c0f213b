//! Builder-pattern printer for rendering a query error.

use std::fmt::{self, Write};

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use crate::error::Error;

/// Renders one [`Error`], with a source excerpt when the query text is known.
pub struct ErrorPrinter<'e, 's> {
    error: &'e Error,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ErrorPrinter<'e, 's> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        let Some(source) = self.source else {
            return write!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.to_string();
        let range = adjust_range(self.error.span(), source.len());

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range.clone()).label(&message));

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let mut report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];

        let fix = self.error.fix();
        if let Some(fix) = &fix {
            report.push(
                Level::HELP.secondary_title(&fix.description).element(
                    Snippet::source(source)
                        .line_start(1)
                        .patch(Patch::new(range, &fix.replacement)),
                ),
            );
        }

        write!(w, "{}", renderer.render(&report))
    }
}

impl fmt::Display for ErrorPrinter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format(f)
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }
}
