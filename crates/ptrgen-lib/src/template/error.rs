//! Template errors and their rendering.

use std::io;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// Errors raised while defining templates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template `{name}` is defined more than once")]
    Duplicate { name: String },

    #[error("template `{template}`: {message}")]
    Syntax {
        template: String,
        message: String,
        /// Byte range of the offending tag in `text`.
        span: Range<usize>,
        /// Full text of the template.
        text: String,
    },
}

impl TemplateError {
    /// Render the error, with an annotated excerpt for syntax errors.
    pub fn render(&self, colored: bool) -> String {
        let TemplateError::Syntax {
            template,
            message,
            span,
            text,
        } = self
        else {
            return self.to_string();
        };

        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let snippet = Snippet::source(text.as_str())
            .line_start(1)
            .path(template.as_str())
            .annotation(AnnotationKind::Primary.span(span.clone()).label(message.as_str()));

        let report: Vec<Group> = vec![Level::ERROR.primary_title(message.as_str()).element(snippet)];
        renderer.render(&report).to_string()
    }
}

/// Errors raised while rendering a template.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("no template named `{0}`")]
    UnknownTemplate(String),

    #[error("template `{template}` refers to undefined value `{name}`")]
    UnknownValue { template: String, name: String },

    #[error("template `{template}` expects `{name}` to be {expected}")]
    WrongShape {
        template: String,
        name: String,
        expected: &'static str,
    },

    #[error("template includes nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
