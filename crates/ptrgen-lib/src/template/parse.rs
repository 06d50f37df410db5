//! Template parsing.

use std::ops::Range;

use crate::utils::is_identifier;

use super::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Parsed template element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    Text(String),
    Value(String),
    Include(String),
    Each { list: String, body: Vec<Node> },
    If { name: String, body: Vec<Node> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BlockKind {
    Each,
    If,
}

impl BlockKind {
    fn keyword(self) -> &'static str {
        match self {
            BlockKind::Each => "each",
            BlockKind::If => "if",
        }
    }
}

enum Tag<'a> {
    Value(&'a str),
    Include(&'a str),
    Open(BlockKind, &'a str),
    Close(&'a str),
}

/// A block whose closing tag has not been seen yet.
struct OpenBlock {
    kind: BlockKind,
    name: String,
    span: Range<usize>,
    nodes: Vec<Node>,
}

pub(crate) fn parse(template: &str, text: &str) -> Result<Vec<Node>, TemplateError> {
    let syntax = |span: Range<usize>, message: String| TemplateError::Syntax {
        template: template.to_string(),
        message,
        span,
        text: text.to_string(),
    };

    let mut root: Vec<Node> = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(OPEN) {
        let start = cursor + offset;
        let inner_start = start + OPEN.len();
        let Some(inner_len) = text[inner_start..].find(CLOSE) else {
            return Err(syntax(start..text.len(), "unterminated tag".to_string()));
        };
        let end = inner_start + inner_len + CLOSE.len();
        let span = start..end;

        let tag = classify(&text[inner_start..inner_start + inner_len])
            .map_err(|message| syntax(span.clone(), message))?;

        let standalone = match tag {
            Tag::Value(_) => None,
            _ => standalone_line(text, start, end),
        };
        let (text_end, next) = match standalone {
            Some((line_start, line_end)) => (line_start.max(cursor), line_end),
            None => (start, end),
        };
        push_text(current(&mut root, &mut stack), &text[cursor..text_end]);
        cursor = next;

        match tag {
            Tag::Value(name) => {
                current(&mut root, &mut stack).push(Node::Value(name.to_string()));
            }
            Tag::Include(name) => {
                current(&mut root, &mut stack).push(Node::Include(name.to_string()));
            }
            Tag::Open(kind, name) => stack.push(OpenBlock {
                kind,
                name: name.to_string(),
                span,
                nodes: Vec::new(),
            }),
            Tag::Close(keyword) => {
                let Some(block) = stack.pop() else {
                    return Err(syntax(
                        span,
                        format!("closing tag `/{keyword}` has no matching opening tag"),
                    ));
                };
                if block.kind.keyword() != keyword {
                    return Err(syntax(
                        span,
                        format!(
                            "expected closing tag `/{}`, found `/{keyword}`",
                            block.kind.keyword()
                        ),
                    ));
                }

                let node = match block.kind {
                    BlockKind::Each => Node::Each {
                        list: block.name,
                        body: block.nodes,
                    },
                    BlockKind::If => Node::If {
                        name: block.name,
                        body: block.nodes,
                    },
                };
                current(&mut root, &mut stack).push(node);
            }
        }
    }

    push_text(current(&mut root, &mut stack), &text[cursor..]);

    if let Some(block) = stack.pop() {
        return Err(syntax(
            block.span,
            format!(
                "block `#{} {}` is never closed",
                block.kind.keyword(),
                block.name
            ),
        ));
    }

    Ok(root)
}

fn classify(inner: &str) -> Result<Tag<'_>, String> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Err("empty tag".to_string());
    }

    if let Some(rest) = inner.strip_prefix('>') {
        let name = rest.trim();
        if name.is_empty() {
            return Err("include tag needs a template name".to_string());
        }
        return Ok(Tag::Include(name));
    }

    if let Some(rest) = inner.strip_prefix('#') {
        let (keyword, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let kind = match keyword {
            "each" => BlockKind::Each,
            "if" => BlockKind::If,
            other => return Err(format!("unknown block `#{other}`")),
        };
        let name = name.trim();
        if !is_identifier(name) {
            return Err(format!("block `#{keyword}` needs a value name"));
        }
        return Ok(Tag::Open(kind, name));
    }

    if let Some(rest) = inner.strip_prefix('/') {
        return Ok(Tag::Close(rest.trim()));
    }

    if !is_identifier(inner) {
        return Err(format!("`{inner}` is not a value name"));
    }
    Ok(Tag::Value(inner))
}

/// If the tag at `start..end` is alone on its line, return the range of the
/// whole line including its newline.
fn standalone_line(text: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i + 1);

    let blank = |s: &str| s.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    (blank(&text[line_start..start]) && blank(&text[end..line_end])).then_some((line_start, line_end))
}

fn current<'n>(root: &'n mut Vec<Node>, stack: &'n mut [OpenBlock]) -> &'n mut Vec<Node> {
    match stack.last_mut() {
        Some(block) => &mut block.nodes,
        None => root,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Node::Text(prev)) = nodes.last_mut() {
        prev.push_str(text);
        return;
    }
    nodes.push(Node::Text(text.to_string()));
}
