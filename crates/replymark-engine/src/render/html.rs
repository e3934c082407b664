use crate::parsing::{
    blocks::Block,
    inline::{InlineFormatter, InlineOptions, escape_html},
    parse_document,
};

use super::DEFAULT_EMPTY_PLACEHOLDER;

/// Options for [`HtmlRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Paragraph text for a reply with no content. Escaped, never formatted.
    pub empty_placeholder: String,
    /// Emit a `code-label` div naming the fence language.
    pub code_labels: bool,
    pub inline: InlineOptions,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            code_labels: true,
            inline: InlineOptions::default(),
        }
    }
}

/// Projects blocks onto an HTML fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: HtmlOptions,
    formatter: InlineFormatter,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        let formatter = InlineFormatter::new(options.inline);
        Self { options, formatter }
    }

    /// Renders `blocks` in order, concatenated without separators.
    pub fn render(&self, blocks: &[Block]) -> String {
        let html: String = blocks.iter().map(|b| self.render_block(b)).collect();
        log::debug!("rendered {} blocks to {} bytes of html", blocks.len(), html.len());
        html
    }

    /// Parses `raw` and renders the result.
    pub fn render_source(&self, raw: &str) -> String {
        self.render(&parse_document(raw).blocks)
    }

    pub fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, text } => {
                let level = (*level).clamp(1, 6);
                format!("<h{level}>{}</h{level}>", self.formatter.format(text))
            }
            Block::Paragraph { text } => format!("<p>{}</p>", self.formatter.format(text)),
            Block::BlockQuote { text } => {
                format!("<blockquote>{}</blockquote>", self.formatter.format(text))
            }
            Block::CodeBlock { lang, text } => {
                let label = if self.options.code_labels && !lang.is_empty() {
                    format!(r#"<div class="code-label">{}</div>"#, escape_html(lang))
                } else {
                    String::new()
                };
                format!(
                    r#"<div class="code-wrap">{label}<pre><code>{}</code></pre></div>"#,
                    escape_html(text)
                )
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", self.formatter.format(item)))
                    .collect();
                format!("<{tag}>{items}</{tag}>")
            }
            Block::Table { header, rows } => {
                let head = self.cells("th", header);
                let body: String = rows
                    .iter()
                    .map(|row| format!("<tr>{}</tr>", self.cells("td", row)))
                    .collect();
                format!(
                    r#"<div class="table-wrap"><table><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table></div>"#
                )
            }
            Block::NoContent => format!("<p>{}</p>", escape_html(&self.options.empty_placeholder)),
        }
    }

    fn cells(&self, tag: &str, cells: &[String]) -> String {
        cells
            .iter()
            .map(|c| format!("<{tag}>{}</{tag}>", self.formatter.format(c)))
            .collect()
    }
}

/// Parses and renders `raw` with default options.
pub fn render(raw: &str) -> String {
    HtmlRenderer::default().render_source(raw)
}
