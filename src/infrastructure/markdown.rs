use crate::application::ports::markdown::{MarkdownRenderer, RenderError};
use pulldown_cmark::{Options, Parser, html};

const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// CommonMark renderer with the GitHub-flavoured extensions blog authors
/// expect (tables, strikethrough, footnotes, task lists).
#[derive(Debug, Clone)]
pub struct PulldownMarkdownRenderer {
    options: Options,
    max_input_bytes: usize,
}

impl Default for PulldownMarkdownRenderer {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_TASKLISTS);

        Self {
            options,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl PulldownMarkdownRenderer {
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }
}

impl MarkdownRenderer for PulldownMarkdownRenderer {
    fn render_to_html(&self, markdown: &str) -> Result<String, RenderError> {
        if markdown.len() > self.max_input_bytes {
            return Err(RenderError::new(format!(
                "markdown source is {} bytes, limit is {}",
                markdown.len(),
                self.max_input_bytes
            )));
        }

        let parser = Parser::new_ext(markdown, self.options);
        let mut output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut output, parser);
        Ok(output)
    }
}
