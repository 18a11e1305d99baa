// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{markdown::MarkdownRenderer, time::Clock},
    domain::post::PostRepository,
};

pub struct PostCommandService {
    pub(super) repo: Arc<dyn PostRepository>,
    pub(super) renderer: Arc<dyn MarkdownRenderer>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        repo: Arc<dyn PostRepository>,
        renderer: Arc<dyn MarkdownRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            renderer,
            clock,
        }
    }
}
