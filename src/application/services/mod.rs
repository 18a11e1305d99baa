// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService,
        ports::{markdown::MarkdownRenderer, time::Clock},
        queries::posts::PostQueryService,
    },
    domain::post::PostRepository,
};

/// Use-case services shared by every request handler.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        renderer: Arc<dyn MarkdownRenderer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            renderer,
            clock,
        ));
        let post_queries = Arc::new(PostQueryService::new(post_repo));

        Self {
            post_commands,
            post_queries,
        }
    }
}
