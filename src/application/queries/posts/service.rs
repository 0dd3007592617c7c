// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::post::{PageRequest, PostReadRepository},
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { read_repo, clock }
    }

    pub(super) fn normalize_page(&self, page: u32, page_size: u32, default_size: u32) -> PageRequest {
        const MAX_PAGE_SIZE: u32 = 100;

        let page = page.max(1);
        let page_size = if page_size == 0 {
            default_size
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };

        PageRequest::new(page, page_size)
    }
}
