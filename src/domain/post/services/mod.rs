// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::value_objects::{PostSlug, PostTitle};

/// Domain service deriving URL slugs from titles.
///
/// Create-time slugs carry a caller-supplied disambiguator so that two posts
/// with identical titles produced in quick succession still get distinct
/// slugs. Update-time slugs are the bare slugified title; a collision there
/// is surfaced by the repository's unique index.
pub struct PostSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub fn candidate_for_create(
        &self,
        title: &PostTitle,
        disambiguator: i64,
    ) -> DomainResult<PostSlug> {
        let base = self.base(title)?;
        PostSlug::new(format!("{base}-{disambiguator}"))
    }

    pub fn from_title(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self.base(title)?;
        PostSlug::new(base)
    }

    fn base(&self, title: &PostTitle) -> DomainResult<String> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return Err(DomainError::Validation(
                "title does not contain any sluggable characters".into(),
            ));
        }
        Ok(base)
    }
}
