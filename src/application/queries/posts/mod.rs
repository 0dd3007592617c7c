mod get_by_slug;
mod list;
mod service;

pub use get_by_slug::GetPublishedPostBySlugQuery;
pub use list::{ListAllPostsQuery, ListPublishedPostsQuery};
pub use service::PostQueryService;
