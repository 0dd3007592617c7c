pub mod entity;
pub mod policy;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use policy::{PostAction, PostPolicy};
pub use repository::{PageRequest, PostReadRepository, PostWriteRepository};
pub use value_objects::{PostCategory, PostContent, PostId, PostSlug, PostTitle};
