pub mod pagination;
pub mod posts;

pub use pagination::PaginatedResult;
pub use posts::PostDto;
