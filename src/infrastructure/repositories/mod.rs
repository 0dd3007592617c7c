mod error;
mod postgres_post;

pub use error::map_sqlx;
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
