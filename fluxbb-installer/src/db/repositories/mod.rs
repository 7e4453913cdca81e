mod group_repository;
mod user_repository;
mod category_repository;
mod forum_repository;
mod config_repository;

pub use group_repository::GroupRepository;
pub use user_repository::UserRepository;
pub use category_repository::CategoryRepository;
pub use forum_repository::ForumRepository;
pub use config_repository::ConfigRepository;
