pub mod generate;
pub mod health;

pub use generate::generate_blog;
pub use health::health_check;
