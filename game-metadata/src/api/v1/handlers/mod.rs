pub mod games;
pub(crate) mod health;

pub use health::health_check;
