mod candidate;
mod detail;

pub use candidate::{display_name, Candidate};
pub use detail::{DetailRecord, DetailRecordBuilder, Link, IGDB_LINK_NAME};
