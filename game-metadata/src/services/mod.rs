mod dispatcher;
mod info;
mod options;
mod recommendations;

pub use dispatcher::{GameMetadataService, Operation, OperationOutput};
pub use info::InfoEnricher;
pub use options::{contains_all_words, OptionResolver};
pub use recommendations::RecommendationResolver;
