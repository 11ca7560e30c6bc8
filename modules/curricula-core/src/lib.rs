pub mod classifier;
pub mod merger;
pub mod pipeline;
pub mod query;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use classifier::BatchClassifier;
pub use pipeline::CurriculumPipeline;
pub use registry::TopicRegistry;
pub use resolver::TopicResolver;
pub use traits::{CategorizationOracle, DisambiguationOracle, SearchGateway, TopicSource};
