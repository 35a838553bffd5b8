pub mod candidates;
pub mod executor;
pub mod resolver;

pub use candidates::{ItemCandidate, ResolverChain, ITEM_PRECEDENCE};
pub use executor::ResolveExecutor;
pub use resolver::{PathResolver, ResolveError};
