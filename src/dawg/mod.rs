/// Incremental construction of a minimal DAWG from sorted words.
pub mod builder;
/// Trait for types that can serve as DAWG transition labels.
pub mod char_trait;
/// Errors returned while building and querying a DAWG.
pub mod error;
/// The finished, immutable DAWG.
pub mod graph;
/// Read-only views into a finished DAWG.
pub mod node;
pub(crate) mod register;
/// State identifiers and the state representations used before and after construction.
pub mod state;
/// Conversion of strings and sequences into words.
pub mod word;

pub use builder::{build_dawg, Builder};
pub use char_trait::DawgChar;
pub use error::{BuildError, NotFoundError};
pub use graph::Dawg;
pub use node::{Edges, Node, Words};
pub use state::StateId;
pub use word::{IntoWord, WordBuf};
