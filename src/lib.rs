//! # wordgraph
//!
//! Minimal [DAWGs](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (deterministic acyclic finite-state automata) built in a single pass from a
//! sorted word list.
//!
//! A DAWG is a trie whose equivalent suffixes are shared. Construction follows
//! the incremental algorithm of [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1):
//! as soon as a state can no longer gain transitions it is compared against the
//! states already built and merged with an equivalent one, so the result is
//! minimal without a separate minimization pass.
//!
//! ## Quick Start
//!
//! ```
//! use wordgraph::dawg::build_dawg;
//!
//! let dawg = build_dawg(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//!
//! assert!(dawg.accepts("CAKE"));
//! assert!(!dawg.accepts("AKE"));
//! assert!(dawg.has_prefix("LA").is_ok());
//! assert!(dawg.has_prefix("LO").is_err());
//!
//! // A trie would need 21 states; all five words share the "AKE" tail.
//! assert_eq!(dawg.size(), 5);
//! ```
//!
//! Words must arrive sorted; the first out-of-order word is reported:
//!
//! ```
//! use wordgraph::dawg::{build_dawg, BuildError};
//!
//! let err = build_dawg(["ab", "ef", "cd"]).unwrap_err();
//! assert_eq!(
//!     err,
//!     BuildError::Unsorted { previous: vec!['e', 'f'], word: vec!['c', 'd'] }
//! );
//! ```
//!
//! ## Generic Usage
//!
//! The DAWG is generic over the transition label type:
//!
//! ```
//! use wordgraph::dawg::Builder;
//!
//! let mut builder = Builder::<u8>::new();
//! for word in [[1, 2, 3], [1, 2, 4], [2, 3, 4]] {
//!     builder.insert(word).unwrap();
//! }
//! let dawg = builder.finish();
//!
//! assert!(dawg.accepts([1, 2, 3]));
//! assert!(!dawg.accepts([1, 2, 5]));
//! let words: Vec<Vec<u8>> = dawg.words().collect();
//! assert_eq!(words, [[1, 2, 3], [1, 2, 4], [2, 3, 4]]);
//! ```

#![warn(missing_docs)]

/// Core DAWG data structure: builder, finished graph, node views and label trait.
pub mod dawg;
