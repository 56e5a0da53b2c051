//! # Postmerge
//!
//! Postmerge computes the intersection of sorted posting lists, the core
//! operation of conjunctive queries over an inverted index. Several
//! interchangeable merge-join strategies are provided, from a plain linear
//! merge to galloping search and an adaptive hybrid.
//!
//! ## Examples
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use postmerge::{Algorithm, Intersect, ListLayout, PostingList};
//!
//! let l1 = "3\n2 5\n3 1\n6 2\n";
//! let l2 = "4\n1 1\n2 4\n4 3\n6 3\n";
//!
//! let algorithm: Algorithm = "galloping".parse()?;
//! let l1 = PostingList::from_reader(l1.as_bytes(), algorithm.layout(0))?;
//! let l2 = PostingList::from_reader(l2.as_bytes(), ListLayout::Plain)?;
//!
//! let result = algorithm.intersect(&l1, &l2);
//! assert_eq!(result.ids(), &[2, 6]);
//! assert_eq!(result.scores(), &[9, 5]);
//! assert_eq!(result.to_string(), "[(2, 9), (6, 5)]");
//! # Ok(())
//! # }
//! ```
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod errors;
pub mod intersect;
mod num;
pub mod posting;
pub mod posting_list;


pub use intersect::{Algorithm, Intersect};
pub use posting::Posting;
pub use posting_list::{ListLayout, PostingList};

/// Version number of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
