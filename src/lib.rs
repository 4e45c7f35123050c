//! Random access to texts through a string-attractor block hierarchy.
//!
//! A string attractor is a set of positions such that every substring has an
//! occurrence covering one of them. The last bytes of a greedy LZ77 parse form
//! one. Given ɤ attractor positions, the text is cut into ɤ blocks; each block
//! records where its leftmost occurrence sits relative to an attractor, and
//! finer levels around every attractor refine that pointer until blocks are
//! short enough to store literally.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   sais.rs   │────▶│   lz77.rs    │────▶│ attractor.rs │
//! │ (suffix     │     │ (greedy      │     │ (phrase-end  │
//! │  array)     │     │  parse)      │     │  positions)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   rmq.rs    │────▶│  locate.rs   │────▶│ hierarchy.rs │
//! │ (arg-min    │     │ (leftmost    │     │ (levels of   │
//! │  over SA)   │     │  occurrence) │     │  links)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │   index.rs   │◀────│   query.rs   │
//!                     │ (public API) │     │ (descent)    │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! The suffix array and the range-minimum index exist only while the levels
//! are being built. Queries read nothing but the level tables and the
//! attractor positions.
//!
//! # Usage
//!
//! ```
//! use attrix::AttractorIndex;
//!
//! let text = b"abracadabra abracadabra";
//! let index = AttractorIndex::new(2, text, text.len()).unwrap();
//!
//! assert_eq!(index.query(4).unwrap(), b'c');
//! assert_eq!(index.query_range(12, 4).unwrap(), b"abra");
//! assert_eq!(index.extract_all().unwrap(), text);
//! ```

pub mod attractor;
pub mod config;
pub mod contracts;
pub mod error;
pub mod hierarchy;
mod index;
pub mod level;
pub mod locate;
pub mod lz77;
pub mod observer;
pub mod query;
pub mod rmq;
pub mod sais;
pub mod stats;
pub mod testing;

pub use attractor::AttractorSet;
pub use config::{IndexConfig, DEFAULT_SENTINEL, DEFAULT_TAU};
pub use error::{IndexError, Result};
pub use index::AttractorIndex;
pub use level::{Level, LevelTable, Link};
pub use lz77::Phrase;
pub use observer::{BuildEvent, BuildObserver, NoopObserver};
pub use rmq::RangeMinIndex;
pub use stats::{IndexStats, LevelStats};
