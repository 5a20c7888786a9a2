//! Regular convex polygons and lazy, memoized sequences of them.
//!
//! Layout
//! - `polygon`: the `ConvexPolygon` value type `(sides, circumradius)`.
//! - `cache`: bounded LRU cache plus the process-wide memoizing factory `polygonator`.
//! - `sequence`: `PolygonSequence` (indexing, slicing, iteration, efficiency query).
//! - `number`, `error`: argument validation at the API boundary.
//!
//! API Policy
//! - Small and explicit. All construction goes through `polygonator`, so indexed
//!   access and iteration share the same cached polygons.

pub mod cache;
pub mod error;
pub mod number;
pub mod polygon;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cache::{global_cache_stats, polygonator, CacheCfg, CacheStats, PolygonCache};
pub use error::{ErrorKind, SequenceError};
pub use number::Number;
pub use polygon::ConvexPolygon;
pub use sequence::{PolygonIter, PolygonSequence};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cache::{polygonator, CacheCfg, CacheStats};
    pub use crate::error::{ErrorKind, SequenceError};
    pub use crate::number::Number;
    pub use crate::polygon::ConvexPolygon;
    pub use crate::sequence::{slice::SliceIndices, PolygonIter, PolygonSequence};
    pub use nalgebra::Vector2 as Vec2;
}
