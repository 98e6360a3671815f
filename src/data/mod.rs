/// Data layer: point-set model and text/CSV serialization.
///
/// Architecture:
/// ```text
///   generators
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  dimension + Vec<Point>
///   └──────────┘
///        │  ▲
///        ▼  │
///   ┌──────────┐   ┌──────────┐
///   │  writer   │   │  loader   │  .txt / .csv ↔ Dataset
///   └──────────┘   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod writer;
