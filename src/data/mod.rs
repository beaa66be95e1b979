/// Data layer: core types, loading, selection, and aggregation.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → RawTable → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog  │  Vec<TitleRecord>, read-only after load
///   └──────────┘
///        │
///        ├──────────────────┐
///        ▼                  ▼
///   ┌──────────┐      ┌───────────┐
///   │  select  │      │ aggregate │  five derived tables
///   └──────────┘      └───────────┘
/// ```

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;
pub mod select;
