//! Data layer: core types, loading, filtering, and ranking.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → PubDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────┐
//!   │ PubDataset │  Vec<PubRecord> + distinct local authorities
//!   └────────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐   ┌──────────┐
//!   │  filter   │   │ nearest  │
//!   └──────────┘   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod nearest;
