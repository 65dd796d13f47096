//! Dataset providers.
//!
//! This module contains:
//! - The `DatasetProvider` trait the resolver reads record sets through
//! - `InMemoryProvider` for embedded universes and tests
//! - `CsvDatasetProvider` for the bundled CSV dataset tree
//! - `DatasetSnapshot`, an eagerly loaded immutable copy of any provider
//!
//! Providers never fail. A missing dataset is an empty record set, which the
//! resolver reports as "not found".

mod csv_files;
mod memory;
mod merge;
mod snapshot;
mod traits;

pub use csv_files::{build_ticker, CsvDatasetProvider};
pub use memory::InMemoryProvider;
pub use merge::merge_by_ticker;
pub use snapshot::DatasetSnapshot;
pub use traits::DatasetProvider;
