//! Ranks trading areas per commodity from a CSV of import/export records.
//!
//! Loading validates the schema, clamps negative import/consumption and
//! scores every record once; ranking is then a cheap filter over the
//! scored table.
pub mod error;
pub mod loader;
pub mod output;
pub mod ranker;
pub mod scoring;
pub mod session;
pub mod types;
pub mod util;

pub use error::{Result, Severity, TradeError};
pub use loader::{load_dataset, load_from_reader, Dataset};
pub use ranker::{top_countries, Ranking, DEFAULT_TOP_N, PLACEHOLDER_ITEM};
pub use session::Session;
pub use types::{EnrichedRecord, RankedRow, Record};
