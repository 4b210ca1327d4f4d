//! Record synthesis for the datahobbit data generator.
//!
//! This crate turns a validated [`Schema`](datahobbit_core::Schema) into a lazy
//! stream of [`Record`](datahobbit_core::Record)s. All randomness flows from an
//! explicit [`RandomSource`]; nothing reads ambient global randomness, so two
//! runs with the same seed produce identical records.
//!
//! # Architecture
//!
//! ```text
//! Schema + RandomSource { seed }
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  synthesize_record   │  record i <- StdRng(seed ⊕ i)
//! └──────────┬───────────┘
//!            │
//!     ┌──────┴───────────────┐
//!     ▼                      ▼
//! RecordStream        ParallelRecordStream
//! (one at a time)     (rayon chunks, index order)
//!     │                      │
//!     └──────────┬───────────┘
//!                ▼
//!      Record { index, values }
//! ```
//!
//! Because every record draws from its own sub-stream keyed by its index, the
//! sequential and parallel streams yield exactly the same records.
//!
//! # Example
//!
//! ```rust
//! use datahobbit_core::Schema;
//! use datahobbit_generator::{produce, RandomSource};
//!
//! let schema = Schema::parse(r#"{"columns": [
//!     {"name": "id", "type": "integer", "constraints": {"sequence_start": 1}},
//!     {"name": "email", "type": "email"}
//! ]}"#).unwrap();
//!
//! let records: Vec<_> = produce(&schema, 3, RandomSource::new(42)).collect();
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[2].values[0].as_i64(), Some(3));
//! ```
//!
//! # Generators
//!
//! - `integer` - uniform range or sequence
//! - `float` - uniform half-open range
//! - `string` - alphanumeric text, `values` pick, or `pattern` (`{index}`, `{uuid}`, `{rand:N}`)
//! - `boolean` - weighted coin
//! - `date` / `timestamp` - uniform within a window
//! - `uuid` - v4 layout from the random source
//! - `name`, `first_name`, `last_name`, `email`, `password`, `sentence`,
//!   `phone_number`, `word` - realistic fake text

pub mod generator;
pub mod generators;
pub mod parallel;
pub mod random;

// Re-exports for convenience
pub use generator::{produce, synthesize_record, RecordStream};
pub use generators::{generate_typed, generate_value};
pub use parallel::{ParallelRecordStream, DEFAULT_CHUNK_SIZE};
pub use random::RandomSource;
