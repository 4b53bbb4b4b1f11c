//! Co-occurrence relations between lemmas, with highlighted evidence.

pub mod cooccurrence;
pub mod highlight;

pub use cooccurrence::{CooccurrenceAnalyzer, Evidence, RankedRelation, Relation, Relations};
