//! pokeprose - Linked prose for Pokémon reference pages
//!
//! Turns already-fetched PokeAPI records into sentence fragments such as
//! "Ice takes double damage from fighting, rock and steel", with one link per
//! named resource. Fragments are plain data; renderers turn them into text,
//! HTML, Markdown or JSON.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod fragment;
pub mod list;
pub mod names;
pub mod page;
pub mod reference;
pub mod relations;
pub mod render;
pub mod sentences;
pub mod separator;
pub mod source;

pub use fragment::{Segment, SentenceFragment};
pub use list::{format_list, ListFormatter};
pub use names::{display_name, NameStyle};
pub use reference::{NamedReference, TemporalContext};
pub use relations::{format_relations, RelationBucket, RelationBuckets, RelationFormatter, Tense};
pub use separator::separator_at;
