//! Feed source reading.
//!
//! Each configured feed goes through two steps:
//!
//! 1. **Fetching**: [`reader::FeedReader`] downloads the document over HTTP(S)
//! 2. **Parsing**: [`parser::parse_feed`] turns it into [`RawItem`](crate::models::RawItem)s
//!
//! # Supported Formats
//!
//! | Format | Root element | Items |
//! |--------|--------------|-------|
//! | RSS 2.0 | `<rss>` | `channel/item` |
//! | RSS 1.0 | `<rdf:RDF>` | `item` |
//! | Atom | `<feed>` | `entry` |
//!
//! A failure anywhere in these steps is a [`FeedFetchError`](crate::errors::FeedFetchError)
//! for that feed only.

pub mod parser;
pub mod reader;

pub use reader::FeedReader;
