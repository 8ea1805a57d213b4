//! Content core: the records the site lists, the predicate that filters
//! them and the store that answers listing queries. Nothing in here touches
//! the browser, so it is tested natively.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod item;
pub mod remote;
pub mod store;

pub use catalog::Collection;
pub use filter::{CategoryFilter, FilterState};
pub use item::{ContentItem, Image, MetaEntry, MetaKind};
pub use store::ContentStore;
