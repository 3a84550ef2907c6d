//! The animal dictionary store.
//!
//! Holds the master list of names, the filtered view derived from the last
//! successful search, the optional list of added names and the page state
//! of both panels. All operations are synchronous and keep the page of the
//! affected panel within `1..=max(1, ceil(len / PAGE_SIZE))`.
//!
//! ## Variants
//!
//! - [`Variant::SplitPanel`]: [`Dictionary::move_to_added`] moves a name
//!   into a second panel where it can be deleted again.
//! - [`Variant::InlineAdd`]: [`Dictionary::insert`] puts the search text at
//!   the front of the single list, rejecting duplicates.
//!
//! Operations that drop the filter as a side effect return
//! [`Outcome::SearchReset`] so the caller can clear its search box.

mod error;
mod filtering;
mod model;
mod mutations;
mod types;


pub use error::DictionaryError;
pub use model::Dictionary;
pub use types::{Outcome, Panel, Variant};
