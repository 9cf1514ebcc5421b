//! State management module
//!
//! Framework-free data structures behind the UI:
//! - Catalog: items and the static mock collections
//! - Selection: which item the detail overlay shows
//! - Navigation: routes and the back stack
//! - Player: the mocked playback controls
//! - Payment: the mock checkout

mod catalog;
mod mock_data;
mod selection;
mod navigation;
mod player;
mod payment;

pub use catalog::*;
pub use mock_data::*;
pub use selection::*;
pub use navigation::*;
pub use player::*;
pub use payment::*;

#[cfg(test)]
pub(crate) use catalog::test_item;
