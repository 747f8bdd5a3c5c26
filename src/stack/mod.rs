//! Stack builder: an ordered selection of registry items with derived cost,
//! a shareable encoding and a dependency-aware install plan.

pub mod codec;
mod plan;
#[allow(clippy::module_inception)]
pub mod stack;
pub mod store;

pub use codec::{decode, encode};
pub use stack::Stack;
pub use store::StackStore;
