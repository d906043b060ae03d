//! Layerpack is a small library for stacking boxes onto a pallet. It was built
//! for Palletize, a tool that plans how a list of packages should be loaded
//! onto a fixed-size pallet.
//!
//! The pallet is split into horizontal layers as tall as the tallest package.
//! Each layer is filled with a greedy shelf packer: units are laid out left to
//! right in rows, in the order their packages were added, without rotation.
//!
//! ## Example
//! ```
//! use layerpack::{LayerPacker, PackageList, PackageSpec, Pallet};
//!
//! // Collect the packages to load. Adding the same package twice adds to its
//! // quantity instead of creating a second row.
//! let mut packages = PackageList::new();
//! packages.add(PackageSpec::new("crate", (40, 10, 40), 3))?;
//! packages.add(PackageSpec::new("crate", (40, 10, 40), 1))?;
//!
//! // Describe the pallet: a 100x100 footprint that can be stacked 20 high.
//! let pallet = Pallet::new(100, 100, 20)?;
//!
//! let result = LayerPacker::new(pallet).plan(&packages)?;
//!
//! assert_eq!(result.num_layers(), 2);
//! assert_eq!(result.placed_count(), 4);
//! # Ok::<(), layerpack::PackError>(())
//! ```

mod error;
mod geometry;
mod package;
mod packer;
mod types;

pub use error::*;
pub use package::*;
pub use packer::*;
pub use types::*;
