use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// A kind of box to put on the pallet, along with how many of them there are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub quantity: u32,
}

impl PackageSpec {
    pub fn new<S: Into<String>>(
        name: S,
        (width, height, depth): (u32, u32, u32),
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            depth,
            quantity,
        }
    }

    #[inline]
    pub fn key(&self) -> PackageKey {
        PackageKey {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    fn validate(&self) -> Result<(), PackError> {
        let reason = if self.width == 0 || self.height == 0 || self.depth == 0 {
            "width, height, and depth must all be non-zero"
        } else if self.quantity == 0 {
            "quantity must be at least 1"
        } else {
            return Ok(());
        };

        Err(PackError::InvalidPackage {
            name: self.name.clone(),
            reason,
        })
    }
}

/// Identifies a row in a [`PackageList`]. Two specs with the same key are the
/// same kind of box and have their quantities summed.
///
/// [`PackageList`]: struct.PackageList.html
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageKey {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

/// An insertion-ordered set of package specs.
///
/// The order packages were first added in is the order the packer places them
/// in, so earlier rows get priority for the lower layers and the top-left of
/// each layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    entries: Vec<PackageSpec>,
    index: HashMap<PackageKey, usize>,
}

impl PackageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list by adding every spec in order.
    pub fn from_specs<I: IntoIterator<Item = PackageSpec>>(specs: I) -> Result<Self, PackError> {
        let mut list = Self::new();

        for spec in specs {
            list.add(spec)?;
        }

        Ok(list)
    }

    /// Adds a spec to the list. If a spec with the same name and dimensions is
    /// already present, the quantities are combined and the existing row keeps
    /// its position.
    pub fn add(&mut self, spec: PackageSpec) -> Result<(), PackError> {
        spec.validate()?;

        let key = spec.key();

        match self.index.get(&key) {
            Some(&position) => {
                let existing = &mut self.entries[position];
                existing.quantity = existing.quantity.saturating_add(spec.quantity);

                log::trace!(
                    "Aggregated {} more of \"{}\", now {}",
                    spec.quantity,
                    existing.name,
                    existing.quantity
                );
            }
            None => {
                log::trace!("Added {} of \"{}\"", spec.quantity, spec.name);

                self.index.insert(key, self.entries.len());
                self.entries.push(spec);
            }
        }

        Ok(())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &PackageSpec> {
        self.entries.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PackageSpec] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &PackageKey) -> Option<&PackageSpec> {
        self.index.get(key).map(|&position| &self.entries[position])
    }

    pub fn total_quantity(&self) -> u64 {
        self.entries
            .iter()
            .map(|spec| u64::from(spec.quantity))
            .sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Takes `count` units of the given package out of the list, dropping the
    /// row once nothing is left. Used on the packer's private working copy.
    pub(crate) fn consume(&mut self, key: &PackageKey, count: u32) {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => return,
        };

        let spec = &mut self.entries[position];
        spec.quantity = spec.quantity.saturating_sub(count);

        if spec.quantity == 0 {
            self.entries.remove(position);
            self.reindex();
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(position, spec)| (spec.key(), position))
            .collect();
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a PackageSpec;
    type IntoIter = std::slice::Iter<'a, PackageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
