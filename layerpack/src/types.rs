use serde::Serialize;

use crate::{error::PackError, geometry::Rect, package::PackageKey};

/// The footprint and stacking budget of a pallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Pallet {
    width: u32,
    depth: u32,
    height_limit: u32,
}

impl Pallet {
    pub fn new(width: u32, depth: u32, height_limit: u32) -> Result<Self, PackError> {
        if width == 0 || depth == 0 || height_limit == 0 {
            return Err(PackError::InvalidPallet {
                width,
                depth,
                height_limit,
            });
        }

        Ok(Self {
            width,
            depth,
            height_limit,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn height_limit(&self) -> u32 {
        self.height_limit
    }

    #[inline]
    pub fn footprint(&self) -> (u32, u32) {
        (self.width, self.depth)
    }

    pub fn footprint_area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.depth)
    }
}

/// One unit of a package, placed on a layer.
///
/// `x` and `y` are the offset of the unit's top-left corner from the top-left
/// corner of the pallet footprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedItem {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub x: u32,
    pub y: u32,
}

impl PlacedItem {
    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.position()
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect().max()
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.rect().area()
    }

    pub fn overlaps(&self, other: &PlacedItem) -> bool {
        self.rect().intersects(&other.rect())
    }

    pub fn fits_within(&self, pallet: &Pallet) -> bool {
        self.rect().fits_within(pallet.footprint())
    }

    pub fn key(&self) -> PackageKey {
        PackageKey {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            depth: self.depth,
        }
    }

    pub(crate) fn rect(&self) -> Rect {
        Rect::new((self.x, self.y), (self.width, self.depth))
    }
}

/// Everything placed on one horizontal slice of the pallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layer {
    pub(crate) items: Vec<PlacedItem>,
}

impl Layer {
    #[inline]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn used_area(&self) -> u64 {
        self.items.iter().map(PlacedItem::area).sum()
    }

    /// The fraction of the pallet footprint covered by this layer.
    pub fn utilization(&self, pallet: &Pallet) -> f64 {
        self.used_area() as f64 / pallet.footprint_area() as f64
    }
}

/// Units of a package that didn't make it onto any layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeftoverStock {
    #[serde(flatten)]
    pub key: PackageKey,
    pub count: u32,
}

/// The outcome of planning a pallet.
///
/// Layers are stored bottom-up. Layer numbers used by [`layer`] start at 1.
///
/// [`layer`]: #method.layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackingResult {
    pub(crate) pallet: Pallet,
    pub(crate) layer_height: u32,
    pub(crate) layers: Vec<Layer>,
    pub(crate) leftover: Vec<LeftoverStock>,
}

impl PackingResult {
    #[inline]
    pub fn pallet(&self) -> &Pallet {
        &self.pallet
    }

    /// The height of every layer: the tallest package that was submitted.
    #[inline]
    pub fn layer_height(&self) -> u32 {
        self.layer_height
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Looks up a layer by its 1-based number.
    pub fn layer(&self, number: usize) -> Option<&Layer> {
        number
            .checked_sub(1)
            .and_then(|index| self.layers.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Stock that was still unplaced when the height budget ran out, in the
    /// same order the packages were submitted.
    #[inline]
    pub fn leftover(&self) -> &[LeftoverStock] {
        &self.leftover
    }

    pub fn leftover_count(&self) -> u64 {
        self.leftover
            .iter()
            .map(|stock| u64::from(stock.count))
            .sum()
    }

    /// Whether every submitted unit was placed on some layer.
    pub fn is_complete(&self) -> bool {
        self.leftover.is_empty()
    }
}
