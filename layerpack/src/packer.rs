use crate::{
    error::PackError,
    geometry::exceeds,
    package::{PackageKey, PackageList},
    types::{Layer, LeftoverStock, Pallet, PackingResult, PlacedItem},
};

/// How many units of each package a single layer used up, in placement order.
pub type Consumed = Vec<(PackageKey, u32)>;

/// Fills a single layer of a `width` by `depth` footprint from `remaining`.
///
/// Units are placed left to right in rows, in the order of `remaining`. When a
/// unit would run past the right edge, the cursor wraps to a new row below the
/// deepest unit of the current row. Once a unit would run past the bottom
/// edge, the layer is closed: no later unit or package is tried on it.
///
/// Packages whose footprint is larger than the layer can never be placed and
/// are skipped.
pub fn pack_layer(remaining: &PackageList, width: u32, depth: u32) -> (Layer, Consumed) {
    let mut items = Vec::new();
    let mut consumed = Vec::new();

    let mut x = 0;
    let mut y = 0;
    let mut row_depth = 0;

    'packages: for spec in remaining {
        if spec.width > width || spec.depth > depth {
            log::trace!(
                "\"{}\" ({}x{}) is larger than the {}x{} footprint, skipping",
                spec.name,
                spec.width,
                spec.depth,
                width,
                depth
            );
            continue;
        }

        let mut placed = 0;
        let mut layer_full = false;

        for _ in 0..spec.quantity {
            if exceeds(x, spec.width, width) {
                x = 0;
                y += row_depth;
                row_depth = 0;

                log::trace!("Wrapped to a new row at y = {}", y);
            }

            if exceeds(y, spec.depth, depth) {
                layer_full = true;
                break;
            }

            log::trace!("Placed \"{}\" at ({}, {})", spec.name, x, y);

            items.push(PlacedItem {
                name: spec.name.clone(),
                width: spec.width,
                height: spec.height,
                depth: spec.depth,
                x,
                y,
            });

            x += spec.width;
            row_depth = row_depth.max(spec.depth);
            placed += 1;
        }

        if placed > 0 {
            consumed.push((spec.key(), placed));
        }

        if layer_full {
            log::trace!(
                "Out of depth placing \"{}\", deferring the rest to the next layer",
                spec.name
            );
            break 'packages;
        }
    }

    (Layer { items }, consumed)
}

/// Plans a pallet one layer at a time.
///
/// Every layer is as tall as the tallest package, and the pallet holds as many
/// of those layers as fit under its height limit. Stock that is still left
/// when the last layer is full does not appear on the pallet; it's reported by
/// [`PackingResult::leftover`].
///
/// [`PackingResult::leftover`]: struct.PackingResult.html#method.leftover
#[derive(Debug, Clone)]
pub struct LayerPacker {
    pallet: Pallet,
    stop_when_empty: bool,
}

impl LayerPacker {
    pub fn new(pallet: Pallet) -> Self {
        Self {
            pallet,
            stop_when_empty: false,
        }
    }

    /// By default the packer always emits every layer the height budget
    /// allows, even if the stock ran out and the top layers are empty. Setting
    /// this stops planning once everything has been placed instead.
    pub fn stop_when_empty(self, stop_when_empty: bool) -> Self {
        Self {
            stop_when_empty,
            ..self
        }
    }

    #[inline]
    pub fn pallet(&self) -> &Pallet {
        &self.pallet
    }

    /// Computes a plan. `packages` is left untouched; planning works on its own
    /// copy of the quantities.
    pub fn plan(&self, packages: &PackageList) -> Result<PackingResult, PackError> {
        let layer_height = packages
            .iter()
            .map(|spec| spec.height)
            .max()
            .ok_or(PackError::EmptyPackages)?;

        let num_layers = self.pallet.height_limit() / layer_height;
        let (width, depth) = self.pallet.footprint();

        log::debug!(
            "Planning {} units of {} packages onto a {}x{} pallet, {} layers of height {}",
            packages.total_quantity(),
            packages.len(),
            width,
            depth,
            num_layers,
            layer_height
        );

        for spec in packages {
            if spec.width > width || spec.depth > depth {
                log::warn!(
                    "Package \"{}\" ({}x{}) does not fit on a {}x{} pallet and will not be placed",
                    spec.name,
                    spec.width,
                    spec.depth,
                    width,
                    depth
                );
            }
        }

        let mut remaining = packages.clone();
        let mut layers = Vec::new();

        for number in 1..=num_layers {
            if self.stop_when_empty && remaining.is_empty() {
                log::debug!("All stock placed, stopping after {} layers", number - 1);
                break;
            }

            let (layer, consumed) = pack_layer(&remaining, width, depth);

            for (key, count) in &consumed {
                remaining.consume(key, *count);
            }

            log::debug!(
                "Layer {}: placed {} units, {:.1}% of the footprint",
                number,
                layer.len(),
                layer.utilization(&self.pallet) * 100.0
            );

            layers.push(layer);
        }

        let leftover: Vec<LeftoverStock> = remaining
            .iter()
            .map(|spec| LeftoverStock {
                key: spec.key(),
                count: spec.quantity,
            })
            .collect();

        if !leftover.is_empty() {
            let count: u64 = leftover.iter().map(|stock| u64::from(stock.count)).sum();
            log::warn!(
                "{} units did not fit within the height limit of {} and were left off the pallet",
                count,
                self.pallet.height_limit()
            );
        }

        Ok(PackingResult {
            pallet: self.pallet,
            layer_height,
            layers,
            leftover,
        })
    }
}

/// Plans a pallet with the default packer settings.
pub fn plan_pallet(
    packages: &PackageList,
    height_limit: u32,
    pallet_width: u32,
    pallet_depth: u32,
) -> Result<PackingResult, PackError> {
    let pallet = Pallet::new(pallet_width, pallet_depth, height_limit)?;

    LayerPacker::new(pallet).plan(packages)
}
