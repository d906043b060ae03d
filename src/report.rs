//! Human-readable and JSON descriptions of a pallet plan.

use std::io::{self, Write};

use layerpack::{PackageList, PackingResult};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    name: &'a str,

    #[serde(flatten)]
    result: &'a PackingResult,
}

pub fn write_json<W: Write>(output: W, name: &str, result: &PackingResult) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(output, &JsonReport { name, result })
}

pub fn write_text<W: Write>(mut output: W, name: &str, result: &PackingResult) -> io::Result<()> {
    let pallet = result.pallet();
    let total = result.placed_count() as u64 + result.leftover_count();

    writeln!(
        output,
        "Pallet \"{}\": {}x{} footprint, height limit {}",
        name,
        pallet.width(),
        pallet.depth(),
        pallet.height_limit()
    )?;
    writeln!(
        output,
        "{} layers of height {}, {} of {} units placed",
        result.num_layers(),
        result.layer_height(),
        result.placed_count(),
        total
    )?;

    let name_width = result
        .layers()
        .iter()
        .flat_map(|layer| layer.items())
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);

    for (index, layer) in result.layers().iter().enumerate() {
        writeln!(output)?;

        if layer.is_empty() {
            writeln!(output, "Layer {}: empty", index + 1)?;
            continue;
        }

        writeln!(
            output,
            "Layer {}: {} units, {:.1}% of footprint",
            index + 1,
            layer.len(),
            layer.utilization(pallet) * 100.0
        )?;

        for item in layer.items() {
            writeln!(
                output,
                "  {:<width$}  {}x{} at ({}, {})",
                item.name,
                item.width,
                item.depth,
                item.x,
                item.y,
                width = name_width
            )?;
        }
    }

    if !result.is_complete() {
        writeln!(output)?;
        writeln!(output, "Left off the pallet:")?;

        for stock in result.leftover() {
            writeln!(
                output,
                "  {} ({}x{}x{}): {}",
                stock.key.name, stock.key.width, stock.key.height, stock.key.depth, stock.count
            )?;
        }
    }

    Ok(())
}

/// Lists packages in the order they'll be placed.
pub fn write_package_list<W: Write>(mut output: W, packages: &PackageList) -> io::Result<()> {
    let name_width = packages
        .iter()
        .map(|spec| spec.name.chars().count())
        .chain(Some("name".len()))
        .max()
        .unwrap_or(0);

    writeln!(
        output,
        "{:<3}{:<width$}  {:>14}  {:>8}",
        "#",
        "name",
        "w x h x d",
        "quantity",
        width = name_width
    )?;

    for (index, spec) in packages.iter().enumerate() {
        let dimensions = format!("{}x{}x{}", spec.width, spec.height, spec.depth);

        writeln!(
            output,
            "{:<3}{:<width$}  {:>14}  {:>8}",
            index + 1,
            spec.name,
            dimensions,
            spec.quantity,
            width = name_width
        )?;
    }

    writeln!(
        output,
        "{} units across {} packages",
        packages.total_quantity(),
        packages.len()
    )?;

    Ok(())
}
