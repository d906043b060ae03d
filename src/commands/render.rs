use std::io::{BufWriter, Write};

use anyhow::{bail, format_err};
use fs_err as fs;

use crate::{
    options::{ImageFormat, RenderOptions},
    project::Project,
    render::{canvas_size, render_png, render_svg, Palette, MAX_PIXELS},
};

pub fn render(options: RenderOptions) -> anyhow::Result<()> {
    if options.scale == 0 {
        bail!("Scale must be at least 1");
    }

    let project = Project::load(&options.project)?;
    let result = project.plan()?;

    canvas_size(result.pallet(), options.scale).ok_or_else(|| {
        format_err!(
            "A {}x{} pallet is too large to draw at scale {} (limit is {} pixels)",
            result.pallet().width(),
            result.pallet().depth(),
            options.scale,
            MAX_PIXELS
        )
    })?;

    fs::create_dir_all(&options.output)?;

    let palette = Palette::for_result(&result);

    for (index, layer) in result.layers().iter().enumerate() {
        let file_name = format!("layer-{}.{}", index + 1, options.format.extension());
        let path = options.output.join(file_name);

        let mut file = BufWriter::new(fs::File::create(&path)?);

        match options.format {
            ImageFormat::Png => {
                render_png(layer, result.pallet(), &palette, options.scale).encode_png(&mut file)?
            }
            ImageFormat::Svg => {
                let svg = render_svg(layer, result.pallet(), &palette, options.scale);
                file.write_all(svg.as_bytes())?;
            }
        }

        file.flush()?;

        log::info!("Wrote layer {} to {}", index + 1, path.display());
    }

    if result.is_empty() {
        log::warn!("No layers fit under the height limit, so no images were written");
    }

    Ok(())
}
