use std::{path::PathBuf, str::FromStr};

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Plans how boxes are stacked onto a pallet, layer by layer")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// Sets verbosity level. Can be specified multiple times.
    #[structopt(long = "verbose", short, global = true, parse(from_occurrences))]
    pub verbosity: u8,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Plan a pallet and print where every package goes, layer by layer.
    Plan(PlanOptions),

    /// Plan a pallet and draw one image per layer.
    Render(RenderOptions),

    /// Print the package list in the order it will be placed, with duplicate
    /// rows combined.
    Packages(PackagesOptions),
}

#[derive(Debug, StructOpt)]
pub struct ProjectOptions {
    /// The path to a palletize.toml file, or a folder containing one. Defaults
    /// to the current working directory.
    pub project_path: Option<PathBuf>,

    /// The width of the pallet footprint. Overrides the project file.
    #[structopt(long)]
    pub width: Option<u32>,

    /// The depth of the pallet footprint. Overrides the project file.
    #[structopt(long)]
    pub depth: Option<u32>,

    /// How high packages may be stacked. Overrides the project file.
    #[structopt(long)]
    pub height_limit: Option<u32>,

    /// Stop adding layers once every package has been placed instead of
    /// filling the whole height limit with layers.
    #[structopt(long)]
    pub stop_when_empty: bool,
}

#[derive(Debug, StructOpt)]
pub struct PlanOptions {
    #[structopt(flatten)]
    pub project: ProjectOptions,

    /// The format to print the plan in.
    ///
    /// Options:
    ///
    /// - text: A human-readable listing of each layer
    ///
    /// - json: The full plan as JSON
    #[structopt(long, default_value = "text")]
    pub format: ReportFormat,

    /// A file to write the plan to. Defaults to stdout.
    #[structopt(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct RenderOptions {
    #[structopt(flatten)]
    pub project: ProjectOptions,

    /// The folder to write layer images into. Images are named layer-1,
    /// layer-2, and so on.
    #[structopt(long)]
    pub output: PathBuf,

    /// The image format to produce.
    ///
    /// Options:
    ///
    /// - png: Filled rectangles, one color per package
    ///
    /// - svg: Filled rectangles with a label on each package
    #[structopt(long, default_value = "png")]
    pub format: ImageFormat,

    /// How many pixels to draw per unit of pallet size.
    #[structopt(long, default_value = "4")]
    pub scale: u32,
}

#[derive(Debug, StructOpt)]
pub struct PackagesOptions {
    /// The path to a palletize.toml file, or a folder containing one. Defaults
    /// to the current working directory.
    pub project_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<ReportFormat, Self::Err> {
        match value {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),

            _ => Err(String::from(
                "Invalid report format. Valid options are 'text' and 'json'.",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<ImageFormat, Self::Err> {
        match value {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),

            _ => Err(String::from(
                "Invalid image format. Valid options are 'png' and 'svg'.",
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_plan_with_overrides() {
        let options = Options::from_iter_safe(&[
            "palletize",
            "-vv",
            "plan",
            "project",
            "--width",
            "120",
            "--height-limit",
            "150",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(options.global.verbosity, 2);

        match options.command {
            Subcommand::Plan(plan) => {
                assert_eq!(plan.project.project_path, Some(PathBuf::from("project")));
                assert_eq!(plan.project.width, Some(120));
                assert_eq!(plan.project.depth, None);
                assert_eq!(plan.project.height_limit, Some(150));
                assert!(!plan.project.stop_when_empty);
                assert_eq!(plan.format, ReportFormat::Json);
            }
            other => panic!("expected plan, got {:?}", other),
        }
    }

    #[test]
    fn render_defaults() {
        let options =
            Options::from_iter_safe(&["palletize", "render", "--output", "out"]).unwrap();

        match options.command {
            Subcommand::Render(render) => {
                assert_eq!(render.format, ImageFormat::Png);
                assert_eq!(render.scale, 4);
                assert_eq!(render.output, PathBuf::from("out"));
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn unknown_formats_are_rejected() {
        assert!("yaml".parse::<ReportFormat>().is_err());
        assert!("jpeg".parse::<ImageFormat>().is_err());
        assert_eq!("svg".parse::<ImageFormat>(), Ok(ImageFormat::Svg));
    }
}
