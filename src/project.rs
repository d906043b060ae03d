use std::{env, path::Path};

use anyhow::bail;
use layerpack::{LayerPacker, PackageList, PackingResult, Pallet};

use crate::{
    data::{Config, PalletConfig, CONFIG_FILENAME},
    options::ProjectOptions,
};

/// Everything needed to plan a pallet, gathered from a palletize.toml file and
/// any overrides given on the command line.
#[derive(Debug)]
pub struct Project {
    pub name: String,
    pub packages: PackageList,
    pub pallet: Pallet,
    pub stop_when_empty: bool,
}

impl Project {
    pub fn load(options: &ProjectOptions) -> anyhow::Result<Self> {
        let config = read_config(options.project_path.as_ref())?;

        let overrides = PalletConfig {
            width: options.width,
            depth: options.depth,
            height_limit: options.height_limit,
        };

        let packages = config.package_list()?;
        let pallet = config.pallet(&overrides)?;

        Ok(Self {
            name: config.name,
            packages,
            pallet,
            stop_when_empty: options.stop_when_empty || config.stop_when_empty,
        })
    }

    pub fn plan(&self) -> anyhow::Result<PackingResult> {
        let result = LayerPacker::new(self.pallet)
            .stop_when_empty(self.stop_when_empty)
            .plan(&self.packages)?;

        log::info!(
            "Planned \"{}\": {} units on {} layers",
            self.name,
            result.placed_count(),
            result.num_layers()
        );

        Ok(result)
    }
}

pub fn read_config<P: AsRef<Path>>(project_path: Option<P>) -> anyhow::Result<Config> {
    let path = match project_path {
        Some(path) => path.as_ref().to_owned(),
        None => env::current_dir()?,
    };

    match Config::read_from_folder_or_file(&path) {
        Ok(config) => Ok(config),
        Err(err) if err.is_not_found() => bail!(
            "Couldn't find {} at {}, pass a project path to point at one",
            CONFIG_FILENAME,
            path.display()
        ),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_config_names_the_file() {
        let folder = tempfile::tempdir().unwrap();

        let err = read_config(Some(folder.path())).unwrap_err();
        let message = err.to_string();

        assert!(message.starts_with("Couldn't find palletize.toml at "), "{}", message);
    }

    #[test]
    fn missing_path_names_the_file() {
        let folder = tempfile::tempdir().unwrap();

        let err = read_config(Some(folder.path().join("nope.toml"))).unwrap_err();

        assert!(err.to_string().contains("palletize.toml"));
    }

    #[test]
    fn reads_config_from_folder() {
        let folder = tempfile::tempdir().unwrap();
        fs_err::write(
            folder.path().join(CONFIG_FILENAME),
            "name = \"demo\"\n\n[pallet]\nwidth = 100\ndepth = 100\nheight-limit = 50\n",
        )
        .unwrap();

        let config = read_config(Some(folder.path())).unwrap();
        assert_eq!(config.name, "demo");
    }
}
