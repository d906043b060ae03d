use std::{
    io,
    path::{Path, PathBuf},
};

use fs_err as fs;
use layerpack::{PackError, PackageList, PackageSpec, Pallet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub static CONFIG_FILENAME: &str = "palletize.toml";

/// Configuration for a Palletize project, contained in a palletize.toml file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// The name of the project, used in reports.
    #[serde(default = "default_name")]
    pub name: String,

    /// The pallet that packages are loaded onto. Any dimension can be left out
    /// here and given on the command line instead.
    #[serde(default)]
    pub pallet: PalletConfig,

    /// Whether planning should stop once every package is placed instead of
    /// producing empty layers up to the height limit.
    #[serde(default)]
    pub stop_when_empty: bool,

    /// The packages to load, in the order they should be placed. Rows with the
    /// same name and dimensions are combined.
    #[serde(default)]
    pub packages: Vec<PackageConfig>,

    /// The path that this config came from.
    #[serde(skip)]
    pub file_path: PathBuf,
}

impl Config {
    pub fn read_from_folder_or_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let meta = fs::metadata(path)?;

        if meta.is_file() {
            Self::read_from_file(path)
        } else {
            Self::read_from_folder(path)
        }
    }

    pub fn read_from_folder<P: AsRef<Path>>(folder_path: P) -> Result<Self, ConfigError> {
        let folder_path = folder_path.as_ref();
        let file_path = &folder_path.join(CONFIG_FILENAME);

        Self::read_from_file(file_path)
    }

    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let mut config = Self::from_toml(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_owned(),
            source,
        })?;
        config.file_path = path.to_owned();

        log::debug!(
            "Read project \"{}\" with {} package rows from {}",
            config.name,
            config.packages.len(),
            path.display()
        );

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Collects the package rows into a list, combining duplicate rows.
    pub fn package_list(&self) -> Result<PackageList, ConfigError> {
        let specs = self.packages.iter().map(PackageConfig::to_spec);

        PackageList::from_specs(specs).map_err(|source| ConfigError::Package {
            path: self.file_path.clone(),
            source,
        })
    }

    /// Builds the pallet from this config, with any dimension present in
    /// `overrides` taking precedence.
    pub fn pallet(&self, overrides: &PalletConfig) -> Result<Pallet, ConfigError> {
        let merged = overrides.or(&self.pallet);

        let width = merged.width.ok_or_else(|| self.missing("width"))?;
        let depth = merged.depth.ok_or_else(|| self.missing("depth"))?;
        let height_limit = merged
            .height_limit
            .ok_or_else(|| self.missing("height-limit"))?;

        Pallet::new(width, depth, height_limit).map_err(|source| ConfigError::Package {
            path: self.file_path.clone(),
            source,
        })
    }

    fn missing(&self, field: &'static str) -> ConfigError {
        ConfigError::MissingPalletDimension {
            field,
            path: self.file_path.clone(),
        }
    }
}

fn default_name() -> String {
    String::from("pallet")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PalletConfig {
    pub width: Option<u32>,
    pub depth: Option<u32>,
    pub height_limit: Option<u32>,
}

impl PalletConfig {
    /// Fills in anything missing from `self` with values from `fallback`.
    pub fn or(&self, fallback: &PalletConfig) -> PalletConfig {
        PalletConfig {
            width: self.width.or(fallback.width),
            depth: self.depth.or(fallback.depth),
            height_limit: self.height_limit.or(fallback.height_limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PackageConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub depth: u32,

    /// How many of this package there are. Defaults to one.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl PackageConfig {
    fn to_spec(&self) -> PackageSpec {
        PackageSpec::new(
            self.name.clone(),
            (self.width, self.height, self.depth),
            self.quantity,
        )
    }
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{source} in {}", .path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{source} in {}", .path.display())]
    Package { path: PathBuf, source: PackError },

    #[error("pallet {field} was not given in {} or on the command line", .path.display())]
    MissingPalletDimension { field: &'static str, path: PathBuf },
}

impl ConfigError {
    /// Tells whether this ConfigError originated because of a path not
    /// existing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::Io(source) => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = r#"
        name = "warehouse-a"
        stop-when-empty = true

        [pallet]
        width = 120
        depth = 80
        height-limit = 150

        [[packages]]
        name = "crate"
        width = 40
        height = 30
        depth = 40
        quantity = 6

        [[packages]]
        name = "tube"
        width = 10
        height = 50
        depth = 80

        [[packages]]
        name = "crate"
        width = 40
        height = 30
        depth = 40
        quantity = 2
    "#;

    #[test]
    fn parse_example() {
        let config = Config::from_toml(EXAMPLE).unwrap();

        assert_eq!(config.name, "warehouse-a");
        assert!(config.stop_when_empty);
        assert_eq!(config.packages.len(), 3);
        assert_eq!(config.packages[1].quantity, 1);

        let pallet = config.pallet(&PalletConfig::default()).unwrap();
        assert_eq!(pallet, Pallet::new(120, 80, 150).unwrap());
    }

    #[test]
    fn duplicate_rows_combine() {
        let config = Config::from_toml(EXAMPLE).unwrap();
        let packages = config.package_list().unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages.as_slice()[0].name, "crate");
        assert_eq!(packages.as_slice()[0].quantity, 8);
        assert_eq!(packages.as_slice()[1].name, "tube");
    }

    #[test]
    fn overrides_win() {
        let config = Config::from_toml(EXAMPLE).unwrap();
        let overrides = PalletConfig {
            width: Some(100),
            depth: None,
            height_limit: Some(60),
        };

        let pallet = config.pallet(&overrides).unwrap();
        assert_eq!(pallet, Pallet::new(100, 80, 60).unwrap());
    }

    #[test]
    fn missing_dimension_is_reported() {
        let config = Config::from_toml("[pallet]\nwidth = 10\ndepth = 10\n").unwrap();

        match config.pallet(&PalletConfig::default()) {
            Err(ConfigError::MissingPalletDimension { field, .. }) => {
                assert_eq!(field, "height-limit")
            }
            other => panic!("expected missing height-limit, got {:?}", other),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::from_toml("[pallet]\nlength = 10\n").is_err());
        assert!(Config::from_toml("colour = \"red\"\n").is_err());
    }

    #[test]
    fn invalid_package_is_reported() {
        let config = Config::from_toml(
            "[[packages]]\nname = \"flat\"\nwidth = 10\nheight = 0\ndepth = 10\n",
        )
        .unwrap();

        match config.package_list() {
            Err(ConfigError::Package { source, .. }) => assert!(source.is_invalid_input()),
            other => panic!("expected a package error, got {:?}", other),
        }
    }

    #[test]
    fn read_from_folder() {
        let folder = tempfile::tempdir().unwrap();
        fs::write(folder.path().join(CONFIG_FILENAME), EXAMPLE).unwrap();

        let config = Config::read_from_folder_or_file(folder.path()).unwrap();
        assert_eq!(config.file_path, folder.path().join(CONFIG_FILENAME));

        let missing = Config::read_from_folder(folder.path().join("nope")).unwrap_err();
        assert!(missing.is_not_found());
    }
}
