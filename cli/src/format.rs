//! Loading and saving files in JSON, YAML or TOML.

use polyomino_lib::Generation;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs,
    path::{Path, PathBuf},
};

/// What `--save` writes: every reported generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SaveFile {
    pub(crate) generations: Vec<Generation>,
}

/// File formats, chosen by the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Guesses the format from the extension of the path.
    pub(crate) fn from_path(path: &Path) -> Result<Self, UnknownFormatError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Format::Json),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => Err(UnknownFormatError {
                path: path.to_path_buf(),
            }),
        }
    }

    pub(crate) fn serialize<T: Serialize>(self, value: &T) -> Result<String, Box<dyn Error>> {
        let s = match self {
            Format::Json => serde_json::to_string_pretty(value)?,
            Format::Yaml => serde_yaml::to_string(value)?,
            Format::Toml => toml::to_string_pretty(value)?,
        };
        Ok(s)
    }

    pub(crate) fn deserialize<T: DeserializeOwned>(self, s: &str) -> Result<T, Box<dyn Error>> {
        let value = match self {
            Format::Json => serde_json::from_str(s)?,
            Format::Yaml => serde_yaml::from_str(s)?,
            Format::Toml => toml::from_str(s)?,
        };
        Ok(value)
    }
}

/// Reads a value from a file, in the format given by its extension.
pub(crate) fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let format = Format::from_path(path)?;
    let s = fs::read_to_string(path)?;
    format.deserialize(&s)
}

/// Writes a value to a file, in the format given by its extension.
pub(crate) fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let format = Format::from_path(path)?;
    fs::write(path, format.serialize(value)?)?;
    Ok(())
}

/// The file extension is not one of `json`, `yaml`, `yml` or `toml`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UnknownFormatError {
    path: PathBuf,
}

impl Display for UnknownFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown file format for {}: expected .json, .yaml or .toml.",
            self.path.display()
        )
    }
}

impl Error for UnknownFormatError {}

#[cfg(test)]
mod tests {
    use super::*;
    use polyomino_lib::{Config, Symmetry};

    const FORMATS: [Format; 3] = [Format::Json, Format::Yaml, Format::Toml];

    #[test]
    fn from_path() {
        assert_eq!(Format::from_path(Path::new("a.json")), Ok(Format::Json));
        assert_eq!(Format::from_path(Path::new("dir/a.YML")), Ok(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.yaml")), Ok(Format::Yaml));
        assert_eq!(Format::from_path(Path::new("a.toml")), Ok(Format::Toml));
        assert!(Format::from_path(Path::new("a.txt")).is_err());
        assert!(Format::from_path(Path::new("config")).is_err());
    }

    #[test]
    fn config_in_every_format() -> Result<(), Box<dyn Error>> {
        let config = Config::new(6)
            .set_keep_history(true)
            .set_symmetry(Symmetry::D2Diag);
        for format in FORMATS {
            let s = format.serialize(&config)?;
            let restored: Config = format.deserialize(&s)?;
            assert_eq!(restored, config, "{:?}", format);
        }
        Ok(())
    }

    #[test]
    fn partial_config() -> Result<(), Box<dyn Error>> {
        let config: Config = Format::Toml.deserialize("size = 7\n")?;
        assert_eq!(config, Config::new(7));
        let config: Config = Format::Yaml.deserialize("symmetry: D4+\n")?;
        assert_eq!(config, Config::default().set_symmetry(Symmetry::D4Ortho));
        Ok(())
    }

    #[test]
    fn generations_in_every_format() -> Result<(), Box<dyn Error>> {
        let save_file = SaveFile {
            generations: Config::new(4)
                .generations()?
                .collect::<Result<Vec<_>, _>>()?,
        };
        for format in FORMATS {
            let s = format.serialize(&save_file)?;
            let restored: SaveFile = format.deserialize(&s)?;
            assert_eq!(restored, save_file, "{:?}", format);
        }
        Ok(())
    }

    #[test]
    fn save_and_load() -> Result<(), Box<dyn Error>> {
        let path = std::env::temp_dir().join(format!("polyomino-{}.json", std::process::id()));
        let config = Config::new(3).set_verify(false);
        save(&path, &config)?;
        let loaded: Config = load(&path)?;
        fs::remove_file(&path)?;
        assert_eq!(loaded, config);
        Ok(())
    }
}
