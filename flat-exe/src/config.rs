//! User configuration options.

use crate::{CLIOptions, BASE_DIR};
use dirs::config_dir;
use flat_colour::log::{error, info, warn};
use flat_colour::AnimatedFlat;
use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir_all, File},
    io::Write,
    path::{Path, PathBuf},
};

const LOG_TAG: &str = "UserConfig";

fn get_cfg_file() -> Option<PathBuf> {
    let mut dir = config_dir()?;
    dir.push(BASE_DIR);
    if !dir.exists() {
        if let Err(e) = create_dir_all(&dir) {
            warn!(target: LOG_TAG, "Couldn't create {:?}: {}", dir, e);
            return None;
        }
    }
    dir.push("user.toml");
    Some(dir)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub iwad: String,
    pub pwad: Vec<String>,
    /// Sector light used when showing lit colours
    pub light_level: usize,
    pub fixed_colourmap: usize,
    pub tics: u32,
    pub animation: AnimatedFlat,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            iwad: String::new(),
            pwad: Vec::new(),
            light_level: 255,
            fixed_colourmap: 0,
            tics: 35,
            animation: AnimatedFlat::default(),
        }
    }
}

impl UserConfig {
    /// Read the user config, falling back to defaults (and writing them) if
    /// it is missing or unreadable
    pub fn load() -> Self {
        match get_cfg_file() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!(target: LOG_TAG, "No config dir, using defaults");
                UserConfig::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(buf) if !buf.is_empty() => match toml::from_str(&buf) {
                Ok(data) => {
                    info!(target: LOG_TAG, "Loaded user config file");
                    return data;
                }
                Err(e) => warn!("Could not deserialise {:?} recreating config: {}", path, e),
            },
            Ok(_) => {}
            Err(e) => info!(target: LOG_TAG, "No config at {:?}: {}", path, e),
        }
        let config = UserConfig::default();
        config.write_to(path);
        info!("Created default user config file");
        config
    }

    pub fn write(&self) {
        if let Some(path) = get_cfg_file() {
            self.write_to(&path);
        }
    }

    fn write_to(&self, path: &Path) {
        let data = match toml::to_string_pretty(self) {
            Ok(d) => d,
            Err(e) => {
                error!("Could not serialise config: {}", e);
                return;
            }
        };
        match File::create(path) {
            Ok(mut file) => {
                if let Err(err) = file.write_all(data.as_bytes()) {
                    error!("Could not write config: {}", err);
                } else {
                    info!("Saved user config to {:?}", path);
                }
            }
            Err(err) => error!("Could not write {:?}: {}", path, err),
        }
    }

    /// Sync the CLI options and UserOptions with each other
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        info!("Checking CLI options");

        if !cli.iwad.is_empty() && cli.iwad != self.iwad {
            cli.iwad.clone_into(&mut self.iwad);
            info!("IWAD changed to: {}", &cli.iwad);
        } else {
            self.iwad.clone_into(&mut cli.iwad);
        }

        if !cli.pwad.is_empty() && cli.pwad != self.pwad {
            cli.pwad.clone_into(&mut self.pwad);
        } else {
            self.pwad.clone_into(&mut cli.pwad);
        }

        if let Some(l) = cli.light {
            self.light_level = l;
        } else {
            cli.light = Some(self.light_level);
        }

        if let Some(f) = cli.fixed_colourmap {
            self.fixed_colourmap = f;
        } else {
            cli.fixed_colourmap = Some(self.fixed_colourmap);
        }

        if let Some(t) = cli.tics {
            self.tics = t;
        } else {
            cli.tics = Some(self.tics);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use super::UserConfig;
    use crate::CLIOptions;

    fn cli() -> CLIOptions {
        CLIOptions {
            verbose: None,
            iwad: String::new(),
            pwad: Vec::new(),
            light: None,
            fixed_colourmap: None,
            tics: None,
            dump: false,
        }
    }

    #[test]
    fn cli_overrides_config() {
        let mut config = UserConfig {
            iwad: "doom.wad".to_owned(),
            ..Default::default()
        };
        let mut opts = CLIOptions {
            iwad: "doom2.wad".to_owned(),
            light: Some(96),
            ..cli()
        };
        config.sync_cli(&mut opts);
        assert_eq!(config.iwad, "doom2.wad");
        assert_eq!(config.light_level, 96);
        assert_eq!(opts.tics, Some(35));
        assert_eq!(opts.fixed_colourmap, Some(0));
    }

    #[test]
    fn config_fills_cli() {
        let mut config = UserConfig {
            iwad: "doom.wad".to_owned(),
            pwad: vec!["extra.wad".to_owned()],
            tics: 100,
            ..Default::default()
        };
        let mut opts = cli();
        config.sync_cli(&mut opts);
        assert_eq!(opts.iwad, "doom.wad");
        assert_eq!(opts.pwad, vec!["extra.wad"]);
        assert_eq!(opts.tics, Some(100));
        assert_eq!(opts.light, Some(255));
    }

    #[test]
    fn round_trip_file() {
        let path = temp_dir().join(format!("flat-colour-test-{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);

        // Missing file writes defaults
        let config = UserConfig::load_from(&path);
        assert_eq!(config, UserConfig::default());
        assert!(path.exists());

        let mut changed = config.clone();
        changed.light_level = 100;
        changed.animation.name = "FWATER1".to_owned();
        changed.write_to(&path);
        assert_eq!(UserConfig::load_from(&path), changed);

        // Partial files keep defaults for the rest
        std::fs::write(&path, "iwad = \"doom2.wad\"\n").unwrap();
        let partial = UserConfig::load_from(&path);
        assert_eq!(partial.iwad, "doom2.wad");
        assert_eq!(partial.tics, 35);

        std::fs::remove_file(&path).unwrap();
    }
}
