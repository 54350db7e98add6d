mod cli;
mod config;
mod loader;

use cli::*;
use flat_colour::log;
use mimalloc::MiMalloc;
use simplelog::TermLogger;
use std::error::Error;
use std::path::PathBuf;

use crate::config::UserConfig;
use crate::loader::{dump_lines, load_flats, run_tics};
use crate::log::{info, warn};
use wad::WadData;

const BASE_DIR: &str = "flat-colour/";

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Load the WADs, build the flat colours, run the animation and optionally
/// dump the table
fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut user_config = UserConfig::load();
    user_config.sync_cli(&mut options);
    user_config.write();

    if options.iwad.is_empty() {
        return Err("no IWAD given, use --iwad or set it in the user config".into());
    }

    let wad_path: PathBuf = options.iwad.clone().into();
    let mut wad = WadData::new(&wad_path)?;
    for pwad in &options.pwad {
        wad.add_file(&PathBuf::from(pwad))?;
    }
    info!("Using {:?}", wad.wad_names());

    let mut loaded = load_flats(&wad, &user_config)?;

    let tics = options.tics.unwrap_or(user_config.tics);
    match run_tics(&mut loaded.colours, 0, tics) {
        Some(colour) => info!(
            "{} ended on colour {} after {} tics",
            user_config.animation.name, colour, tics
        ),
        None => warn!("No animated flat"),
    }

    if options.dump {
        let light = options.light.unwrap_or(user_config.light_level);
        for line in dump_lines(&wad, &loaded, light) {
            println!("{}", line);
        }
    }
    Ok(())
}
