use argh::FromArgs;
use flat_colour::log;

/// Reduce every flat in a WAD to one colour and show the results
#[derive(Debug, Clone, FromArgs)]
pub struct CLIOptions {
    /// verbose level: off, error, warn, info, debug
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// path to game WAD
    #[argh(option, default = "Default::default()")]
    pub iwad: String,
    /// path to patch WAD
    #[argh(option)]
    pub pwad: Vec<String>,
    /// sector light level 0-255 used for the lit colour
    #[argh(option)]
    pub light: Option<usize>,
    /// force a colourmap for every light level, 0 is off
    #[argh(option)]
    pub fixed_colourmap: Option<usize>,
    /// number of tics to run the flat animation for
    #[argh(option)]
    pub tics: Option<u32>,
    /// print the colour of every flat
    #[argh(switch)]
    pub dump: bool,
}
