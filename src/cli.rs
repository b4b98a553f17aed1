// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "frame-viewer")]
#[command(about = "Fly a camera over a wireframe ground grid", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Distance moved per Up/Down key event
    #[arg(long = "move-step")]
    pub move_step: Option<f32>,

    /// Degrees turned per Left/Right key event
    #[arg(long = "yaw-step")]
    pub yaw_step: Option<f32>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Disable the HUD overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
