mod script;

use clap::{Parser, Subcommand};
use freefly_common::FreeflyConfig;
use freefly_input::KeyBindings;
use freefly_navigator::Navigator;
use freefly_render::{DebugTextRenderer, RenderView, Renderer, Scene};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "freefly-cli", about = "Headless tools for the freefly navigator")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions and the default navigator settings
    Info,
    /// Hold keys for a number of frames and print the resulting path
    Simulate {
        /// Comma-separated key names to hold, e.g. `w,e`
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<String>,
        /// Number of frames to step
        #[arg(short, long, default_value = "10")]
        frames: u32,
        /// Elapsed milliseconds per frame
        #[arg(long, default_value = "16.0")]
        frame_ms: f32,
        /// Pointer motion applied before every frame, as `dx,dy` pixels
        #[arg(long, value_parser = script::parse_look, allow_hyphen_values = true)]
        look: Option<(f32, f32)>,
        /// Emit one JSON object per frame instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the view-projection matrix at the start pose and project the demo scene
    Matrix {
        /// Viewport width / height
        #[arg(short, long, default_value = "1.7777778")]
        aspect: f32,
    },
    /// Print the effective configuration as YAML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = FreeflyConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("freefly-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("input: {}", freefly_input::crate_info());
            println!("render: {}", freefly_render::crate_info());
            let nav = Navigator::new(config.navigator.clone());
            let p = nav.position();
            let o = nav.orientation();
            println!(
                "navigator: start=({:.2}, {:.2}, {:.2}) yaw={:.3} pitch={:.3} clamp_pitch={}",
                p.x, p.y, p.z, o.yaw, o.pitch, config.navigator.clamp_pitch
            );
            println!(
                "speeds: base={} fast={} (x{:.3})",
                config.navigator.base_speed,
                config.navigator.fast_speed,
                config.navigator.fast_speed / config.navigator.base_speed
            );
        }
        Commands::Simulate {
            keys,
            frames,
            frame_ms,
            look,
            json,
        } => {
            let bindings = KeyBindings::with_overrides(&config.bindings)?;
            let plan = script::Plan::new(&bindings, &keys, frames, frame_ms, look)?;
            let mut nav = Navigator::new(config.navigator.clone());
            for sample in plan.run(&mut nav) {
                if json {
                    println!("{}", serde_json::to_string(&sample)?);
                } else {
                    println!("{sample}");
                }
            }
        }
        Commands::Matrix { aspect } => {
            let nav = Navigator::new(config.navigator.clone());
            let view = RenderView {
                view_proj: nav.view_projection(aspect),
                time_ms: 0.0,
            };
            print!("{}", DebugTextRenderer::new().render(&Scene::demo(), &view));
        }
        Commands::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
