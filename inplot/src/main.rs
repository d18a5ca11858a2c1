mod feed;
mod handle;

use clap::{Parser, Subcommand};
use inplot_core::{LabConfig, RollMode, WindowIdentity, MAX_DATA};
use inplot_gui::{run_plot_window, PlotWindowConfig};
use inplot_transport::{ChildMessage, LineSender};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inplot", version, about = "Live analog-input plot window")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a plot window (normally spawned by the control system).
    Run {
        /// Channel connection name; "-" suppresses it in the title.
        #[arg(long)]
        connection_name: String,
        #[arg(long)]
        hardware_name: String,
        #[arg(long)]
        device_name: String,
        /// Lab config file holding ports.BLACS_Broker_Pub.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Broker publish port, overriding the config file.
        #[arg(long)]
        broker_port: Option<u16>,
        /// Maximum number of datapoints kept for display.
        #[arg(long, default_value_t = MAX_DATA)]
        max_data: usize,
        /// Fill to capacity before rolling instead of the compatible
        /// roll-in-place behavior.
        #[arg(long)]
        strict_roll: bool,
    },
    /// Spawn a window and drive it with a synthetic feed over both
    /// channels. Manual-testing aid.
    Feed {
        /// Port to bind the demo broker on; 0 picks one.
        #[arg(long, default_value_t = 0)]
        port: u16,
        /// Milliseconds between batches.
        #[arg(long, default_value_t = 50)]
        interval_ms: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            connection_name,
            hardware_name,
            device_name,
            config,
            broker_port,
            max_data,
            strict_roll,
        } => {
            let broker_port = match broker_port {
                Some(port) => port,
                None => LabConfig::load(config.as_deref())?.broker_pub_port()?,
            };
            let identity = WindowIdentity::new(connection_name, hardware_name, device_name);
            let roll_mode = if strict_roll {
                RollMode::Strict
            } else {
                RollMode::Compat
            };
            run_plot_window(PlotWindowConfig {
                identity,
                broker_port,
                max_data,
                roll_mode,
            })?;

            // The UI loop is done; let the parent supervisor know. The
            // parent may already be gone, which is not our problem.
            let mut to_parent = LineSender::new(std::io::stdout().lock());
            if let Err(err) = to_parent.send(&ChildMessage::Closed) {
                log::debug!("could not report closure to parent: {err}");
            }
        }
        Commands::Feed { port, interval_ms } => feed::run(port, interval_ms)?,
    }

    Ok(())
}
