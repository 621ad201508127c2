use macspoof::{AddressManager, Config, SystemRunner, TOOL_ENV};

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(version, about = "Read and spoof network interface hardware addresses")]
struct Cli {
    /// Interface-configuration program to run
    #[clap(long, global = true, env = TOOL_ENV)]
    tool: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a random address starting with 00
    Generate,
    /// Check whether an address is well-formed
    Validate { mac: String },
    /// Print the current address of an interface
    Show {
        #[clap(short, long)]
        interface: String,
    },
    /// Assign an address to an interface, generating one if none or an invalid one is given
    Set {
        #[clap(short, long)]
        interface: String,
        #[clap(short, long)]
        mac: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Cli::parse();
    let config = match args.tool {
        Some(tool) => Config::with_tool(tool),
        None => Config::default(),
    };
    let manager = AddressManager::new(config, SystemRunner);

    match args.command {
        Commands::Generate => {
            println!("{}", manager.generate_address());
        }
        Commands::Validate { mac } => {
            if !manager.validate(&mac) {
                println!("invalid");
                return ExitCode::FAILURE;
            }
            println!("valid");
        }
        Commands::Show { interface } => match manager.get_current_address(&interface) {
            Ok(mac) => println!("{mac}"),
            Err(e) => {
                error!("Cannot read address of {interface}: {e}");
                return ExitCode::FAILURE;
            }
        },
        Commands::Set { interface, mac } => {
            cfg_if::cfg_if! {
                if #[cfg(unix)] {
                    macspoof::sys::posix::warn_if_unprivileged();
                }
            }
            match manager.set_address(&interface, mac.as_deref()) {
                Ok(mac) => println!("{mac}"),
                Err(e) => {
                    error!("Cannot change address of {interface}: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }
    ExitCode::SUCCESS
}
