pub mod calc;
pub mod list;

use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keygr", version)]
#[command(about = "Recovers the factory default keys of wireless routers.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the default keys of a network
    #[command(alias = "c")]
    Calc(CalcArgs),
    /// List every supported router family
    #[command(alias = "l")]
    List,
}

#[derive(Args)]
#[command(group(ArgGroup::new("network").required(true).multiple(true).args(["ssid", "mac"])))]
pub struct CalcArgs {
    /// Broadcast name of the network
    #[arg(short, long, value_name = "NETWORK_NAME")]
    pub ssid: Option<String>,

    /// BSSID of the access point, e.g. 00:1F:90:E2:7E:41
    #[arg(short, long, value_name = "MAC_ADDRESS")]
    pub mac: Option<String>,

    /// Print keys as algorithm:key
    #[arg(short = 'k', long = "kg")]
    pub show_algorithm: bool,

    /// Print only the calculated keys
    #[arg(short, long)]
    pub quiet: bool,

    /// Run the matched algorithms on all cores
    #[arg(long)]
    pub parallel: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
