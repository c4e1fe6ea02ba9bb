use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cueline_remote::RemoteConfig;
use cueline_tools::{SequenceAction, ShowTools};

#[derive(Parser)]
#[command(name = "cueline", about = "Drive a grandMA2-style console over telnet")]
struct Cli {
    /// Console host address
    #[arg(long, env = "CUELINE_HOST")]
    host: String,

    /// Telnet port (30001 is the read-only variant)
    #[arg(long, env = "CUELINE_PORT", default_value_t = cueline_remote::DEFAULT_PORT)]
    port: u16,

    /// Login user
    #[arg(long, env = "CUELINE_USER", default_value = cueline_remote::DEFAULT_USER)]
    user: String,

    /// Login password
    #[arg(long, env = "CUELINE_PASSWORD", default_value = cueline_remote::DEFAULT_PASSWORD)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Select a fixture range and store it as a group
    Group {
        /// First fixture id
        start: i64,
        /// Last fixture id
        end: i64,
        /// Group pool id to store into
        group_id: u32,
        /// Optional group label
        #[arg(long)]
        name: Option<String>,
    },
    /// Drive a sequence
    Sequence {
        /// Sequence id
        sequence: u32,
        /// What to do with it
        #[arg(value_enum)]
        action: Action,
        /// Target cue for goto, decimals allowed
        #[arg(long)]
        cue: Option<f64>,
    },
    /// Send one raw command line unmodified
    Send {
        /// The command to send
        command: String,
    },
    /// Send a command and print the console's feedback
    Query {
        /// The command to send
        command: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Action {
    /// Run the sequence forward
    Go,
    /// Pause the sequence
    Pause,
    /// Jump to a cue (requires --cue)
    Goto,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = RemoteConfig::new(cli.host)
        .with_port(cli.port)
        .with_credentials(cli.user, cli.password);

    let mut tools = ShowTools::connect(config).await?;

    let outcome = match cli.command {
        Command::Group {
            start,
            end,
            group_id,
            name,
        } => {
            tools
                .create_fixture_group(start, end, group_id, name.as_deref())
                .await?
        }
        Command::Sequence {
            sequence,
            action,
            cue,
        } => {
            let action = match (action, cue) {
                (Action::Go, _) => SequenceAction::Go,
                (Action::Pause, _) => SequenceAction::Pause,
                (Action::Goto, Some(cue)) => SequenceAction::Goto(cue.into()),
                (Action::Goto, None) => bail!("goto requires --cue"),
            };
            tools.run_sequence(sequence, action).await?
        }
        Command::Send { command } => tools.send_raw(&command).await?,
        Command::Query { command } => tools.query(&command).await?,
    };

    println!("{}", outcome);
    tools.close().await?;
    Ok(())
}
