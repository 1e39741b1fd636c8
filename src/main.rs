#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{
    init_logging, AiPlayer, CliPlayer, ClientNode, GameStatus, InMemoryTransport, Participant,
    Player, ServerNode, TcpTransport, DEFAULT_BIND_ADDR, DEFAULT_CONNECT_ADDR,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace). Overrides TICTACTOE_LOG.
    #[arg(long, global = true)]
    log_level: Option<log::LevelFilter>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Host a game as X and wait for one client to connect.
    Server {
        #[arg(long, default_value = DEFAULT_BIND_ADDR)]
        bind: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix the AI's RNG seed for reproducible games")]
        seed: Option<u64>,
    },
    /// Connect to a server and play as O.
    Client {
        #[arg(long, default_value = DEFAULT_CONNECT_ADDR)]
        connect: String,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix the AI's RNG seed for reproducible games")]
        seed: Option<u64>,
    },
    /// Run server and client in one process over an in-memory channel.
    /// The client side is always the AI.
    Local {
        #[arg(long, value_enum, default_value_t = PlayerType::Ai)]
        player: PlayerType,
        #[arg(long, help = "Fix the AI's RNG seed for reproducible games")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn make_player(kind: PlayerType, rng: SmallRng) -> Box<dyn Player> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::stdio()),
        PlayerType::Ai => {
            println!("AI player selected.");
            Box::new(AiPlayer::new(rng))
        }
    }
}

#[cfg(feature = "std")]
fn announce(status: GameStatus, me: Participant) {
    println!("{}", tictactoe::ui::outcome_banner(status, me));
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Server { bind, player, seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            println!("Server is listening for incoming connections on {}...", bind);
            let transport = TcpTransport::accept_one(&bind).await?;
            println!("Client connected");

            let mut node = ServerNode::new(make_player(player, make_rng(seed)), Box::new(transport));
            if let Err(e) = node.run().await {
                eprintln!("Game ended with an error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Client {
            connect,
            player,
            seed,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let transport = TcpTransport::connect(&connect).await?;
            println!("Connected to the server.");

            let mut node = ClientNode::new(make_player(player, make_rng(seed)), Box::new(transport));
            if let Err(e) = node.run().await {
                eprintln!("Game ended with an error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Local { player, seed } => {
            println!("Starting local game over an in-memory channel...");
            let mut rng = make_rng(seed);
            let client_rng = SmallRng::from_rng(&mut rng);
            let (t1, t2) = InMemoryTransport::pair();

            let mut server = ServerNode::new(make_player(player, rng), Box::new(t1));
            let mut client = ClientNode::new(Box::new(AiPlayer::new(client_rng)), Box::new(t2));

            let (status, _) = tokio::try_join!(server.run(), client.run())?;
            announce(status, Participant::Server);
        }
    }
    Ok(())
}
