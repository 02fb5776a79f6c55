//! Listcheck binary
//!
//! Draws the water counter on stdout and reads commands from stdin.
//! Logs go to stderr; set `RUST_LOG` to change verbosity.

use listcheck::cli::{Command, HELP};
use listcheck::{ListCheckConfig, Reply, Session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "listcheck=debug,uiflow_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("=== Water Counter ===  (type `help` for commands)\n");

    let mut session = Session::new(ListCheckConfig::default());
    println!("{}\n", session.frame().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            },
        };

        match session.handle(command).await? {
            Reply::Updated => {},
            Reply::Ignored => println!("(that control is not available right now)"),
            Reply::Help => {
                println!("{HELP}\n");
                continue;
            },
            Reply::Quit => break,
        }
        println!("{}\n", session.frame().await);
    }

    session.shutdown();
    Ok(())
}
