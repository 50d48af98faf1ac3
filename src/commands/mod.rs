//! User action boundary
//!
//! One module per action, dispatched from `handle_line`. Every error is
//! caught here and surfaced as a single user-visible line; nothing
//! propagates further and a failed action never takes the process down.

pub mod balance;
pub mod chart;
pub mod connect;
pub mod estimate;
pub mod export;
pub mod help;
pub mod history;
pub mod mode;
pub mod network;
pub mod receive;
pub mod send;

use tracing::error;

use crate::App;

pub async fn handle_line(app: &App, line: &str) {
    // Parse command and arguments
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    let command = parts[0];
    let args = &parts[1..];

    let result = match command {
        "connect" => connect::execute(app).await,
        "balance" | "bal" => balance::execute(app).await,
        "send" | "transfer" => send::execute(app, args).await,
        "history" | "tx" => history::execute(app).await,
        "chart" => chart::execute(app, args).await,
        "network" | "net" => network::execute(app, args).await,
        "mode" => mode::execute(app).await,
        "receive" => receive::execute(app).await,
        "estimate" | "gas" => estimate::execute(args),
        "export" => export::execute(app, args).await,
        "help" => help::execute(),
        _ => {
            println!("Unknown command '{}'. Type `help` for the list.", command);
            return;
        }
    };

    if let Err(e) = result {
        error!(command, error = %e, "command failed");
        println!("❌ {}", e);
    }
}
