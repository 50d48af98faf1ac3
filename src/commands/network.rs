use crate::models::network::{self, NetworkKind};
use crate::App;

/// Network selector: `network` lists, `network type <Mainnet|Testnet>`
/// switches the type, `network <name>` selects a network.
///
/// The selection only changes the displayed currency label; the chain the
/// wallet session reports is untouched.
pub async fn execute(app: &App, args: &[&str]) -> Result<(), String> {
    if args.is_empty() {
        let state = app.state.lock().await;
        println!(
            "🌐 Current network: {} ({}) — currency {}",
            state.selected_network, state.network_kind, state.currency
        );
        println!("Available networks:");
        for net in network::supported() {
            println!("  {:<18} {:<8} {}", net.name, net.kind.to_string(), net.currency);
        }
        return Ok(());
    }

    if args[0].eq_ignore_ascii_case("type") {
        let kind_arg = args
            .get(1)
            .ok_or("Usage: network type <Mainnet|Testnet>".to_string())?;
        let kind = NetworkKind::parse(kind_arg)
            .ok_or_else(|| format!("Unknown network type: {}", kind_arg))?;
        let first = network::first_of(kind)
            .ok_or_else(|| format!("No networks of type {}", kind))?;

        app.state.lock().await.select_network(first);
        println!("🌐 Switched to {} networks ({})", kind, first.name);
        return Ok(());
    }

    // Network names can contain spaces ("Ethereum Sepolia")
    let name = args.join(" ");
    let net = network::find(&name).ok_or_else(|| format!("Unknown network: {}", name))?;
    app.state.lock().await.select_network(net);
    println!("🌐 Switched to {} — currency {}", net.name, net.currency);
    Ok(())
}
