/// Print the command list
pub fn execute() -> Result<(), String> {
    println!("NetMain Wallet commands:");
    println!("  connect                    Connect the wallet");
    println!("  balance | bal              Fetch the account balance");
    println!("  send <address> <amount>    Submit a transfer");
    println!("  history | tx               Show the transaction history");
    println!("  chart [file.png]           Render the daily activity chart");
    println!("  network [name]             Show or switch the network selector");
    println!("  network type <kind>        Switch between Mainnet and Testnet");
    println!("  mode                       Toggle efficient contract mode");
    println!("  receive                    Show your address for receiving");
    println!("  estimate <amount>          Show the display gas estimate");
    println!("  export [file.json]         Export the history as JSON");
    println!("  quit                       Exit");
    Ok(())
}
