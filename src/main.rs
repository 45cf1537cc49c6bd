//! Console driver: reads one line, prints its encoding under the default
//! machine settings.

use std::error::Error;
use std::io::{self, BufRead, Write};

use enigma_machine::MachineConfig;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("ENIGMA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let mut machine = MachineConfig::historical_default().build()?;

    let mut stdout = io::stdout();
    write!(stdout, "Enter a message to encode: ")?;
    stdout.flush()?;

    let mut message = String::new();
    io::stdin().lock().read_line(&mut message)?;

    let encoded = machine.encode_message(&message);
    tracing::info!(letters = encoded.len(), "message encoded");
    writeln!(stdout, "Encoded Message: {}", encoded)?;
    Ok(())
}
