use dotenv::dotenv;
use taskkeep::commands::Cli;
use taskkeep::libs::logging;

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    let _ = dotenv();
    logging::init();

    Cli::menu()
}
