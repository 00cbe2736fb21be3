use clap::Parser;

use booktoc::cli::Args;
use booktoc::config::DatabaseConfig;
use booktoc::store::CozoSectionStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let backend = DatabaseConfig::from_url(&args.db)?.connect()?;
    let store = CozoSectionStore::new(backend);
    let output = args.command.run(&store, args.format)?;
    println!("{}", output);
    Ok(())
}
