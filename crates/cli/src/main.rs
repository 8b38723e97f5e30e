use clap::Parser;

fn main() -> anyhow::Result<()> {
    stockwise_observability::init();

    let cli = stockwise_cli::Cli::parse();
    let output = stockwise_cli::run(&cli)?;
    println!("{output}");
    Ok(())
}
