use clap::Parser;
use std::path::PathBuf;
use supersawer::host::ObjectClass;
use supersawer::supersaw::SupersawConfig;

#[derive(Parser, Debug)]
#[command(name = "supersawer", about = "Detuned supersaw frequency spread")]
struct Cli {
    /// Number of detuned voice pairs (0, negative or missing means 1)
    #[arg(allow_negative_numbers = true)]
    max_voices: Option<i64>,

    /// TOML file with initial parameter values
    #[arg(long, env = "SUPERSAWER_CONFIG")]
    config: Option<PathBuf>,

    /// Read messages from stdin and print outlet values instead of opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SupersawConfig::load(path).unwrap_or_else(|e| {
            log::warn!("{}; using defaults", e);
            SupersawConfig::default()
        }),
        None => SupersawConfig::default(),
    };
    let class = ObjectClass::with_defaults("Supersawer", config);

    if cli.headless {
        let mut instance = class.instantiate(cli.max_voices);
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout().lock();
        supersawer::headless::run(&mut instance, stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    log::info!("Starting {} patch", class.name());
    supersawer::gui::run(class, cli.max_voices)?;
    Ok(())
}
