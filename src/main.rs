use voicebot::scenario::{run_scenario, wait_for_enter};
use voicebot::{Config, Console, Renderer};

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    // Diagnostics go to stderr; stdout carries only the console lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    let (console, console_rx) = Console::new();
    let mut renderer = Renderer::new(std::io::stdout().lock());

    run_scenario(&config, &console);
    renderer.drain(&console_rx)?;

    if config.wait_for_enter {
        wait_for_enter(&mut std::io::stdin().lock())?;
    }
    Ok(())
}
