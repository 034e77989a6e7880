use anyhow::{Context, Result};
use speedgolf_score::args;
use speedgolf_score::run::evaluate;

fn main() -> Result<()> {
    let cli = args::args_checks();
    init_logging(cli.verbose);

    let clean = args::load_config(cli)?;
    log::debug!("evaluating {:?}", clean.operation);

    let outcome = evaluate(&clean.operation);
    let rendered = if clean.json {
        outcome
            .render_json(&clean.operation)
            .context("serialize result")?
    } else {
        outcome.render_text()
    };
    println!("{rendered}");

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
