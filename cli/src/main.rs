mod args;
mod export;
mod menu;
mod presenter;

use args::Args;
use menu::{ReportKind, menu_text};

use bayes_cipher::errors::BayesCipherError;
use bayes_cipher::simulate::{Decoder, empirical_loss};
use bayes_cipher::{Analysis, AnalysisConfig, CipherSystem};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::io::{self, Write};
use std::process::ExitCode;

fn read_selection() -> Result<String, BayesCipherError> {
    print!("{}> ", menu_text());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn print_simulation(
    system: &CipherSystem,
    analysis: &Analysis,
    trials: usize,
    seed: u64,
) -> Result<(), BayesCipherError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let deterministic = empirical_loss(
        system,
        Decoder::Deterministic(&analysis.deterministic_rule),
        trials,
        &mut rng,
    )?;
    let stochastic = empirical_loss(
        system,
        Decoder::Stochastic(&analysis.stochastic_rule),
        trials,
        &mut rng,
    )?;

    println!("Simulated {} messages (seed {}):", trials, seed);
    println!(
        "  deterministic rule: {:.4} (expected {:.4})",
        deterministic, analysis.deterministic_loss
    );
    println!(
        "  stochastic rule:    {:.4} (expected {:.4})",
        stochastic, analysis.stochastic_loss
    );
    Ok(())
}

fn run(args: &Args) -> Result<(), BayesCipherError> {
    let system = args.load_system()?;
    let config: AnalysisConfig = args.config();
    log::debug!("alphabet size {}, unreachable policy {}", system.n(), config.unreachable);

    if args.export.is_some() || args.simulate.is_some() {
        let analysis = Analysis::run(&system, &config)?;
        if let Some(dir) = &args.export {
            let path = export::write_analysis(dir, &config, &system, &analysis)?;
            println!("Analysis written to {}", path.display());
        }
        if let Some(trials) = args.simulate {
            print_simulation(&system, &analysis, trials, args.seed)?;
        }
    }

    let selection = match &args.report {
        Some(report) => report.clone(),
        None if args.export.is_some() || args.simulate.is_some() => return Ok(()),
        None => read_selection()?,
    };

    match ReportKind::from_selection(&selection) {
        Some(kind) => println!("{}", presenter::render_report(kind, &system, &config)?),
        None => {
            log::debug!("rejected menu selection {:?}", selection.trim());
            println!("Invalid selection");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
