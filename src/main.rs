#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io;

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, write_greeting, AutomatedAgent, ConsoleObserver, HumanAgent, TurnController,
    GRID_SIZE,
};

/// Sea Battle: sink the computer's fleet on a 6x6 board before it sinks yours.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    Cli::parse();
    init_logging();

    let mut rng = SmallRng::from_rng(&mut rand::rng());
    write_greeting(&mut io::stdout().lock())?;

    let human = HumanAgent::new(io::stdin().lock(), io::stdout());
    let mut game = TurnController::<_, _, GRID_SIZE>::with_random_grids(
        &mut rng,
        human,
        AutomatedAgent::new(),
    )?;
    let mut observer = ConsoleObserver::new(io::stdout());
    game.run(&mut rng, &mut observer)?;
    Ok(())
}
