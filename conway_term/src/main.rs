// main.rs - Conway's Game of Life in the terminal
// Draws a generation, waits one tick, advances, repeats until asked to stop.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::EventStream;
use futures_lite::StreamExt;
use log::info;

mod config;
mod game;
mod ui;

use config::Args;
use game::GameOfLife;
use ui::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Quit,
    Interrupted,
    GenerationLimit,
    Cycle,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.list_patterns {
        for pattern in conway::PATTERNS {
            println!("{:<20} {}x{}", pattern.name, pattern.height(), pattern.width());
        }
        return Ok(());
    }

    let grid = args.initial_grid()?;
    info!(
        "starting {}x{} grid with {} live cells, {} strategy, {:?} per tick",
        grid.rows(),
        grid.cols(),
        grid.live_count(),
        args.strategy,
        args.interval()
    );

    let mut game = GameOfLife::new(grid, args.strategy);
    let stop = run(&mut game, &args).await?;

    info!("stopped at generation {}: {stop:?}", game.generation());
    println!("bye bye (generation {})", game.generation());
    Ok(())
}

/// Runs the tick loop. Key presses are handled as they arrive, not once
/// per tick. The terminal is restored before this returns, whether or not
/// it fails.
async fn run(game: &mut GameOfLife, args: &Args) -> Result<Stop> {
    let mut screen = Screen::enter(args.glyph).context("failed to set up the terminal")?;
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(args.interval());

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            event = events.next() => match event {
                Some(Ok(event)) if ui::is_quit_event(&event) => return Ok(Stop::Quit),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e).context("failed to read terminal input"),
                None => return Ok(Stop::Quit),
            },
            // Raw mode swallows Ctrl-C as a key; this only fires on an external SIGINT.
            _ = tokio::signal::ctrl_c() => return Ok(Stop::Interrupted),
        }

        screen.draw(game)?;

        if args.stop_on_cycle && game.has_cycled() {
            return Ok(Stop::Cycle);
        }
        if args.generations.is_some_and(|limit| game.generation() >= limit) {
            return Ok(Stop::GenerationLimit);
        }

        game.update_generation();
    }
}
