//! Treasure Quest terminal runner (default binary).
//!
//! A line-oriented game: each turn prints the board, asks for a move and
//! narrates what happened. Logs go to stderr and stay quiet unless `-v` or
//! `RUST_LOG` asks for more.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use tracing::info;
use tracing_subscriber::EnvFilter;

use treasure_quest::config::{log_level, Cli, Command, GameConfig};
use treasure_quest::core::{Encounter, GameRng, GameState, MoveOutcome, TemplateSet};
use treasure_quest::input::{ControlScheme, Prompter};
use treasure_quest::term::narrate::{self, INTRO_PAGES};
use treasure_quest::term::{BoardView, FrameBuffer, TerminalRenderer};

const SEPARATOR: &str =
    "---------------------------------------------------------------------------------------";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Command::WriteMaps { path }) = &cli.command {
        TemplateSet::builtin()
            .write_to(path)
            .with_context(|| format!("writing maps to {}", path.display()))?;
        println!("Wrote built-in maps to {}", path.display());
        return Ok(());
    }

    let mut config = GameConfig::from_env().with_cli(&cli);
    if !io::stdout().is_tty() {
        config.color = false;
    }
    info!(?config, "starting treasure quest");

    let templates = match &config.maps {
        Some(path) => TemplateSet::load(path)
            .with_context(|| format!("loading maps from {}", path.display()))?,
        None => TemplateSet::builtin(),
    };
    let mut rng = match config.seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut renderer = TerminalRenderer::stdout(config.color);

    match run(&config, &templates, &mut rng, &mut prompter, &mut renderer) {
        // Closing stdin ends the game quietly.
        Err(err) if is_end_of_input(&err) => {
            info!("input closed");
            Ok(())
        }
        other => other,
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}

fn run<R: BufRead, W: Write, O: Write>(
    config: &GameConfig,
    templates: &TemplateSet,
    rng: &mut GameRng,
    prompter: &mut Prompter<R, W>,
    renderer: &mut TerminalRenderer<O>,
) -> Result<()> {
    if !config.skip_intro {
        for page in INTRO_PAGES {
            prompter.wait_for_enter(page)?;
        }
        prompter.say("\n\n\n\n\n")?;
    }

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut controls = ControlScheme::numpad();
    let mut round = 0u32;

    loop {
        round += 1;
        controls = choose_controls(prompter, renderer, controls)?;

        let mut game = GameState::from_templates(templates, rng, config.strength)?;
        info!(round, start = %game.board().start(), "round started");

        while !game.status().is_over() {
            renderer.say(&[SEPARATOR])?;
            view.render_into(&game.snapshot(), &mut fb);
            renderer.draw(&fb)?;

            let direction = prompter.ask_direction(&controls)?;
            renderer.say(&[""])?;
            let outcome = game.step(direction, rng, prompter)?;
            renderer.say(&narrate::describe(&outcome))?;

            if fought(&outcome) {
                prompter.wait_for_enter("Press Enter to continue: ")?;
            }
        }

        renderer.say(&[SEPARATOR])?;
        view.render_into(&game.snapshot(), &mut fb);
        renderer.draw(&fb)?;
        renderer.say(&[narrate::end_message(game.status())])?;
        info!(round, status = ?game.status(), moves = game.moves(), "round finished");

        if !prompter.ask_yes_no("Would you like to play again? (y/n) ")? {
            return Ok(());
        }
        renderer.say(&[""])?;
    }
}

fn choose_controls<R: BufRead, W: Write, O: Write>(
    prompter: &mut Prompter<R, W>,
    renderer: &mut TerminalRenderer<O>,
    current: ControlScheme,
) -> Result<ControlScheme> {
    if current.is_numpad() {
        renderer.say(&[
            "This game is designed to be played with the number pad.",
            "The controls are as follows:",
            "",
        ])?;
    } else {
        renderer.say(&["Your current controls:", ""])?;
    }
    renderer.say(&narrate::controls_help(&current))?;
    renderer.say(&[""])?;

    if !prompter.ask_yes_no("Would you like to use different controls? (y/n) ")? {
        renderer.say(&[""])?;
        return Ok(current);
    }
    renderer.say(&[""])?;

    let controls = prompter.remap_controls()?;
    renderer.say(&["", "New controls:"])?;
    renderer.say(&narrate::controls_help(&controls))?;
    renderer.say(&[""])?;
    Ok(controls)
}

fn fought(outcome: &MoveOutcome) -> bool {
    matches!(
        outcome,
        MoveOutcome::Arrived(arrival) if matches!(arrival.visit.encounter, Encounter::Combat(_))
    )
}
