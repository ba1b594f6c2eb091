//! Atlas Jenga runner (default binary).
//!
//! Fixed-cadence loop (~30 Hz): render, poll input until the next tick is
//! due, then run one sensor poll, at most one classification, and the
//! session transitions. Sensor faults degrade; only the leaderboard surfaces
//! errors, and those go on screen rather than ending the process.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use atlas_jenga::audio::{cues_for, AudioNotifier, LogNotifier};
use atlas_jenga::config::{Cli, GameConfig};
use atlas_jenga::core::session::{GameSession, Score, SessionEvent};
use atlas_jenga::input::handle_key_event;
use atlas_jenga::sensor::{EventClassifier, NullLink, SerialLink, SerialPortLink, WeightSampler};
use atlas_jenga::store::Leaderboard;
use atlas_jenga::term::{GameView, TerminalRenderer, ViewState};
use atlas_jenga::types::{GameInput, GamePhase, LEADERBOARD_DISPLAY_LIMIT};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.game_config();

    let store = Leaderboard::open(&cli.db)
        .with_context(|| format!("opening leaderboard database {:?}", cli.db))?;
    let sampler = WeightSampler::new(open_link(&cli));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, store, sampler);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Open the configured serial port, degrading to a dead link when the port
/// is absent or busy. The game stays playable either way; without a sensor
/// it only ends by timeout.
fn open_link(cli: &Cli) -> Box<dyn SerialLink> {
    let Some(port) = cli.port.as_deref() else {
        log::warn!("no serial port configured; running without sensor events");
        return Box::new(NullLink);
    };
    match SerialPortLink::open(port, cli.baud) {
        Ok(link) => Box::new(link),
        Err(e) => {
            log::warn!("could not open {port}: {e}; running without sensor events");
            Box::new(NullLink)
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: GameConfig,
    mut store: Leaderboard,
    mut sampler: WeightSampler<Box<dyn SerialLink>>,
) -> Result<()> {
    let mut session = GameSession::new(config);
    let mut classifier = EventClassifier::new(&config);
    let mut notifier = LogNotifier;
    let view = GameView;

    let mut top_scores = refresh_top(&store, Vec::new());
    let mut status: Option<String> = None;

    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let lines = view.render(&ViewState {
            session: &session,
            leaderboard: &top_scores,
            status: status.as_deref(),
        });
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key_event(key, session.phase()) {
                        Some(GameInput::Quit) => break,
                        Some(GameInput::Submit) => {
                            if let Some(score) = session.build_score(unix_now()) {
                                match store.add(&score) {
                                    Ok(()) => {
                                        log::info!(
                                            "score saved: {:?} -> {}",
                                            score.team_name,
                                            score.total_score
                                        );
                                        session.complete_submission();
                                        status = None;
                                        top_scores = refresh_top(&store, top_scores);
                                    }
                                    Err(e) => {
                                        // Run state is untouched; ENTER retries.
                                        log::error!("score save failed: {e}");
                                        status =
                                            Some(format!("Could not save score: {e} (ENTER retries)"));
                                    }
                                }
                            }
                        }
                        Some(input) => {
                            if session.handle_input(input, Instant::now())
                                == Some(SessionEvent::Started)
                            {
                                // The settled tower weight becomes the
                                // comparison baseline for this round.
                                classifier.rebase(sampler.sample().weight);
                                status = None;
                            }
                        }
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let sample = sampler.sample();
            if session.phase() == GamePhase::Playing {
                // Priority per tick: collapse, then removal, then timeout.
                if let Some(event) = classifier.classify(sample) {
                    play(&mut notifier, session.apply_event(event));
                }
                play(&mut notifier, session.tick(Instant::now()));
            }
        }
    }

    sampler.close();
    Ok(())
}

fn play(notifier: &mut impl AudioNotifier, event: Option<SessionEvent>) {
    if let Some(event) = event {
        for &cue in cues_for(event) {
            notifier.play(cue);
        }
    }
}

fn refresh_top(store: &Leaderboard, prev: Vec<Score>) -> Vec<Score> {
    match store.top_scores(LEADERBOARD_DISPLAY_LIMIT) {
        Ok(top) => top,
        Err(e) => {
            // Keep showing the last good snapshot.
            log::error!("leaderboard query failed: {e}");
            prev
        }
    }
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
