extern crate ansi_term;
extern crate env_logger;
extern crate futures;
#[macro_use]
extern crate log;
extern crate rand;
extern crate serpentine;

use std::env;
use std::io::{self, BufRead};
use std::thread;
use ansi_term::Colour::{Green, Red, Yellow};
use futures::{Future, Sink};
use futures::sync::mpsc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use serpentine::*;
use serpentine::engine::clock::{self, Command};
use serpentine::utils::*;

type Session = GameSession<StdRng, JsonFileStorage>;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        println!("error: {}", e);

        for e in e.iter().skip(1) {
            println!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            println!("backtrace: {:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // First argument: an optional settings file. Second: where to keep the high score.
    let settings = match env::args().nth(1) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let store_path = env::args()
        .nth(2)
        .unwrap_or_else(|| "serpentine-highscore.json".to_string());
    let storage = JsonFileStorage::open(&store_path)?;

    let mut session: Session = GameSession::new(settings, StdRng::from_entropy(), storage)?;
    let player = session.add_actor("player");
    println!("{}",
             Yellow.paint(format!("Highscore: {}", session.highscore()?)));
    println!("Steer with `l`/`r` + Enter, `restart` after a crash, `quit` to leave.");

    let (command_tx, command_rx) = mpsc::channel(16);
    read_commands(player, command_tx);

    let timer = clock::timer_for(session.settings());
    let session = clock::run(session, &timer, command_rx, report)
        .wait()?;

    println!("{}",
             Yellow.paint(format!("Final score: {}  Highscore: {}",
                                  session.score(),
                                  session.highscore()?)));
    Ok(())
}

fn report(session: &Session, summary: &TickSummary) {
    if log_enabled!(log::Level::Debug) {
        match session.snapshot().and_then(|s| json(&s)) {
            Ok(line) => debug!("{}", line),
            Err(e) => warn!("could not encode snapshot: {}", e),
        }
    }

    if summary.eaten > 0 {
        println!("{}", Green.paint(format!("Score: {}", session.score())));
    }
    if summary.game_over {
        println!("{}",
                 Red.bold().paint(format!("GAME OVER  Score: {}", session.score())));
        println!("Type `restart` to play again.");
    }
}

// Stdin is read on its own thread; commands are applied by the clock between ticks.
fn read_commands(actor: String, tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut tx = tx;
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("stopped reading input: {}", e);
                    break;
                }
            };
            let command = match Command::parse(&line, &actor) {
                Some(command) => command,
                None => {
                    println!("Unknown command {:?}", line.trim());
                    continue;
                }
            };
            tx = match tx.send(command).wait() {
                Ok(tx) => tx,
                Err(_) => return,
            };
        }
        drop(tx.send(Command::Quit).wait());
    });
}
