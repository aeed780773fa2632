use rand::Rng;
use std::cmp::max;
use std::time::Duration;
use futures::{Future, Stream};
use tokio_timer::{self, Timer};

use engine::*;
use errors::*;
use settings::*;

/// Input arriving between ticks.
#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Steer { actor: String, turn: Turn },
    Restart,
    Quit,
}

impl Command {
    /// Reads one line of terminal input addressed to `actor`.
    pub fn parse(line: &str, actor: &str) -> Option<Command> {
        let steer = |turn| {
            Some(Command::Steer {
                     actor: actor.to_string(),
                     turn: turn,
                 })
        };
        match line.trim().to_lowercase().as_str() {
            "l" | "left" => steer(Turn::Left),
            "r" | "right" => steer(Turn::Right),
            "restart" | "again" => Some(Command::Restart),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
enum Input {
    Tick,
    Command(Command),
}

/// A timer fine-grained enough for the configured tick interval.
pub fn timer_for(settings: &Settings) -> Timer {
    let resolution = max(settings.tick_interval.millis() / 10, 1);
    tokio_timer::wheel()
        .tick_duration(Duration::from_millis(resolution))
        .thread_name("serpentine-clock")
        .build()
}

/// Ticks `session` every `tick_interval` and applies `commands` in between, one input at a
/// time, until `Command::Quit`. `observer` sees the session after every tick.
pub fn run<R, S, C, F>(session: GameSession<R, S>,
                       timer: &Timer,
                       commands: C,
                       mut observer: F)
                       -> Box<Future<Item = GameSession<R, S>, Error = Error>>
    where R: Rng + 'static,
          S: Storage + 'static,
          C: Stream<Item = Command, Error = ()> + 'static,
          F: FnMut(&GameSession<R, S>, &TickSummary) + 'static
{
    let interval: Duration = session.settings().tick_interval.into();
    let ticks = timer.interval(interval)
        .map(|_| Input::Tick)
        .map_err(Error::from);
    let commands = commands.map(Input::Command)
        .map_err(|_| Error::from(ErrorKind::CommandStreamFailed));

    let future = ticks.select(commands)
        .take_while(|input| Ok::<bool, Error>(*input != Input::Command(Command::Quit)))
        .fold(session, move |mut session, input| -> Result<GameSession<R, S>> {
            match input {
                Input::Tick => {
                    let summary = session.tick()?;
                    observer(&session, &summary);
                }
                Input::Command(Command::Steer { actor, turn }) => {
                    if let Err(e) = session.steer(&actor, turn) {
                        warn!("dropping steer command: {}", e);
                    }
                }
                Input::Command(Command::Restart) => session.reset_game(),
                Input::Command(Command::Quit) => {}
            }
            Ok(session)
        });
    Box::new(future)
}
