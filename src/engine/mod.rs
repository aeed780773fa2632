use rand::Rng;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use errors::*;
use settings::*;
use state::*;

mod storage;
mod snapshot;
pub mod clock;

pub use self::storage::*;
pub use self::snapshot::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum State {
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "game_over")]
    GameOver,
}

/// A discrete steer event.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Turn {
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "right")]
    Right,
}

#[derive(Default, Debug, PartialEq, Clone)]
pub struct TickSummary {
    pub reports: BTreeMap<String, ActorReport>,
    pub eaten: u64,
    pub game_over: bool,
}

/// One game: the plane, the score and the actors playing on it. Actors are kept in name
/// order, which is the order they move in.
pub struct GameSession<R: Rng, S: Storage> {
    uuid: Uuid,
    settings: Settings,
    plane: Plane,
    state: State,
    score: u64,
    actors: BTreeMap<String, Actor>,
    rng: R,
    storage: S,
}

impl<R: Rng, S: Storage> GameSession<R, S> {
    pub fn new(settings: Settings, rng: R, storage: S) -> Result<GameSession<R, S>> {
        settings.validate()?;
        let session = GameSession {
            uuid: Uuid::new_v4(),
            plane: settings.plane(),
            settings: settings,
            state: State::Running,
            score: 0,
            actors: BTreeMap::new(),
            rng: rng,
            storage: storage,
        };
        info!("session {} started on a {}x{} plane",
              session.uuid,
              session.plane.width,
              session.plane.height);
        Ok(session)
    }

    pub fn add_actor(&mut self, desired_name: &str) -> String {
        // Find an unused name based upon the desired_name.
        let mut final_name = desired_name.to_string();
        while self.actors.contains_key(&final_name) {
            final_name += "_";
        }

        let mut actor = Actor::new(&self.settings, &self.plane, &mut self.rng);
        if self.state == State::GameOver {
            actor.stop();
        }
        self.actors.insert(final_name.clone(), actor);

        final_name
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    pub fn actor(&self, name: &str) -> Option<&Actor> {
        self.actors.get(name)
    }

    pub fn actor_mut(&mut self, name: &str) -> Option<&mut Actor> {
        self.actors.get_mut(name)
    }

    pub fn actor_names(&self) -> Vec<String> {
        self.actors.keys().cloned().collect()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn change_angle(&mut self, name: &str, degrees: f64) -> Result<()> {
        match self.actors.get_mut(name) {
            Some(actor) => {
                actor.change_angle(degrees);
                Ok(())
            }
            None => Err(ErrorKind::UnknownActor(name.to_string()).into()),
        }
    }

    pub fn steer(&mut self, name: &str, turn: Turn) -> Result<()> {
        let degrees = match turn {
            Turn::Left => -self.settings.steer_step,
            Turn::Right => self.settings.steer_step,
        };
        self.change_angle(name, degrees)
    }

    /// Advances every active actor by one step, in name order. A tail collision ends the
    /// game before that actor's food is scored, so the best-score comparison never counts
    /// food eaten on the fatal step. Ticking a finished game does nothing.
    pub fn tick(&mut self) -> Result<TickSummary> {
        let mut summary = TickSummary::default();
        if self.state == State::GameOver {
            return Ok(summary);
        }

        for name in self.actor_names() {
            let report = match self.actors.get_mut(&name) {
                Some(actor) => {
                    let report = actor.tick(&self.plane, &mut self.rng);
                    if report.ate_food {
                        debug!("{} ate; next food at ({:.0}, {:.0})",
                               name,
                               actor.food().position.x,
                               actor.food().position.y);
                    }
                    report
                }
                None => continue,
            };

            if report.tail_collision {
                debug!("{} ran into its own tail", name);
                if !summary.game_over {
                    self.game_over()?;
                    summary.game_over = true;
                }
            }
            if report.ate_food {
                self.add_score();
                summary.eaten += 1;
            }
            summary.reports.insert(name, report);
        }

        trace!("tick done, score {}", self.score);
        Ok(summary)
    }

    pub fn add_score(&mut self) -> u64 {
        self.score += 1;
        self.score
    }

    pub fn highscore(&self) -> Result<u64> {
        get_highscore(&self.storage, &self.settings.highscore_key)
    }

    /// Stops every actor and records the score if it beats the stored best.
    pub fn game_over(&mut self) -> Result<()> {
        for actor in self.actors.values_mut() {
            actor.stop();
        }
        if self.state == State::Running {
            info!("session {} over with score {}", self.uuid, self.score);
        }
        self.state = State::GameOver;

        let best = self.highscore().chain_err(|| "reading high score")?;
        if self.score > best {
            set_highscore(&mut self.storage, &self.settings.highscore_key, self.score)
                .chain_err(|| "recording high score")?;
            info!("new high score {} (was {})", self.score, best);
        }
        Ok(())
    }

    /// Starts over from the initial positions with a zero score. Food stays where it is.
    pub fn reset_game(&mut self) {
        for actor in self.actors.values_mut() {
            actor.reset();
        }
        self.score = 0;
        self.state = State::Running;
        info!("session {} restarted", self.uuid);
    }

    pub fn snapshot(&self) -> Result<Snapshot> {
        let actors = self.actor_names()
            .iter()
            .map(|name| ActorSnapshot::new(name, &self.actors[name]))
            .collect();
        Ok(Snapshot {
            session: self.uuid,
            state: self.state,
            score: self.score,
            highscore: self.highscore()?,
            plane: self.plane,
            actors: actors,
        })
    }
}

impl<R: Rng, S: Storage> fmt::Debug for GameSession<R, S> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("GameSession")
            .field("uuid", &self.uuid)
            .field("state", &self.state)
            .field("score", &self.score)
            .field("plane", &self.plane)
            .field("actors", &self.actors)
            .finish()
    }
}
