use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde_json;

use errors::*;
use state::*;
use utils::*;

/// Upper bound on the head positions an actor keeps, `sample_stride * tail_length`.
pub const MAX_HISTORY: usize = 1_000_000;

/// Every tunable of a session. Fields missing from a settings file keep their defaults.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: f64,
    pub height: f64,
    /// Side of the head's square hitbox; tail segments share it.
    pub actor_size: f64,
    pub food_size: f64,
    /// Distance travelled per tick.
    pub speed: f64,
    pub start_position: Point,
    pub start_angle: f64,
    pub tail_length: usize,
    /// History samples between two consecutive tail segments.
    pub sample_stride: usize,
    pub tick_interval: Milliseconds,
    /// Degrees turned per steer event.
    pub steer_step: f64,
    pub highscore_key: String,
    pub motion: MotionModel,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            width: 500.0,
            height: 500.0,
            actor_size: 20.0,
            food_size: 20.0,
            speed: 5.0,
            start_position: Point::new(240.0, 240.0),
            start_angle: 0.0,
            tail_length: 10,
            sample_stride: 6,
            tick_interval: Milliseconds::new(50),
            steer_step: 5.0,
            highscore_key: "snake_highscore".to_string(),
            motion: MotionModel::default(),
        }
    }
}

impl Settings {
    pub fn from_json_str(s: &str) -> Result<Settings> {
        let settings: Settings = serde_json::from_str(s).chain_err(|| "parsing settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        let mut contents = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut contents))
            .chain_err(|| format!("reading settings from {}", path.display()))?;
        Settings::from_json_str(&contents)
    }

    pub fn plane(&self) -> Plane {
        Plane::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(reason: &str) -> Result<()> {
            Err(ErrorKind::InvalidSettings(reason.to_string()).into())
        }

        let finite = [self.width,
                      self.height,
                      self.actor_size,
                      self.food_size,
                      self.speed,
                      self.start_position.x,
                      self.start_position.y,
                      self.start_angle,
                      self.steer_step];
        if finite.iter().any(|v| !v.is_finite()) {
            return invalid("every numeric setting must be finite");
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid("plane width and height must be positive");
        }
        if self.actor_size <= 0.0 || self.food_size <= 0.0 {
            return invalid("actor and food sizes must be positive");
        }
        if self.food_size > self.width || self.food_size > self.height {
            return invalid("food must fit on the plane");
        }
        if self.speed <= 0.0 {
            return invalid("speed must be positive");
        }
        if self.sample_stride == 0 {
            return invalid("sample stride must be at least 1");
        }
        match self.sample_stride.checked_mul(self.tail_length) {
            Some(history) if history <= MAX_HISTORY => {}
            _ => return invalid("tail length times sample stride is too large"),
        }
        if self.tick_interval.millis() == 0 {
            return invalid("tick interval must be at least 1ms");
        }
        if self.highscore_key.is_empty() {
            return invalid("high score key must not be empty");
        }
        Ok(())
    }
}
