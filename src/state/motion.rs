use std::f64::consts::PI;

/// How a heading in degrees is split into per-tick x and y displacements.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Serialize, Deserialize)]
pub enum MotionModel {
    /// `speed·cos` / `speed·sin`. Angle 0 heads right and angles turn clockwise on screen.
    #[serde(rename = "trigonometric")]
    Trigonometric,
    /// Linear interpolation between the four axis directions, one 90° quadrant at a time.
    /// Angle 0 heads up. The displacement is shorter than `speed` between the axes.
    #[serde(rename = "piecewise")]
    Piecewise,
}

impl Default for MotionModel {
    fn default() -> MotionModel {
        MotionModel::Trigonometric
    }
}

impl MotionModel {
    /// Displacement `(dx, dy)` for one tick. `angle` must already be normalised to `[0, 360)`.
    pub fn displacement(&self, angle: f64, speed: f64) -> (f64, f64) {
        match *self {
            MotionModel::Trigonometric => {
                let radians = angle * PI / 180.0;
                (speed * radians.cos(), speed * radians.sin())
            }
            MotionModel::Piecewise => piecewise(angle, speed),
        }
    }
}

fn piecewise(angle: f64, speed: f64) -> (f64, f64) {
    let (x_direction, x_speed) = if angle <= 90.0 {
        (1.0, speed * (angle / 90.0))
    } else if angle <= 180.0 {
        (1.0, speed * (1.0 - (angle - 90.0) / 90.0))
    } else if angle <= 270.0 {
        (-1.0, speed * ((angle - 180.0) / 90.0))
    } else {
        (-1.0, speed * (1.0 - (angle - 270.0) / 90.0))
    };

    let (y_direction, y_speed) = if angle < 90.0 {
        (-1.0, speed * (1.0 - angle / 90.0))
    } else if angle <= 180.0 {
        (1.0, speed * ((angle - 90.0) / 90.0))
    } else if angle < 270.0 {
        (1.0, speed * (1.0 - (angle - 180.0) / 90.0))
    } else {
        (-1.0, speed * ((angle - 270.0) / 90.0))
    };

    (x_direction * x_speed, y_direction * y_speed)
}
