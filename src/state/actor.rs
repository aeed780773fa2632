use rand::Rng;
use std::collections::VecDeque;

use settings::*;
use state::food::*;
use state::geometry::*;
use state::motion::*;
use state::plane::*;
use state::tail::*;

/// What happened to an actor during one tick.
#[derive(Default, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ActorReport {
    pub wrapped: bool,
    pub tail_collision: bool,
    pub ate_food: bool,
}

/// The steerable head, its trail and its food.
#[derive(Clone, Debug)]
pub struct Actor {
    position: Point,
    angle: f64,
    speed: f64,
    size: f64,
    active: bool,
    // Chronological head positions, most recent last.
    history: VecDeque<Point>,
    tail: Vec<TailSegment>,
    food: Food,

    start_position: Point,
    start_angle: f64,
    start_speed: f64,
    tail_length: usize,
    sample_stride: usize,
    motion: MotionModel,
}

impl Actor {
    pub fn new<R: Rng>(settings: &Settings, plane: &Plane, rng: &mut R) -> Actor {
        let mut actor = Actor {
            position: settings.start_position,
            angle: normalize_angle(settings.start_angle),
            speed: settings.speed,
            size: settings.actor_size,
            active: true,
            history: VecDeque::new(),
            tail: Vec::new(),
            food: Food::spawn(plane, settings.food_size, rng),
            start_position: settings.start_position,
            start_angle: normalize_angle(settings.start_angle),
            start_speed: settings.speed,
            tail_length: settings.tail_length,
            sample_stride: settings.sample_stride,
            motion: settings.motion,
        };
        actor.init_tail();
        actor
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tail(&self) -> &[TailSegment] {
        &self.tail
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.position, self.size)
    }

    /// Puts the head somewhere without moving the trail.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Replaces the current food outright.
    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn reset_position(&mut self) {
        self.position = self.start_position;
        self.angle = self.start_angle;
        self.speed = self.start_speed;
    }

    pub fn reset_tail(&mut self) {
        self.tail.clear();
        self.history.clear();
        self.init_tail();
    }

    /// Back to the starting state, moving again. The current food is kept.
    pub fn reset(&mut self) {
        self.start();
        self.reset_position();
        self.reset_tail();
    }

    pub fn change_angle(&mut self, degrees: f64) {
        self.angle = normalize_angle(self.angle + degrees);
    }

    /// Advances the actor by one step. A stopped actor ignores ticks.
    pub fn tick<R: Rng>(&mut self, plane: &Plane, rng: &mut R) -> ActorReport {
        if !self.active {
            return ActorReport::default();
        }

        self.move_head();
        let wrapped = self.check_overflow(plane);
        self.position_tails();
        let tail_collision = self.check_tail_collision();
        let ate_food = self.check_food(plane, rng);
        self.history.push_back(self.position);

        trace!("head at ({:.2}, {:.2}) heading {}°",
               self.position.x,
               self.position.y,
               self.angle);

        ActorReport {
            wrapped: wrapped,
            tail_collision: tail_collision,
            ate_food: ate_food,
        }
    }

    fn init_tail(&mut self) {
        for _ in 0..self.tail_length {
            self.tail.push(TailSegment::new(self.size));
        }
    }

    fn move_head(&mut self) {
        let (dx, dy) = self.motion.displacement(self.angle, self.speed);
        self.position = self.position.translate(dx, dy);
    }

    fn check_overflow(&mut self, plane: &Plane) -> bool {
        match plane.wrap(self.position, self.size) {
            Some(wrapped) => {
                debug!("head left the plane at ({:.2}, {:.2}), re-entering at ({:.2}, {:.2})",
                       self.position.x,
                       self.position.y,
                       wrapped.x,
                       wrapped.y);
                self.position = wrapped;
                true
            }
            None => false,
        }
    }

    /// Segment `i` takes the history sample `stride * (i + 1)` entries back from the newest.
    /// Segments the history cannot reach yet keep their last position. Samples older than
    /// the last segment needs are dropped.
    fn position_tails(&mut self) {
        let len = self.history.len();
        for (index, segment) in self.tail.iter_mut().enumerate() {
            let back = self.sample_stride.saturating_mul(index + 1);
            if back > len {
                break;
            }
            segment.move_to(self.history[len - back]);
        }

        let needed = self.sample_stride.saturating_mul(self.tail.len());
        if len > needed {
            self.history.drain(..len - needed);
        }
    }

    // The first segment trails right behind the head and overlaps it in every turn.
    fn check_tail_collision(&self) -> bool {
        let head = self.hitbox();
        self.tail.iter().skip(1).any(|segment| segment.hits(&head))
    }

    pub fn eats_food(&self) -> bool {
        self.hitbox().overlaps(&self.food.hitbox())
    }

    fn check_food<R: Rng>(&mut self, plane: &Plane, rng: &mut R) -> bool {
        if !self.eats_food() {
            return false;
        }
        let size = self.food.size;
        self.food = Food::spawn(plane, size, rng);
        true
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{TestResult, quickcheck};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;

    fn actor_with(settings: &Settings) -> (Actor, Plane, StdRng) {
        let plane = settings.plane();
        let mut rng = StdRng::seed_from_u64(42);
        let mut actor = Actor::new(settings, &plane, &mut rng);
        // Keep food out of the way unless a test places it.
        actor.set_food(Food::new(Point::new(-1000.0, -1000.0), settings.food_size));
        (actor, plane, rng)
    }

    fn default_actor() -> (Actor, Plane, StdRng) {
        actor_with(&Settings::default())
    }

    #[test]
    fn starts_from_defaults() {
        let plane = Plane::new(500.0, 500.0);
        let mut rng = StdRng::seed_from_u64(1);
        let actor = Actor::new(&Settings::default(), &plane, &mut rng);
        assert_eq!(actor.position(), Point::new(240.0, 240.0));
        assert_eq!(actor.angle(), 0.0);
        assert_eq!(actor.speed(), 5.0);
        assert!(actor.is_active());
        assert_eq!(actor.tail().len(), 10);
        assert!(actor.tail().iter().all(|s| !s.placed && s.size == 20.0));
        assert!(plane.contains(actor.food().position, actor.food().size));
        assert_eq!(actor.history_len(), 0);
    }

    #[test]
    fn one_tick_heads_right() {
        let (mut actor, plane, mut rng) = default_actor();
        let report = actor.tick(&plane, &mut rng);
        assert_eq!(actor.position(), Point::new(245.0, 240.0));
        assert_eq!(report, ActorReport::default());
        assert_eq!(actor.history_len(), 1);
    }

    #[test]
    fn piecewise_tick_heads_up() {
        let settings = Settings { motion: MotionModel::Piecewise, ..Settings::default() };
        let (mut actor, plane, mut rng) = actor_with(&settings);
        actor.tick(&plane, &mut rng);
        assert_eq!(actor.position(), Point::new(240.0, 235.0));
    }

    #[test]
    fn steering_left_from_zero_wraps() {
        let (mut actor, _, _) = default_actor();
        actor.change_angle(-5.0);
        assert_eq!(actor.angle(), 355.0);
        actor.change_angle(10.0);
        assert_eq!(actor.angle(), 5.0);
    }

    fn angle_stays_in_range_prop(deltas: Vec<i16>) -> bool {
        let (mut actor, _, _) = default_actor();
        deltas.iter().all(|&d| {
            actor.change_angle(d as f64);
            actor.angle() >= 0.0 && actor.angle() < 360.0
        })
    }

    #[test]
    fn angle_stays_in_range() {
        quickcheck(angle_stays_in_range_prop as fn(Vec<i16>) -> bool);
    }

    fn full_turn_is_identity_prop(start: i16) -> bool {
        let (mut actor, _, _) = default_actor();
        actor.change_angle(start as f64);
        let before = actor.angle();
        actor.change_angle(360.0);
        actor.angle() == before
    }

    #[test]
    fn full_turn_is_identity() {
        quickcheck(full_turn_is_identity_prop as fn(i16) -> bool);
    }

    #[test]
    fn overflow_teleports_to_opposite_edge() {
        let (mut actor, plane, _) = default_actor();
        actor.set_position(Point::new(501.0, 240.0));
        assert!(actor.check_overflow(&plane));
        assert_eq!(actor.position(), Point::new(-20.0, 240.0));
        assert!(!actor.check_overflow(&plane));
    }

    #[test]
    fn tick_wraps_at_the_edge() {
        let (mut actor, plane, mut rng) = default_actor();
        actor.set_position(Point::new(498.0, 240.0));
        let report = actor.tick(&plane, &mut rng);
        assert!(report.wrapped);
        assert_eq!(actor.position(), Point::new(-20.0, 240.0));
    }

    #[test]
    fn segments_follow_the_head_at_stride_spacing() {
        let (mut actor, plane, mut rng) = default_actor();
        for _ in 0..6 {
            actor.tick(&plane, &mut rng);
        }
        assert!(actor.tail().iter().all(|s| !s.placed));

        // The 7th tick sees six samples: the first segment reaches the oldest.
        actor.tick(&plane, &mut rng);
        assert_eq!(actor.tail()[0].position, Point::new(245.0, 240.0));
        assert!(actor.tail()[0].placed);
        assert!(!actor.tail()[1].placed);

        for _ in 0..6 {
            actor.tick(&plane, &mut rng);
        }
        assert_eq!(actor.tail()[0].position, Point::new(275.0, 240.0));
        assert_eq!(actor.tail()[1].position, Point::new(245.0, 240.0));
        assert!(!actor.tail()[2].placed);
    }

    #[test]
    fn history_is_trimmed_to_what_the_tail_needs() {
        let (mut actor, plane, mut rng) = default_actor();
        for _ in 0..500 {
            actor.tick(&plane, &mut rng);
            assert!(actor.history_len() <= 6 * 10 + 1);
        }
        assert_eq!(actor.history_len(), 6 * 10 + 1);
        assert!(actor.tail().iter().all(|s| s.placed));
    }

    #[test]
    fn short_history_keeps_last_positions() {
        let (mut actor, plane, mut rng) = default_actor();
        for _ in 0..70 {
            actor.tick(&plane, &mut rng);
        }
        let before: Vec<Point> = actor.tail().iter().map(|s| s.position).collect();

        actor.history.clear();
        actor.history.extend(vec![Point::new(1.0, 1.0); 7]);
        actor.position_tails();

        assert_eq!(actor.tail()[0].position, Point::new(1.0, 1.0));
        for i in 1..10 {
            assert_eq!(actor.tail()[i].position, before[i]);
            assert!(actor.tail()[i].placed);
        }
    }

    fn tail_exemption_prop(head: Point, index: usize) -> TestResult {
        let (mut actor, _, _) = default_actor();
        let index = index % actor.tail.len();
        actor.set_position(head);
        for segment in actor.tail.iter_mut() {
            segment.move_to(head.translate(1000.0, 1000.0));
        }
        actor.tail[index].move_to(head);
        TestResult::from_bool(actor.check_tail_collision() == (index != 0))
    }

    #[test]
    fn tail_exemption() {
        quickcheck(tail_exemption_prop as fn(Point, usize) -> TestResult);
    }

    #[test]
    fn turning_tightly_runs_into_the_tail() {
        let settings = Settings { tail_length: 20, ..Settings::default() };
        let (mut actor, plane, mut rng) = actor_with(&settings);
        let mut collided = false;
        for _ in 0..200 {
            actor.change_angle(15.0);
            if actor.tick(&plane, &mut rng).tail_collision {
                collided = true;
                break;
            }
        }
        assert!(collided);
    }

    #[test]
    fn eating_respawns_food() {
        let (mut actor, plane, mut rng) = default_actor();
        actor.set_food(Food::new(Point::new(0.0, 0.0), 20.0));
        actor.set_position(Point::new(5.0, 5.0));
        assert!(actor.eats_food());

        assert!(actor.check_food(&plane, &mut rng));
        assert!(plane.contains(actor.food().position, 20.0));
    }

    #[test]
    fn eating_is_reported_by_tick() {
        let (mut actor, plane, mut rng) = default_actor();
        actor.set_food(Food::new(Point::new(250.0, 240.0), 20.0));
        let report = actor.tick(&plane, &mut rng);
        assert!(report.ate_food);
        assert!(!report.tail_collision);
    }

    #[test]
    fn stopped_actor_ignores_ticks() {
        let (mut actor, plane, mut rng) = default_actor();
        actor.tick(&plane, &mut rng);
        actor.stop();
        let report = actor.tick(&plane, &mut rng);
        assert_eq!(report, ActorReport::default());
        assert_eq!(actor.position(), Point::new(245.0, 240.0));
        assert_eq!(actor.history_len(), 1);
    }

    #[test]
    fn reset_restores_the_start() {
        let (mut actor, plane, mut rng) = default_actor();
        actor.change_angle(45.0);
        for _ in 0..30 {
            actor.tick(&plane, &mut rng);
        }
        actor.stop();
        actor.reset();
        assert!(actor.is_active());
        assert_eq!(actor.position(), Point::new(240.0, 240.0));
        assert_eq!(actor.angle(), 0.0);
        assert_eq!(actor.speed(), 5.0);
        assert_eq!(actor.tail().len(), 10);
        assert!(actor.tail().iter().all(|s| !s.placed));
        assert_eq!(actor.history_len(), 0);
    }
}
