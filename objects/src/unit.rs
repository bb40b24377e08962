use crate::config::BlockedPolicy;
use common::shapes::Point;
use std::collections::VecDeque;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Idle,
    Moving { destination: Point },
}

/// Movement state of a unit: a queue of waypoints and the leg in progress.
///
/// A unit travels in a straight line toward one waypoint at a time. Each
/// tick it asks to be displaced by `speed * elapsed` along that line and
/// never past the waypoint itself.
#[derive(Debug, Clone)]
pub struct Unit {
    speed: f32,
    waypoints: VecDeque<Point>,
    motion: Motion,
}

impl Unit {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            waypoints: VecDeque::new(),
            motion: Motion::Idle,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, Motion::Moving { .. })
    }

    pub fn destination(&self) -> Option<Point> {
        match self.motion {
            Motion::Moving { destination } => Some(destination),
            Motion::Idle => None,
        }
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Point> + '_ {
        self.waypoints.iter()
    }

    // Without add_waypoint the current leg and queue are dropped
    pub(crate) fn send_to(&mut self, destination: Point, add_waypoint: bool) {
        if !add_waypoint {
            self.waypoints.clear();
            self.motion = Motion::Idle;
        }
        self.waypoints.push_back(destination);
    }

    /// Displacement requested for this tick, if the unit is travelling.
    pub(crate) fn advance(&mut self, position: Point, elapsed: f32, threshold: f32) -> Option<Point> {
        self.settle(position, threshold);
        if self.motion == Motion::Idle {
            self.start_next_leg(position, threshold);
        }
        let destination = self.destination()?;

        let remaining = destination - position;
        let distance = remaining.length();
        let step = self.speed * elapsed;
        if step <= 0.0 {
            return None;
        }
        if step >= distance {
            Some(remaining)
        } else {
            Some(remaining.normalized() * step)
        }
    }

    // Moving -> Idle once the destination is within threshold
    pub(crate) fn settle(&mut self, position: Point, threshold: f32) {
        if let Motion::Moving { destination } = self.motion {
            if position.distance_to(destination) < threshold {
                trace!(x = destination.x, y = destination.y, "unit arrived");
                self.motion = Motion::Idle;
            }
        }
    }

    pub(crate) fn blocked(&mut self, policy: BlockedPolicy) {
        match policy {
            BlockedPolicy::Keep => {}
            BlockedPolicy::SkipLeg => self.motion = Motion::Idle,
            BlockedPolicy::Halt => {
                self.motion = Motion::Idle;
                self.waypoints.clear();
            }
        }
    }

    // Waypoints already within threshold are dropped
    fn start_next_leg(&mut self, position: Point, threshold: f32) {
        while let Some(waypoint) = self.waypoints.pop_front() {
            if position.distance_to(waypoint) > threshold {
                self.motion = Motion::Moving {
                    destination: waypoint,
                };
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.5;

    #[test]
    fn idle_without_waypoints() {
        let mut unit = Unit::new(1.0);
        assert_eq!(unit.advance(Point::new(0.0, 0.0), 1.0, THRESHOLD), None);
        assert_eq!(unit.motion(), Motion::Idle);
    }

    #[test]
    fn moves_toward_destination_at_speed() {
        let mut unit = Unit::new(2.0);
        unit.send_to(Point::new(0.0, 10.0), false);
        let step = unit.advance(Point::new(0.0, 0.0), 1.5, THRESHOLD);
        assert_eq!(step, Some(Point::new(0.0, 3.0)));
        assert_eq!(unit.destination(), Some(Point::new(0.0, 10.0)));
        assert_eq!(unit.waypoints().count(), 0);
    }

    #[test]
    fn never_overshoots() {
        let mut unit = Unit::new(10.0);
        unit.send_to(Point::new(3.0, 4.0), false);
        let step = unit.advance(Point::new(0.0, 0.0), 1.0, THRESHOLD);
        assert_eq!(step, Some(Point::new(3.0, 4.0)));
        unit.settle(Point::new(3.0, 4.0), THRESHOLD);
        assert!(!unit.is_moving());
    }

    #[test]
    fn skips_waypoints_already_reached() {
        let mut unit = Unit::new(1.0);
        unit.send_to(Point::new(0.2, 0.0), false);
        unit.send_to(Point::new(5.0, 0.0), true);
        let step = unit.advance(Point::new(0.0, 0.0), 1.0, THRESHOLD);
        assert_eq!(step, Some(Point::new(1.0, 0.0)));
        assert_eq!(unit.destination(), Some(Point::new(5.0, 0.0)));
    }

    #[test]
    fn continues_with_queued_waypoint_after_arrival() {
        let mut unit = Unit::new(1.0);
        unit.send_to(Point::new(1.0, 0.0), false);
        unit.send_to(Point::new(1.0, 4.0), true);
        assert_eq!(
            unit.advance(Point::new(0.0, 0.0), 1.0, THRESHOLD),
            Some(Point::new(1.0, 0.0))
        );
        assert_eq!(
            unit.advance(Point::new(1.0, 0.0), 1.0, THRESHOLD),
            Some(Point::new(0.0, 1.0))
        );
        assert_eq!(unit.destination(), Some(Point::new(1.0, 4.0)));
    }

    #[test]
    fn replacing_cancels_current_leg() {
        let mut unit = Unit::new(1.0);
        unit.send_to(Point::new(10.0, 0.0), false);
        unit.send_to(Point::new(10.0, 10.0), true);
        unit.advance(Point::new(0.0, 0.0), 1.0, THRESHOLD);
        unit.send_to(Point::new(-5.0, 0.0), false);
        assert_eq!(unit.motion(), Motion::Idle);
        assert_eq!(unit.waypoints().copied().collect::<Vec<_>>(), vec![Point::new(-5.0, 0.0)]);
    }

    #[test]
    fn blocked_policies() {
        let mut unit = Unit::new(1.0);
        unit.send_to(Point::new(10.0, 0.0), false);
        unit.send_to(Point::new(0.0, 10.0), true);
        unit.advance(Point::new(0.0, 0.0), 1.0, THRESHOLD);

        let mut keep = unit.clone();
        keep.blocked(BlockedPolicy::Keep);
        assert_eq!(keep.destination(), Some(Point::new(10.0, 0.0)));

        let mut skip = unit.clone();
        skip.blocked(BlockedPolicy::SkipLeg);
        assert_eq!(skip.motion(), Motion::Idle);
        assert_eq!(skip.waypoints().count(), 1);

        unit.blocked(BlockedPolicy::Halt);
        assert_eq!(unit.motion(), Motion::Idle);
        assert_eq!(unit.waypoints().count(), 0);
    }
}
