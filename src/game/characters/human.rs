// Human NPC actor

use glam::{Quat, Vec3};
use rand::Rng;

use crate::core::math::{look_rotation, rotate_towards};
use crate::engine::animator::Animator;
use crate::engine::collision::{ColliderTag, OverlapEvent};
use crate::engine::color::ColorSource;

use super::appearance::Appearance;
use super::state::HumanState;
use super::stats::Stats;

/// Animator parameter mirrored on every state change
pub const STATE_PARAM: &str = "State";

/// A human stops moving once it is this close to its target
pub const MIN_DISTANCE_TO_TARGET: f32 = 1.5;

/// Speed multiplier while flailing
const FLAIL_SPEED_MODIFIER: f32 = 2.0;

/// A wandering human NPC.
///
/// Humans idle near their target, and flail away from any player that gets
/// inside their trigger volume. Facing is driven manually (the physics body
/// has its rotation frozen); the vertical velocity component stays owned by
/// the host physics so gravity keeps working.
#[derive(Debug)]
pub struct Human {
    /// Movement configuration
    pub stats: Stats,
    /// Visual variants chosen at spawn
    pub appearance: Appearance,

    position: Vec3,
    rotation: Quat,
    target: Vec3,
    velocity: Vec3,
    state: HumanState,
    animator: Animator,
}

impl Human {
    /// Spawn a human at `position`.
    ///
    /// The target defaults to the spawn position, so an unassigned human
    /// idles in place until a collision event retargets it.
    pub fn new(stats: Stats, appearance: Appearance, position: Vec3) -> Self {
        let mut human = Self {
            stats,
            appearance,
            position,
            rotation: Quat::IDENTITY,
            target: position,
            velocity: Vec3::ZERO,
            state: HumanState::Idle,
            animator: Animator::new(),
        };

        // Publish the initial state so the animator never reads a stale value
        human.set_state(HumanState::Idle);
        human
    }

    /// Run the spawn-time appearance randomization (best effort; missing
    /// configuration is logged and skipped)
    pub fn randomize_appearance<R: Rng, C: ColorSource>(&mut self, rng: &mut R, colors: &mut C) {
        self.appearance.randomize(rng, colors);
    }

    pub fn state(&self) -> HumanState {
        self.state
    }

    /// Change state, mirroring the integer encoding into the animator's
    /// "State" parameter
    pub fn set_state(&mut self, state: HumanState) {
        self.animator.set_integer(STATE_PARAM, state.animator_value());
        self.state = state;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Retarget the human (normally done by collision events)
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// The animator this human writes its state parameter to
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Fixed physics tick.
    ///
    /// `vertical_velocity` is the physics-owned y component read from the
    /// body before the tick; it is preserved in the returned velocity so the
    /// host can hand the whole vector back to the body.
    pub fn physics_tick(&mut self, dt: f32, vertical_velocity: f32) -> Vec3 {
        let heading = self.position - self.target;
        let distance = heading.length();
        let direction = if distance > 0.0 {
            heading / distance
        } else {
            Vec3::ZERO
        };

        if distance < MIN_DISTANCE_TO_TARGET {
            self.set_state(HumanState::Idle);
        }

        let mut flip = false;
        match self.state {
            HumanState::Idle => {
                self.velocity = Vec3::new(0.0, vertical_velocity, 0.0);
            }
            HumanState::Walk => {
                self.velocity = -direction * (self.stats.speed * dt);
            }
            HumanState::Flail => {
                flip = true;
                self.velocity = direction * (FLAIL_SPEED_MODIFIER * self.stats.speed * dt);
            }
        }

        // Facing follows the horizontal move direction, flipped while flailing
        let move_dir = if flip {
            Vec3::new(direction.x, 0.0, direction.z)
        } else {
            Vec3::new(-direction.x, 0.0, -direction.z)
        };

        if move_dir != Vec3::ZERO {
            let wanted = look_rotation(move_dir, Vec3::Y);
            self.rotation =
                rotate_towards(self.rotation, wanted, self.stats.rotate_speed * dt);
        }

        self.velocity.y = vertical_velocity;
        self.velocity
    }

    /// Integrate position from the last computed velocity.
    ///
    /// The host physics normally owns integration; the demo loop and tests
    /// use this directly.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Dispatch one overlap notification from the host collision system
    pub fn on_overlap(&mut self, event: OverlapEvent) {
        match event {
            OverlapEvent::Enter { tag, .. } => self.on_overlap_enter(tag),
            OverlapEvent::Stay { tag, other } => self.on_overlap_stay(tag, other),
            OverlapEvent::Exit { tag, .. } => self.on_overlap_exit(tag),
        }
    }

    /// A volume started overlapping this human's trigger
    pub fn on_overlap_enter(&mut self, tag: ColliderTag) {
        if tag == ColliderTag::Player && self.state != HumanState::Flail {
            self.set_state(HumanState::Flail);
        }

        if tag == ColliderTag::Waypoint && self.state != HumanState::Idle {
            self.set_state(HumanState::Idle);
        }
    }

    /// A volume is still overlapping this tick; players become the new target
    pub fn on_overlap_stay(&mut self, tag: ColliderTag, other: Vec3) {
        if tag == ColliderTag::Player && self.state != HumanState::Flail {
            self.target = other;
            self.set_state(HumanState::Flail);
        }
    }

    /// A volume stopped overlapping this human's trigger
    pub fn on_overlap_exit(&mut self, tag: ColliderTag) {
        if tag == ColliderTag::Player && self.state != HumanState::Idle {
            self.set_state(HumanState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::horizontal;

    const DT: f32 = 1.0 / 60.0;

    fn spawn_at(position: Vec3) -> Human {
        Human::new(Stats::new(10.0, 180.0), Appearance::new(), position)
    }

    #[test]
    fn test_spawn_defaults() {
        let human = spawn_at(Vec3::new(3.0, 0.0, -2.0));
        assert_eq!(human.state(), HumanState::Idle);
        assert_eq!(human.target(), Vec3::new(3.0, 0.0, -2.0));
        assert_eq!(human.animator().get_integer(STATE_PARAM), Some(0));
    }

    #[test]
    fn test_state_updates_animator_parameter() {
        let mut human = spawn_at(Vec3::ZERO);

        human.set_state(HumanState::Walk);
        assert_eq!(human.animator().get_integer(STATE_PARAM), Some(1));

        human.set_state(HumanState::Flail);
        assert_eq!(human.animator().get_integer(STATE_PARAM), Some(2));

        human.set_state(HumanState::Idle);
        assert_eq!(human.animator().get_integer(STATE_PARAM), Some(0));
    }

    #[test]
    fn test_close_to_target_forces_idle() {
        let mut human = spawn_at(Vec3::ZERO);
        human.set_target(Vec3::new(1.0, 0.0, 0.0)); // within 1.5 units
        human.set_state(HumanState::Flail);

        human.physics_tick(DT, 0.0);

        assert_eq!(human.state(), HumanState::Idle);
        assert_eq!(horizontal(human.velocity()), Vec3::ZERO);
    }

    #[test]
    fn test_idle_clamp_is_idempotent() {
        let mut human = spawn_at(Vec3::ZERO);
        human.set_target(Vec3::new(0.5, 0.0, 0.0));

        for _ in 0..10 {
            human.physics_tick(DT, 0.0);
            assert_eq!(human.state(), HumanState::Idle);
        }
    }

    #[test]
    fn test_idle_preserves_vertical_velocity() {
        let mut human = spawn_at(Vec3::ZERO);
        let velocity = human.physics_tick(DT, -3.2);
        assert_eq!(velocity, Vec3::new(0.0, -3.2, 0.0));
    }

    #[test]
    fn test_flail_moves_away_from_target() {
        let mut human = spawn_at(Vec3::new(10.0, 0.0, 0.0));
        human.set_target(Vec3::ZERO);
        human.set_state(HumanState::Flail);

        let velocity = human.physics_tick(DT, 0.0);

        // Heading points from target to human (+X), flail moves along it
        assert!(velocity.x > 0.0);
        assert_eq!(velocity.z, 0.0);
    }

    #[test]
    fn test_walk_moves_toward_target() {
        let mut human = spawn_at(Vec3::new(10.0, 0.0, 0.0));
        human.set_target(Vec3::ZERO);
        human.set_state(HumanState::Walk);

        let velocity = human.physics_tick(DT, 0.0);

        assert!(velocity.x < 0.0);
    }

    #[test]
    fn test_flail_speed_is_double_walk_speed() {
        let stats = Stats::new(10.0, 180.0);

        let mut walker = Human::new(stats, Appearance::new(), Vec3::new(10.0, 0.0, 0.0));
        walker.set_target(Vec3::ZERO);
        walker.set_state(HumanState::Walk);
        let walk_speed = horizontal(walker.physics_tick(DT, 0.0)).length();

        let mut flailer = Human::new(stats, Appearance::new(), Vec3::new(10.0, 0.0, 0.0));
        flailer.set_target(Vec3::ZERO);
        flailer.set_state(HumanState::Flail);
        let flail_speed = horizontal(flailer.physics_tick(DT, 0.0)).length();

        assert!((flail_speed - 2.0 * walk_speed).abs() < 1e-5);
    }

    #[test]
    fn test_vertical_velocity_always_preserved() {
        let mut human = spawn_at(Vec3::new(10.0, 0.0, 0.0));
        human.set_target(Vec3::ZERO);
        human.set_state(HumanState::Flail);

        let velocity = human.physics_tick(DT, -9.81);
        assert_eq!(velocity.y, -9.81);
    }

    #[test]
    fn test_rotation_step_is_bounded() {
        // Walking along -X wants a facing 90 degrees from the spawn facing
        let mut human = Human::new(
            Stats::new(10.0, 90.0),
            Appearance::new(),
            Vec3::new(10.0, 0.0, 0.0),
        );
        human.set_target(Vec3::ZERO);
        human.set_state(HumanState::Walk);

        let before = human.rotation();
        human.physics_tick(DT, 0.0);
        let stepped = before.angle_between(human.rotation()).to_degrees();

        let max_step = 90.0 * DT;
        assert!(
            stepped <= max_step + 1e-3,
            "rotated {} degrees, max {}",
            stepped,
            max_step
        );
    }

    #[test]
    fn test_rotation_converges_on_heading() {
        let mut human = spawn_at(Vec3::new(10.0, 0.0, 0.0));
        human.set_target(Vec3::ZERO);
        human.set_state(HumanState::Walk);

        for _ in 0..600 {
            human.physics_tick(DT, 0.0);
        }

        // Walk facing is the negated heading: toward the target (-X)
        let forward = human.rotation() * Vec3::Z;
        assert!(forward.x < -0.99, "forward was {:?}", forward);
    }

    #[test]
    fn test_player_enter_triggers_flail() {
        let mut human = spawn_at(Vec3::ZERO);
        human.on_overlap_enter(ColliderTag::Player);
        assert_eq!(human.state(), HumanState::Flail);
        assert_eq!(human.animator().get_integer(STATE_PARAM), Some(2));
    }

    #[test]
    fn test_waypoint_enter_triggers_idle() {
        let mut human = spawn_at(Vec3::ZERO);
        human.set_state(HumanState::Flail);
        human.on_overlap_enter(ColliderTag::Waypoint);
        assert_eq!(human.state(), HumanState::Idle);
    }

    #[test]
    fn test_player_stay_retargets_and_flails() {
        let mut human = spawn_at(Vec3::ZERO);
        let player = Vec3::new(4.0, 0.0, 4.0);

        human.on_overlap_stay(ColliderTag::Player, player);

        assert_eq!(human.state(), HumanState::Flail);
        assert_eq!(human.target(), player);
    }

    #[test]
    fn test_player_stay_while_flailing_keeps_target() {
        let mut human = spawn_at(Vec3::ZERO);
        human.on_overlap_stay(ColliderTag::Player, Vec3::new(4.0, 0.0, 4.0));

        // Already flailing: the stay handler must not retarget again
        human.on_overlap_stay(ColliderTag::Player, Vec3::new(-8.0, 0.0, 0.0));
        assert_eq!(human.target(), Vec3::new(4.0, 0.0, 4.0));
    }

    #[test]
    fn test_player_exit_triggers_idle() {
        let mut human = spawn_at(Vec3::ZERO);
        human.set_state(HumanState::Flail);
        human.on_overlap_exit(ColliderTag::Player);
        assert_eq!(human.state(), HumanState::Idle);
    }

    #[test]
    fn test_untagged_overlaps_are_ignored() {
        let mut human = spawn_at(Vec3::ZERO);
        human.on_overlap_enter(ColliderTag::Untagged);
        human.on_overlap_stay(ColliderTag::Untagged, Vec3::ONE);
        human.on_overlap_exit(ColliderTag::Untagged);
        assert_eq!(human.state(), HumanState::Idle);
        assert_eq!(human.target(), Vec3::ZERO);
    }

    #[test]
    fn test_overlap_event_dispatch() {
        let mut human = spawn_at(Vec3::ZERO);
        human.on_overlap(OverlapEvent::Enter {
            tag: ColliderTag::Player,
            other: Vec3::new(2.0, 0.0, 0.0),
        });
        assert_eq!(human.state(), HumanState::Flail);

        human.on_overlap(OverlapEvent::Exit {
            tag: ColliderTag::Player,
            other: Vec3::new(2.0, 0.0, 0.0),
        });
        assert_eq!(human.state(), HumanState::Idle);
    }

    #[test]
    fn test_flail_runs_until_out_of_range_then_idles() {
        let mut human = spawn_at(Vec3::new(2.0, 0.0, 0.0));
        human.on_overlap_stay(ColliderTag::Player, Vec3::ZERO);
        assert_eq!(human.state(), HumanState::Flail);

        // Flailing moves away from the player, so distance only grows and
        // the human keeps flailing until the player leaves the trigger
        for _ in 0..30 {
            human.physics_tick(DT, 0.0);
            human.integrate(DT);
            assert_eq!(human.state(), HumanState::Flail);
        }
        assert!(human.position().x > 2.0);

        human.on_overlap_exit(ColliderTag::Player);
        assert_eq!(human.state(), HumanState::Idle);
    }
}
