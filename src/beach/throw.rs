//! Throw controller: charge, release, flight.
//!
//! Each function takes the current phase and returns the next one, so the
//! round logic never juggles loose charging/throwing flags.

use super::types::{Projectile, RoundPhase, DISTANCE_PER_POWER, MAX_POWER, PROJECTILE_SPEED};

/// Where a finished throw came down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub x: i32,
    pub y: i32,
    pub power: u32,
}

/// Result of advancing a projectile by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flight {
    Airborne(Projectile),
    Landed(Landing),
}

impl Projectile {
    /// Launch from the character's position with the given power.
    pub fn launch(origin_x: i32, origin_y: i32, power: u32) -> Self {
        Self {
            position_x: origin_x as f32,
            position_y: origin_y,
            origin_x,
            target_x: origin_x + throw_distance(power),
            power,
        }
    }

    /// Share of the trip already covered (0..=1).
    pub fn progress(&self) -> f32 {
        let distance = (self.target_x - self.origin_x) as f32;
        if distance <= 0.0 {
            return 1.0;
        }
        ((self.position_x - self.origin_x as f32) / distance).clamp(0.0, 1.0)
    }

    /// Height above the landing row, for drawing only. A parabola peaking
    /// halfway at an eighth of the throw distance.
    pub fn arc_height(&self) -> i32 {
        let peak = (self.target_x - self.origin_x) as f32 / 8.0;
        let t = self.progress();
        (4.0 * t * (1.0 - t) * peak).round() as i32
    }
}

/// Horizontal distance for a given power. Not bounded by the playfield.
pub fn throw_distance(power: u32) -> i32 {
    DISTANCE_PER_POWER * power.min(MAX_POWER) as i32
}

/// Space pressed: start winding up if nothing else is going on.
pub fn begin_charge(phase: RoundPhase) -> RoundPhase {
    match phase {
        RoundPhase::Cooldown | RoundPhase::Charging { .. } => RoundPhase::Charging { power: 0 },
        other => other,
    }
}

/// One tick of holding Space.
pub fn advance_charge(power: u32) -> u32 {
    (power + 1).min(MAX_POWER)
}

/// Space released: let go of the corn from the character's position.
pub fn release(phase: RoundPhase, origin_x: i32, origin_y: i32) -> RoundPhase {
    match phase {
        RoundPhase::Charging { power } => {
            RoundPhase::Flying(Projectile::launch(origin_x, origin_y, power))
        }
        other => other,
    }
}

/// Move the corn one tick to the right.
pub fn advance_flight(projectile: Projectile) -> Flight {
    let mut projectile = projectile;
    projectile.position_x += PROJECTILE_SPEED;
    if projectile.position_x >= projectile.target_x as f32 {
        Flight::Landed(Landing {
            x: projectile.target_x,
            y: projectile.position_y,
            power: projectile.power,
        })
    } else {
        Flight::Airborne(projectile)
    }
}
