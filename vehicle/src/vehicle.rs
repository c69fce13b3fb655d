/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of vehicle-lab.
 *
 * vehicle-lab is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * vehicle-lab is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with vehicle-lab. If not, see <https://www.gnu.org/licenses/>.
 */

use tracing::{trace, warn};
use crate::error::{Error, ErrorKind, Result};
use crate::traits::{Motion, SpeedControl, DEFAULT_TOP_SPEED};

/// A road vehicle with a fixed top speed.
///
/// `Vehicle` is a plain value: cloning it gives an independent copy. Owners
/// that need one vehicle visible from several places can wrap it in
/// `Rc<RefCell<Vehicle>>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    model: String,
    top_speed: i32,
    current_speed: i32
}

impl Vehicle {
    pub fn new(model: &str, top_speed: i32) -> Result<Vehicle> {
        if model.trim().is_empty() {
            warn!("Rejecting vehicle with empty model name");
            return Err(Error::new(ErrorKind::InvalidArgument,
                                  String::from("vehicle model must not be empty")));
        }
        if top_speed <= 0 {
            warn!("Rejecting {} with top speed {}", model, top_speed);
            return Err(Error::new(ErrorKind::InvalidConfiguration,
                                  format!("top speed of {} must be positive, got {}", model, top_speed)));
        }
        Ok(Vehicle { model: model.to_string(), top_speed, current_speed: 0 })
    }

    pub fn with_default_top_speed(model: &str) -> Result<Vehicle> {
        Vehicle::new(model, DEFAULT_TOP_SPEED)
    }
}

impl SpeedControl for Vehicle {
    fn model(&self) -> &str {
        &self.model
    }

    fn top_speed(&self) -> i32 {
        self.top_speed
    }

    fn current_speed(&self) -> i32 {
        self.current_speed
    }

    // The limit check adds the delta a second time, so the clamp kicks in one
    // step before the top speed would actually be passed. There is no floor.
    fn accelerate_by(&mut self, delta: i32) {
        let candidate = self.current_speed.saturating_add(delta);
        self.current_speed = if candidate.saturating_add(delta) >= self.top_speed {
            self.top_speed
        } else {
            candidate
        };
        trace!("{} {} by {}, now at {}", self.model, Motion::from_delta(delta).as_str(), delta, self.current_speed);
    }

    fn status(&self) -> String {
        format!("current speed of {} is {}", self.model, self.current_speed)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::traits::{SpeedControl, DEFAULT_TOP_SPEED};
    use crate::vehicle::Vehicle;

    #[test]
    fn new_vehicle_is_stationary() -> Result<(), String> {
        let vehicle = Vehicle::new("Ferrari F50", 350).map_err(|e| e.to_string())?;
        assert_eq!(vehicle.current_speed(), 0);
        assert_eq!(vehicle.status(), "current speed of Ferrari F50 is 0");
        Ok(())
    }

    #[test]
    fn default_top_speed() {
        let vehicle = Vehicle::with_default_top_speed("Mini").unwrap();
        assert_eq!(vehicle.top_speed(), DEFAULT_TOP_SPEED);
        assert_eq!(vehicle.top_speed(), 135);
    }

    #[test]
    fn non_positive_top_speed_is_rejected() {
        for top_speed in [0, -1, i32::MIN] {
            let err = Vehicle::new("Broken", top_speed).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
        }
    }

    #[test]
    fn empty_model_is_rejected() {
        assert_eq!(Vehicle::new("", 100).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(Vehicle::new("   ", 100).unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn single_default_acceleration() {
        let mut ferrari = Vehicle::new("Ferrari F50", 350).unwrap();
        ferrari.accelerate();
        assert_eq!(ferrari.current_speed(), 5);
        ferrari.accelerate_by(20);
        assert_eq!(ferrari.current_speed(), 25);
    }

    #[test]
    fn clamp_triggers_one_step_early() {
        let mut vehicle = Vehicle::new("X", 10).unwrap();
        vehicle.accelerate_by(5);
        assert_eq!(vehicle.current_speed(), 10);
        for _ in 0..3 {
            vehicle.accelerate_by(5);
            assert_eq!(vehicle.current_speed(), 10);
        }

        let mut vehicle = Vehicle::new("Y", 20).unwrap();
        vehicle.accelerate_by(5);
        assert_eq!(vehicle.current_speed(), 5);
        vehicle.accelerate_by(5);
        assert_eq!(vehicle.current_speed(), 10);
        // 15 + 5 reaches the limit so the vehicle jumps straight to 20
        vehicle.accelerate_by(5);
        assert_eq!(vehicle.current_speed(), 20);
    }

    #[test]
    fn never_exceeds_top_speed_when_accelerating() {
        for top_speed in [1, 7, 10, 135, 350] {
            for delta in [0, 1, 3, 5, 50, 1000, i32::MAX] {
                let mut vehicle = Vehicle::new("Prop", top_speed).unwrap();
                for _ in 0..100 {
                    vehicle.accelerate_by(delta);
                    assert!(vehicle.current_speed() <= top_speed,
                            "top speed {} delta {} reached {}", top_speed, delta, vehicle.current_speed());
                }
            }
        }
    }

    #[test]
    fn deceleration_has_no_floor() {
        let mut vehicle = Vehicle::new("Reverse", 100).unwrap();
        vehicle.accelerate_by(-5);
        assert_eq!(vehicle.current_speed(), -5);
        vehicle.accelerate_by(i32::MIN);
        assert_eq!(vehicle.current_speed(), i32::MIN);
    }

    #[test]
    fn clones_are_independent() {
        let mut original = Vehicle::new("Civic", 200).unwrap();
        let copy = original.clone();
        original.accelerate();
        assert_eq!(original.current_speed(), 5);
        assert_eq!(copy.current_speed(), 0);
    }
}
