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

use std::cmp::Ordering;
use tracing::debug;
use crate::error::Result;
use crate::traits::{SpeedControl, DEFAULT_TOP_SPEED};
use crate::vehicle::Vehicle;

/// A vehicle that climbs while accelerating and descends while slowing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plane {
    vehicle: Vehicle,
    elevation: i32
}

impl Plane {
    pub fn new(model: &str, top_speed: i32) -> Result<Plane> {
        Ok(Plane { vehicle: Vehicle::new(model, top_speed)?, elevation: 0 })
    }

    pub fn with_default_top_speed(model: &str) -> Result<Plane> {
        Plane::new(model, DEFAULT_TOP_SPEED)
    }

    pub fn elevation(&self) -> i32 {
        self.elevation
    }
}

impl SpeedControl for Plane {
    fn model(&self) -> &str {
        self.vehicle.model()
    }

    fn top_speed(&self) -> i32 {
        self.vehicle.top_speed()
    }

    fn current_speed(&self) -> i32 {
        self.vehicle.current_speed()
    }

    fn accelerate_by(&mut self, delta: i32) {
        self.vehicle.accelerate_by(delta);
        match delta.cmp(&0) {
            Ordering::Greater => self.elevation = self.elevation.saturating_add(1),
            Ordering::Less => self.elevation = self.elevation.saturating_sub(1),
            Ordering::Equal => {}
        }
        debug!("{} elevation now {}", self.vehicle.model(), self.elevation);
    }

    fn status(&self) -> String {
        format!("{} and the elevation is {}", self.vehicle.status(), self.elevation)
    }
}
