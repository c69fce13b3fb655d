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

use std::fmt::Debug;

pub const DEFAULT_TOP_SPEED: i32 = 135;
pub const DEFAULT_ACCELERATION: i32 = 5;

/// Shared capability of everything that moves under a top speed bound.
pub trait SpeedControl: Debug {
    fn model(&self) -> &str;
    fn top_speed(&self) -> i32;
    fn current_speed(&self) -> i32;
    fn accelerate_by(&mut self, delta: i32);
    fn status(&self) -> String;

    fn accelerate(&mut self) {
        self.accelerate_by(DEFAULT_ACCELERATION)
    }
}

/// What a single acceleration call is doing. Never stored on the vehicle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Motion {
    Accelerating,
    Decelerating
}

impl Motion {
    pub fn from_delta(delta: i32) -> Motion {
        if delta > 0 {
            Motion::Accelerating
        } else {
            Motion::Decelerating
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Accelerating => "accelerating",
            Motion::Decelerating => "decelerating"
        }
    }
}

pub fn apply_all<T: SpeedControl + ?Sized>(vehicle: &mut T, deltas: &[i32]) {
    for delta in deltas {
        vehicle.accelerate_by(*delta);
    }
}
