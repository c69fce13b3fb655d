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

pub mod error;
pub mod traits;
pub mod vehicle;
pub mod plane;
pub mod student;
pub mod scenario;

pub use error::{Error, ErrorKind, Result};
pub use traits::{Motion, SpeedControl, DEFAULT_ACCELERATION, DEFAULT_TOP_SPEED};
pub use vehicle::Vehicle;
pub use plane::Plane;
pub use student::Student;
pub use scenario::{Scenario, VehicleEntry, VehicleKind};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::{Plane, SpeedControl, Vehicle};

    #[test]
    fn vehicles_share_one_interface() {
        let mut fleet: Vec<Box<dyn SpeedControl>> = vec![
            Box::new(Vehicle::with_default_top_speed("Van").unwrap()),
            Box::new(Plane::with_default_top_speed("Airbus").unwrap()),
        ];
        for vehicle in fleet.iter_mut() {
            vehicle.accelerate();
        }
        assert!(fleet.iter().all(|v| v.current_speed() == 5));
        assert!(fleet[1].status().ends_with("and the elevation is 1"));
    }

    #[test]
    fn shared_vehicle_sees_every_update() {
        let shared = Rc::new(RefCell::new(Vehicle::new("Bus", 90).unwrap()));
        let other_handle = Rc::clone(&shared);
        other_handle.borrow_mut().accelerate_by(10);
        assert_eq!(shared.borrow().current_speed(), 10);
    }
}
