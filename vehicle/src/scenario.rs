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

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use crate::error::Result;
use crate::plane::Plane;
use crate::traits::{apply_all, SpeedControl, DEFAULT_ACCELERATION, DEFAULT_TOP_SPEED};
use crate::vehicle::Vehicle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    #[default]
    Car,
    Plane
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleEntry {
    pub model: String,
    #[serde(default = "default_top_speed")]
    pub top_speed: i32,
    #[serde(default)]
    pub kind: VehicleKind,
    #[serde(default)]
    pub accelerations: Vec<i32>
}

fn default_top_speed() -> i32 {
    DEFAULT_TOP_SPEED
}

impl VehicleEntry {
    pub fn build(&self) -> Result<Box<dyn SpeedControl>> {
        Ok(match self.kind {
            VehicleKind::Car => Box::new(Vehicle::new(&self.model, self.top_speed)?),
            VehicleKind::Plane => Box::new(Plane::new(&self.model, self.top_speed)?)
        })
    }
}

/// A list of vehicles and the speed changes to put each of them through.
///
/// ```toml
/// [[vehicles]]
/// model = "Airbus"
/// kind = "plane"
/// accelerations = [5, -3]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub vehicles: Vec<VehicleEntry>
}

impl Scenario {
    pub fn from_toml_str(data: &str) -> Result<Scenario> {
        Ok(toml::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Scenario> {
        info!("Loading scenario from {}", path.display());
        let data = fs::read_to_string(path)?;
        Scenario::from_toml_str(&data)
    }

    /// The Ferrari and Airbus walkthrough.
    pub fn demo() -> Scenario {
        Scenario {
            vehicles: vec![
                VehicleEntry {
                    model: String::from("Ferrari F50"),
                    top_speed: 350,
                    kind: VehicleKind::Car,
                    accelerations: vec![DEFAULT_ACCELERATION]
                },
                VehicleEntry {
                    model: String::from("Airbus"),
                    top_speed: DEFAULT_TOP_SPEED,
                    kind: VehicleKind::Plane,
                    accelerations: vec![DEFAULT_ACCELERATION]
                }
            ]
        }
    }

    pub fn build(&self) -> Result<Vec<Box<dyn SpeedControl>>> {
        self.vehicles.iter().map(|entry| entry.build()).collect()
    }

    pub fn run(&self) -> Result<Vec<String>> {
        let mut vehicles = self.build()?;
        let mut report = Vec::with_capacity(vehicles.len());
        for (vehicle, entry) in vehicles.iter_mut().zip(&self.vehicles) {
            apply_all(vehicle.as_mut(), &entry.accelerations);
            debug!("{} finished at {}/{}", vehicle.model(), vehicle.current_speed(), vehicle.top_speed());
            report.push(vehicle.status());
        }
        Ok(report)
    }
}
