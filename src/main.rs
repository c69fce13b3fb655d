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


mod settings;

use std::env;
use std::path::Path;
use tracing::{info, error};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use vehicle::Scenario;
use crate::settings::GlobalSettings;


fn log_file_appender(log_dir: &Path) -> Option<RollingFileAppender> {
    match RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(GlobalSettings::LOG_FILENAME)
        .build(log_dir) {
        Ok(appender) => Some(appender),
        Err(e) => {
            eprintln!("Failed to init logging. Can't write to {}. {}", log_dir.display(), e.to_string());
            None
        }
    }
}

fn init_logging(log_dir: &Path) {
    let Some(file_appender) = log_file_appender(log_dir) else {
        return;
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_ansi(false)
        .compact()
        .finish();
    match tracing::subscriber::set_global_default(subscriber) {
        Ok(_) => {
            info!("Logging initialised");
        }
        Err(e) => {
            eprintln!("Failed to init logging. {}", e.to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = match GlobalSettings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings, using defaults. {}", e.to_string());
            GlobalSettings::default()
        }
    };
    init_logging(&settings.log_dir());

    let scenario = match env::args_os().nth(1).map(std::path::PathBuf::from).or_else(|| settings.scenario_path()) {
        Some(path) => Scenario::load(&path).map_err(|e| {
            error!("Failed to load scenario {}. {}", path.display(), e.to_string());
            e
        })?,
        None => {
            info!("No scenario configured, running the demo");
            Scenario::demo()
        }
    };

    for line in scenario.run()? {
        println!("{}", line);
    }
    Ok(())
}
