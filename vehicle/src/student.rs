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

use tracing::warn;
use crate::error::{Error, ErrorKind, Result};

pub const TEEN_AGE_LIMIT: i32 = 18;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    first_name: String,
    last_name: String,
    age: i32
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, age: i32) -> Result<Student> {
        if age < 1 {
            warn!("Rejecting student {} {} with age {}", first_name, last_name, age);
            return Err(Error::new(ErrorKind::InvalidArgument,
                                  format!("age must be at least 1, got {}", age)));
        }
        Ok(Student {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age
        })
    }

    /// Builds a student from a "First Last" name. Anything after the second
    /// word is ignored.
    pub fn from_full_name(full_name: &str, age: i32) -> Result<Student> {
        let mut parts = full_name.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(first), Some(last)) => Student::new(first, last, age),
            _ => Err(Error::new(ErrorKind::InvalidArgument,
                                format!("'{}' is not a first and last name", full_name)))
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn is_teen(&self) -> bool {
        self.age <= TEEN_AGE_LIMIT
    }

    // No separator between the two names
    pub fn full_name(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::student::Student;

    #[test]
    fn zero_age_is_rejected() {
        let err = Student::new("John", "Doe", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(Student::new("John", "Doe", -4).is_err());
        assert!(Student::new("John", "Doe", 1).is_ok());
    }

    #[test]
    fn teen_boundary() {
        assert!(Student::new("A", "B", 1).unwrap().is_teen());
        assert!(Student::new("A", "B", 18).unwrap().is_teen());
        assert!(!Student::new("A", "B", 19).unwrap().is_teen());
    }

    #[test]
    fn from_full_name() -> Result<(), String> {
        let student = Student::from_full_name("John Doe", 21).map_err(|e| e.to_string())?;
        assert_eq!(student.first_name(), "John");
        assert_eq!(student.last_name(), "Doe");
        assert_eq!(student.age(), 21);
        assert_eq!(student.full_name(), "JohnDoe");
        Ok(())
    }

    #[test]
    fn from_full_name_needs_two_words() {
        assert_eq!(Student::from_full_name("Madonna", 30).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(Student::from_full_name("", 30).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert!(Student::from_full_name("Jane Mary Doe", 30).is_ok());
    }

    #[test]
    fn from_full_name_still_checks_age() {
        assert!(Student::from_full_name("John Doe", 0).is_err());
    }
}
