//! Practice exercises, unlocked by difficulty tier

use std::collections::HashSet;

use crate::error::LessonError;
use crate::game::badge;

/// A practice problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub title: &'static str,
    /// 1 (easy) to 3 (hard)
    pub difficulty: u8,
    pub description: &'static str,
    pub objective: &'static str,
    pub hints: &'static [&'static str],
    /// Points granted the first time the exercise is completed
    pub points: u32,
    /// Catalog badge for the concept the exercise practises
    pub badge: &'static str,
}

impl Exercise {
    /// Difficulty as filled and empty stars
    pub fn stars(&self) -> String {
        let filled = usize::from(self.difficulty.min(3));
        format!("{}{}", "★".repeat(filled), "☆".repeat(3 - filled))
    }
}

pub const EXERCISES: [Exercise; 6] = [
    Exercise {
        id: "ex1-1",
        title: "My First Structure",
        difficulty: 1,
        description: "You run a bookshop. Create a Book structure with a title (string), \
                      an author (string), a price (real), a page count (integer) and an \
                      availability flag (boolean).",
        objective: "Declare \"The Little Prince\" by Antoine de Saint-Exupéry, 12.50, \
                    96 pages, available.",
        hints: &[
            "Use the structure keyword to define your type",
            "Give every field a type",
            "Create an instance in a variable",
        ],
        points: 25,
        badge: badge::ARCHITECT,
    },
    Exercise {
        id: "ex1-2",
        title: "My First Vectors",
        difficulty: 1,
        description: "Create a vector holding this week's temperatures: \
                      22, 19, 25, 23, 21, 18, 20.",
        objective: "Print every temperature next to its day.",
        hints: &[
            "Declare a vector of 7 elements",
            "Use a loop to print the results",
            "Keep the day names in a vector of strings",
        ],
        points: 25,
        badge: badge::TRAIN_MASTER,
    },
    Exercise {
        id: "ex1-3",
        title: "My First Function",
        difficulty: 1,
        description: "Write a function that computes a person's age from their birth year.",
        objective: "The current year is 2024. Test it with 2003.",
        hints: &[
            "The function takes one parameter: birth_year (integer)",
            "It returns an integer",
            "Formula: 2024 - birth_year",
        ],
        points: 25,
        badge: badge::FUNCTION_ENGINEER,
    },
    Exercise {
        id: "ex2-1",
        title: "Grade Book",
        difficulty: 2,
        description: "Build a grade manager out of several functions.",
        objective: "Compute the average, check whether the student passes (>= 10) and \
                    count grades above 15. Test with 12, 8, 16, 14, 9, 18, 13.",
        hints: &[
            "Write one function per operation",
            "Loop over the vector",
            "average = sum / number of elements",
        ],
        points: 50,
        badge: badge::FUNCTION_ENGINEER,
    },
    Exercise {
        id: "ex2-2",
        title: "Address Book",
        difficulty: 2,
        description: "Create a Contact structure with a name, phone, email and city.",
        objective: "Fill a vector with 5 contacts and write a function that finds a \
                    contact by name.",
        hints: &[
            "Define the Contact structure first",
            "Create a vector of structures",
            "The search returns the index, or -1 when absent",
        ],
        points: 50,
        badge: badge::ARCHITECT,
    },
    Exercise {
        id: "ex3-1",
        title: "School Management System",
        difficulty: 3,
        description: "Develop a complete school management system.",
        objective: "Create the Student and Class structures, then implement every \
                    management function.",
        hints: &[
            "Student: last name, first name, age, vector of grades",
            "Class: name, level, vector of students",
            "Functions: averages, rankings, statistics",
        ],
        points: 100,
        badge: badge::ARCHITECT,
    },
];

/// Find an exercise by id
pub fn find(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id.eq_ignore_ascii_case(id.trim()))
}

/// Tracks completed exercises
#[derive(Debug, Clone, Default)]
pub struct ExerciseTracker {
    completed: HashSet<&'static str>,
}

impl ExerciseTracker {
    /// Whether an exercise can be attempted.
    ///
    /// Tier 1 is always open; tier n opens once any tier n-1 exercise is done.
    pub fn is_unlocked(&self, exercise: &Exercise) -> bool {
        match exercise.difficulty {
            0 => false,
            1 => true,
            tier => {
                self.completed.iter().filter_map(|id| find(id)).any(|e| e.difficulty == tier - 1)
            }
        }
    }

    /// Whether an exercise is done
    pub fn is_completed(&self, id: &str) -> bool {
        find(id).is_some_and(|e| self.completed.contains(e.id))
    }

    /// Complete an exercise.
    ///
    /// Returns the exercise when this call completed it, `None` when it was
    /// already done.
    pub fn complete(&mut self, id: &str) -> Result<Option<&'static Exercise>, LessonError> {
        let exercise = find(id).ok_or_else(|| LessonError::UnknownExercise(id.to_string()))?;

        if !self.is_unlocked(exercise) {
            return Err(LessonError::LockedExercise(exercise.id.to_string()));
        }
        if !self.completed.insert(exercise.id) {
            return Ok(None);
        }
        Ok(Some(exercise))
    }

    /// Number of completed exercises
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_exercise_maps_to_a_catalog_badge() {
        let catalog = badge::catalog();
        for exercise in EXERCISES {
            assert!(catalog.iter().any(|b| b.id == exercise.badge), "{}", exercise.id);
        }
    }

    #[test]
    fn stars_show_difficulty() {
        assert_eq!(EXERCISES[0].stars(), "★☆☆");
        assert_eq!(EXERCISES[5].stars(), "★★★");
    }

    #[test]
    fn tiers_unlock_in_order() {
        let mut tracker = ExerciseTracker::default();
        let hard = find("ex3-1").unwrap();
        let medium = find("ex2-1").unwrap();

        assert!(!tracker.is_unlocked(medium));
        assert_eq!(tracker.complete("ex2-1"), Err(LessonError::LockedExercise("ex2-1".into())));

        tracker.complete("ex1-3").unwrap();
        assert!(tracker.is_unlocked(medium));
        assert!(!tracker.is_unlocked(hard));

        tracker.complete("ex2-2").unwrap();
        assert!(tracker.is_unlocked(hard));
    }

    #[test]
    fn completing_twice_returns_none() {
        let mut tracker = ExerciseTracker::default();
        assert_eq!(tracker.complete("ex1-1").unwrap().map(|e| e.points), Some(25));
        assert_eq!(tracker.complete("EX1-1"), Ok(None));
        assert_eq!(tracker.completed_count(), 1);
        assert!(tracker.is_completed("ex1-1"));
    }

    #[test]
    fn unknown_exercise_is_an_error() {
        let mut tracker = ExerciseTracker::default();
        assert_eq!(tracker.complete("ex9-9"), Err(LessonError::UnknownExercise("ex9-9".into())));
    }
}
