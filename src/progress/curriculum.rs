//! The canonical course outline

use crate::game::badge;

/// One unit of the course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Stable identifier used by the progress store
    pub id: &'static str,
    /// Navigation label
    pub title: &'static str,
    /// One-line summary shown under the title
    pub summary: &'static str,
    /// Badge earned when the section is finished from the navigation
    pub completion_badge: Option<&'static str>,
}

pub const INTRODUCTION: &str = "introduction";
pub const TYPES: &str = "types";
pub const STRUCTURES: &str = "structures";
pub const VECTORS: &str = "vectors";
pub const FUNCTIONS: &str = "functions";
pub const EXERCISES: &str = "exercises";

/// All sections in navigation order
pub const SECTIONS: [Section; 6] = [
    Section {
        id: INTRODUCTION,
        title: "Introduction",
        summary: "Why data needs types and structure",
        completion_badge: Some(badge::FIRST_STEPS),
    },
    Section {
        id: TYPES,
        title: "Simple Types",
        summary: "Integers, reals, strings and booleans",
        completion_badge: Some(badge::ORGANIZER),
    },
    Section {
        id: STRUCTURES,
        title: "Structures",
        summary: "Grouping named fields into records",
        completion_badge: None,
    },
    Section {
        id: VECTORS,
        title: "Vectors",
        summary: "Indexed sequences of values",
        completion_badge: Some(badge::TRAIN_MASTER),
    },
    Section {
        id: FUNCTIONS,
        title: "Functions",
        summary: "Inputs in, one result out",
        completion_badge: Some(badge::FUNCTION_ENGINEER),
    },
    Section {
        id: EXERCISES,
        title: "Exercises",
        summary: "Progressive practice problems",
        completion_badge: None,
    },
];

/// Find a section by id
pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Resolve a section from an id, a title or a 1-based position
pub fn resolve(query: &str) -> Option<usize> {
    let query = query.trim().to_lowercase();

    if let Ok(number) = query.parse::<usize>() {
        return (1..=SECTIONS.len()).contains(&number).then(|| number - 1);
    }

    SECTIONS
        .iter()
        .position(|s| s.id == query || s.title.to_lowercase() == query)
        .or_else(|| SECTIONS.iter().position(|s| s.id.starts_with(query.as_str())))
}
