//! Structure builder: records made of typed fields

use std::str::FromStr;

use super::detective::ValueType;
use crate::error::LessonError;

/// Points for each saved structure
pub const SAVE_REWARD: u32 = 25;

/// Saves needed to complete the structures section
pub const SAVES_TO_COMPLETE: u32 = 3;

/// The structures the player can fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Person,
    House,
    Car,
}

impl StructureKind {
    pub const ALL: [StructureKind; 3] =
        [StructureKind::Person, StructureKind::House, StructureKind::Car];

    /// Type name as declared in pseudo-code
    pub fn type_name(&self) -> &'static str {
        match self {
            StructureKind::Person => "Person",
            StructureKind::House => "House",
            StructureKind::Car => "Car",
        }
    }

    /// Field names and their types
    pub fn fields(&self) -> &'static [(&'static str, ValueType)] {
        match self {
            StructureKind::Person => &[
                ("last_name", ValueType::Text),
                ("first_name", ValueType::Text),
                ("age", ValueType::Integer),
                ("height", ValueType::Real),
                ("is_student", ValueType::Boolean),
            ],
            StructureKind::House => &[
                ("address", ValueType::Text),
                ("price", ValueType::Real),
                ("rooms", ValueType::Integer),
                ("has_garage", ValueType::Boolean),
            ],
            StructureKind::Car => &[
                ("brand", ValueType::Text),
                ("model", ValueType::Text),
                ("year", ValueType::Integer),
                ("mileage", ValueType::Integer),
                ("price", ValueType::Real),
                ("is_used", ValueType::Boolean),
            ],
        }
    }

    /// Pseudo-code declaration of the structure
    pub fn declaration(&self) -> String {
        let mut text = format!("structure {}\n", self.type_name());
        for (name, value_type) in self.fields() {
            text.push_str(&format!("    {}: {}\n", name, value_type.label()));
        }
        text.push_str("end structure");
        text
    }
}

impl FromStr for StructureKind {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "person" | "p" => Ok(StructureKind::Person),
            "house" | "h" => Ok(StructureKind::House),
            "car" | "c" => Ok(StructureKind::Car),
            other => Err(LessonError::UnknownStructure(other.to_string())),
        }
    }
}

/// What a save unlocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveResult {
    pub saves: u32,
    /// This was the first saved structure
    pub first: bool,
    /// This save reached the section's completion threshold
    pub completes_section: bool,
}

/// Counts saved structures
#[derive(Debug, Clone, Default)]
pub struct StructureBuilder {
    saves: u32,
}

impl StructureBuilder {
    /// Record one saved structure
    pub fn save(&mut self, kind: StructureKind) -> SaveResult {
        self.saves += 1;
        tracing::debug!(kind = kind.type_name(), saves = self.saves, "structure saved");
        SaveResult {
            saves: self.saves,
            first: self.saves == 1,
            completes_section: self.saves >= SAVES_TO_COMPLETE,
        }
    }

    /// Number of structures saved so far
    pub fn saves(&self) -> u32 {
        self.saves
    }
}
