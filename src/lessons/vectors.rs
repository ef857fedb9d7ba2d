//! Vector lab and the train challenge

use std::str::FromStr;

use rand::Rng;

use crate::error::LessonError;

/// Points for pushing an element into a vector
pub const PUSH_REWARD: u32 = 5;

/// Points for a solved train challenge
pub const CHALLENGE_REWARD: u32 = 20;

/// Arithmetic mean, `None` for an empty slice
pub fn average(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i128 = values.iter().map(|v| i128::from(*v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Smallest value
pub fn minimum(values: &[i64]) -> Option<i64> {
    values.iter().copied().min()
}

/// Largest value
pub fn maximum(values: &[i64]) -> Option<i64> {
    values.iter().copied().max()
}

/// Index of the first occurrence of `needle`
pub fn search(values: &[i64], needle: i64) -> Option<usize> {
    values.iter().position(|v| *v == needle)
}

/// The two vectors the player can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorName {
    /// Temperatures of the week, one per day
    Temperatures,
    /// A student's grades
    Grades,
}

impl FromStr for VectorName {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "temps" | "temperatures" | "t" => Ok(VectorName::Temperatures),
            "grades" | "g" => Ok(VectorName::Grades),
            other => Err(LessonError::UnknownVector(other.to_string())),
        }
    }
}

/// Day labels for the temperature vector
pub const DAYS: [&str; 7] =
    ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Editable vectors shown in the lesson
#[derive(Debug, Clone)]
pub struct VectorLab {
    pub temperatures: Vec<i64>,
    pub grades: Vec<i64>,
    /// Result of the last search: the needle and where it was found
    pub last_search: Option<(i64, Option<usize>)>,
}

impl Default for VectorLab {
    fn default() -> Self {
        Self {
            temperatures: vec![22, 19, 25, 23, 21, 18, 20],
            grades: vec![15, 12, 18, 14, 16],
            last_search: None,
        }
    }
}

impl VectorLab {
    /// Borrow a vector by name
    pub fn get(&self, name: VectorName) -> &[i64] {
        match name {
            VectorName::Temperatures => &self.temperatures,
            VectorName::Grades => &self.grades,
        }
    }

    /// Append a value
    pub fn push(&mut self, name: VectorName, value: i64) {
        match name {
            VectorName::Temperatures => self.temperatures.push(value),
            VectorName::Grades => self.grades.push(value),
        }
    }

    /// Search a vector and remember the result for display
    pub fn search(&mut self, name: VectorName, needle: i64) -> Option<usize> {
        let index = search(self.get(name), needle);
        self.last_search = Some((needle, index));
        index
    }
}

/// Questions asked about a train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    /// Sum of all wagon weights
    TotalWeight,
    /// Index of the heaviest wagon
    HeaviestWagon,
    /// Average wagon weight, rounded down
    AverageWeight,
}

impl FromStr for Challenge {
    type Err = LessonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "total" | "weight" => Ok(Challenge::TotalWeight),
            "heaviest" | "max" => Ok(Challenge::HeaviestWagon),
            "average" | "avg" => Ok(Challenge::AverageWeight),
            other => Err(LessonError::UnknownChallenge(other.to_string())),
        }
    }
}

/// A train of wagons with random weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Train {
    pub level: u8,
    pub wagons: Vec<u32>,
}

impl Train {
    /// Lightest possible wagon
    pub const MIN_WEIGHT: u32 = 10;
    /// Heaviest possible wagon
    pub const MAX_WEIGHT: u32 = 59;

    /// Number of wagons for a level
    pub fn wagon_count(level: u8) -> Result<usize, LessonError> {
        match level {
            1 => Ok(5),
            2 => Ok(10),
            3 => Ok(20),
            other => Err(LessonError::InvalidTrainLevel(other)),
        }
    }

    /// Build a random train for a level
    pub fn random(level: u8, rng: &mut impl Rng) -> Result<Self, LessonError> {
        let count = Self::wagon_count(level)?;
        let wagons =
            (0..count).map(|_| rng.gen_range(Self::MIN_WEIGHT..=Self::MAX_WEIGHT)).collect();
        Ok(Self { level, wagons })
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u32 {
        self.wagons.iter().sum()
    }

    /// Index of the first heaviest wagon
    pub fn heaviest_wagon(&self) -> Option<usize> {
        let max = self.wagons.iter().copied().max()?;
        self.wagons.iter().position(|w| *w == max)
    }

    /// Average weight rounded down
    pub fn average_weight(&self) -> Option<u32> {
        if self.wagons.is_empty() {
            return None;
        }
        Some(self.total_weight() / self.wagons.len() as u32)
    }

    /// The expected answer to a challenge
    pub fn expected(&self, challenge: Challenge) -> Option<u64> {
        match challenge {
            Challenge::TotalWeight => Some(u64::from(self.total_weight())),
            Challenge::HeaviestWagon => self.heaviest_wagon().map(|i| i as u64),
            Challenge::AverageWeight => self.average_weight().map(u64::from),
        }
    }

    /// Check an answer
    pub fn check(&self, challenge: Challenge, answer: u64) -> bool {
        self.expected(challenge) == Some(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn helpers_on_temperatures() {
        let lab = VectorLab::default();
        let temps = lab.get(VectorName::Temperatures);
        assert_eq!(temps.len(), DAYS.len());
        assert_eq!(minimum(temps), Some(18));
        assert_eq!(maximum(temps), Some(25));
        assert!((average(temps).unwrap() - 148.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn helpers_on_empty_vector() {
        assert_eq!(average(&[]), None);
        assert_eq!(minimum(&[]), None);
        assert_eq!(maximum(&[]), None);
    }

    #[test]
    fn average_of_extreme_values_does_not_overflow() {
        let values = [i64::MAX, i64::MAX, 1];
        let expected = (2.0 * i64::MAX as f64 + 1.0) / 3.0;
        assert!((average(&values).unwrap() - expected).abs() / expected < 1e-12);
        assert_eq!(average(&[i64::MIN, i64::MAX]), Some(-0.5));
    }

    #[test]
    fn search_returns_first_index() {
        let mut lab = VectorLab::default();
        assert_eq!(lab.search(VectorName::Grades, 18), Some(2));
        assert_eq!(lab.last_search, Some((18, Some(2))));
        assert_eq!(lab.search(VectorName::Grades, 3), None);
    }

    #[test]
    fn push_appends() {
        let mut lab = VectorLab::default();
        lab.push(VectorName::Grades, 20);
        assert_eq!(lab.get(VectorName::Grades).last(), Some(&20));
    }

    #[test]
    fn parse_vector_names() {
        assert_eq!("temps".parse::<VectorName>(), Ok(VectorName::Temperatures));
        assert_eq!("Grades".parse::<VectorName>(), Ok(VectorName::Grades));
        assert!("other".parse::<VectorName>().is_err());
    }

    #[test]
    fn random_train_respects_level_and_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        for (level, count) in [(1, 5), (2, 10), (3, 20)] {
            let train = Train::random(level, &mut rng).unwrap();
            assert_eq!(train.wagons.len(), count);
            assert!(
                train.wagons.iter().all(|w| (Train::MIN_WEIGHT..=Train::MAX_WEIGHT).contains(w))
            );
        }
        assert_eq!(Train::random(4, &mut rng), Err(LessonError::InvalidTrainLevel(4)));
    }

    #[test]
    fn challenge_answers() {
        let train = Train { level: 1, wagons: vec![12, 40, 33, 40, 10] };
        assert!(train.check(Challenge::TotalWeight, 135));
        assert!(train.check(Challenge::HeaviestWagon, 1));
        assert!(train.check(Challenge::AverageWeight, 27));
        assert!(!train.check(Challenge::HeaviestWagon, 3));
    }

    #[test]
    fn parse_challenges() {
        assert_eq!("avg".parse::<Challenge>(), Ok(Challenge::AverageWeight));
        assert!("sort".parse::<Challenge>().is_err());
    }
}
