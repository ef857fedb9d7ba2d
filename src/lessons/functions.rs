//! Function machine: call small functions and watch their results

use crate::error::LessonError;

/// Points for each successful call
pub const RUN_REWARD: u32 = 15;

/// Calls needed for the function engineer badge
pub const RUNS_FOR_BADGE: u32 = 5;

/// Reference year for `age`
pub const CURRENT_YEAR: i64 = 2024;

/// A function call with parsed arguments
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionCall {
    Add(f64, f64),
    Area { length: f64, width: f64 },
    Greet { name: String, title: String },
    Age { birth_year: i64 },
    Bmi { weight: f64, height: f64 },
}

impl FunctionCall {
    /// Parse `<name> <args..>` as typed on the command line
    pub fn parse(name: &str, args: &[&str]) -> Result<Self, LessonError> {
        match name.to_lowercase().as_str() {
            "add" => Ok(FunctionCall::Add(number(args, 0, "a")?, number(args, 1, "b")?)),
            "area" => Ok(FunctionCall::Area {
                length: number(args, 0, "length")?,
                width: number(args, 1, "width")?,
            }),
            "greet" => {
                let name = args.first().ok_or(LessonError::MissingArgument("name"))?;
                let title = args.get(1..).map(|rest| rest.join(" ")).unwrap_or_default();
                Ok(FunctionCall::Greet { name: (*name).to_string(), title })
            }
            "age" => {
                let raw = args.first().ok_or(LessonError::MissingArgument("birth_year"))?;
                let birth_year =
                    raw.parse().map_err(|_| LessonError::InvalidNumber((*raw).to_string()))?;
                Ok(FunctionCall::Age { birth_year })
            }
            "bmi" => Ok(FunctionCall::Bmi {
                weight: number(args, 0, "weight")?,
                height: number(args, 1, "height")?,
            }),
            other => Err(LessonError::UnknownFunction(other.to_string())),
        }
    }

    /// Function name as shown in the call log
    pub fn name(&self) -> &'static str {
        match self {
            FunctionCall::Add(..) => "add",
            FunctionCall::Area { .. } => "area",
            FunctionCall::Greet { .. } => "greet",
            FunctionCall::Age { .. } => "age",
            FunctionCall::Bmi { .. } => "bmi",
        }
    }

    /// Arguments formatted for the call log
    pub fn arguments(&self) -> String {
        match self {
            FunctionCall::Add(a, b) => format!("{}, {}", a, b),
            FunctionCall::Area { length, width } => format!("{}, {}", length, width),
            FunctionCall::Greet { name, title } => format!("\"{}\", \"{}\"", name, title),
            FunctionCall::Age { birth_year } => birth_year.to_string(),
            FunctionCall::Bmi { weight, height } => format!("{}, {}", weight, height),
        }
    }

    /// Evaluate the call
    pub fn evaluate(&self) -> Result<String, LessonError> {
        match self {
            FunctionCall::Add(a, b) => Ok((a + b).to_string()),
            FunctionCall::Area { length, width } => Ok((length * width).to_string()),
            FunctionCall::Greet { name, title } => {
                if title.is_empty() {
                    Ok(format!("Hello {}!", name))
                } else {
                    Ok(format!("Hello {} {}!", title, name))
                }
            }
            FunctionCall::Age { birth_year } => CURRENT_YEAR
                .checked_sub(*birth_year)
                .map(|age| age.to_string())
                .ok_or_else(|| LessonError::InvalidNumber(birth_year.to_string())),
            FunctionCall::Bmi { weight, height } => {
                if *height <= 0.0 {
                    return Err(LessonError::ZeroHeight);
                }
                Ok(format!("{:.2}", weight / (height * height)))
            }
        }
    }
}

fn number(args: &[&str], index: usize, name: &'static str) -> Result<f64, LessonError> {
    let raw = args.get(index).ok_or(LessonError::MissingArgument(name))?;
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LessonError::InvalidNumber((*raw).to_string()))
}

/// One entry in the call log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub name: &'static str,
    pub input: String,
    pub output: String,
}

/// What a successful run unlocked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub runs: u32,
    /// This run reached the badge threshold
    pub earns_badge: bool,
}

/// The machine keeps a log of every successful call
#[derive(Debug, Clone, Default)]
pub struct FunctionMachine {
    pub log: Vec<CallRecord>,
    runs: u32,
}

impl FunctionMachine {
    /// Evaluate a call and log it. Failed calls leave no trace.
    pub fn run(&mut self, call: &FunctionCall) -> Result<(String, RunResult), LessonError> {
        let output = call.evaluate()?;
        self.runs += 1;
        self.log.push(CallRecord {
            name: call.name(),
            input: call.arguments(),
            output: output.clone(),
        });
        tracing::debug!(function = call.name(), %output, "function evaluated");
        Ok((output, RunResult { runs: self.runs, earns_badge: self.runs >= RUNS_FOR_BADGE }))
    }

    /// Number of successful runs
    pub fn runs(&self) -> u32 {
        self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(line: &str) -> Result<FunctionCall, LessonError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap();
        let args: Vec<&str> = parts.collect();
        FunctionCall::parse(name, &args)
    }

    #[test]
    fn evaluates_each_function() {
        assert_eq!(call("add 2 3.5").unwrap().evaluate().unwrap(), "5.5");
        assert_eq!(call("area 4 2.5").unwrap().evaluate().unwrap(), "10");
        assert_eq!(call("greet Ada Dr").unwrap().evaluate().unwrap(), "Hello Dr Ada!");
        assert_eq!(call("greet Ada").unwrap().evaluate().unwrap(), "Hello Ada!");
        assert_eq!(call("age 2003").unwrap().evaluate().unwrap(), "21");
        assert_eq!(call("bmi 70 1.75").unwrap().evaluate().unwrap(), "22.86");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(call("add 2"), Err(LessonError::MissingArgument("b")));
        assert_eq!(call("add two 3"), Err(LessonError::InvalidNumber("two".into())));
        assert_eq!(call("age 20.5"), Err(LessonError::InvalidNumber("20.5".into())));
        assert_eq!(call("sqrt 4"), Err(LessonError::UnknownFunction("sqrt".into())));
        assert_eq!(call("bmi 70 0").unwrap().evaluate(), Err(LessonError::ZeroHeight));
    }

    #[test]
    fn age_rejects_years_that_overflow() {
        let far_past = call("age -9223372036854775807").unwrap();
        assert_eq!(
            far_past.evaluate(),
            Err(LessonError::InvalidNumber("-9223372036854775807".into()))
        );
        assert_eq!(call("age -1000").unwrap().evaluate().unwrap(), "3024");

        let mut machine = FunctionMachine::default();
        assert!(machine.run(&far_past).is_err());
        assert_eq!(machine.runs(), 0);
    }

    #[test]
    fn fifth_run_earns_badge() {
        let mut machine = FunctionMachine::default();
        let add = call("add 1 1").unwrap();
        for expected_runs in 1..=4 {
            let (_, result) = machine.run(&add).unwrap();
            assert_eq!(result.runs, expected_runs);
            assert!(!result.earns_badge);
        }
        let (_, result) = machine.run(&add).unwrap();
        assert!(result.earns_badge);
        assert_eq!(machine.log.len(), 5);
    }

    #[test]
    fn failed_runs_are_not_counted() {
        let mut machine = FunctionMachine::default();
        assert!(machine.run(&call("bmi 70 0").unwrap()).is_err());
        assert_eq!(machine.runs(), 0);
        assert!(machine.log.is_empty());
    }
}
