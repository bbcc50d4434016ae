use std::fmt;

/// A character as the forge sees it: a multi-line description and a power total.
///
/// Base characters carry a single-line label; every applied upgrade appends
/// one more line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Character {
    pub label: String,
    pub power: u32,
}

impl Character {
    pub fn new(label: impl Into<String>, power: u32) -> Self {
        Self {
            label: label.into(),
            power,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.label.lines()
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\nTotal Power: {}", self.label, self.power)
    }
}
