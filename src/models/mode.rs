/// What one visualization attempt draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    FullNetwork,
    PathOverlay,
}

impl Mode {
    /// Map the prompt answer to a mode; `None` for anything but "1" or "2"
    #[must_use]
    pub fn from_choice(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Mode::FullNetwork),
            "2" => Some(Mode::PathOverlay),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::FullNetwork => "full network",
            Mode::PathOverlay => "path overlay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_choices() {
        assert_eq!(Mode::from_choice("1"), Some(Mode::FullNetwork));
        assert_eq!(Mode::from_choice("2"), Some(Mode::PathOverlay));
        assert_eq!(Mode::from_choice(" 2\n"), Some(Mode::PathOverlay));
    }

    #[test]
    fn test_invalid_choices() {
        for input in ["", "0", "3", "12", "one", "1 2"] {
            assert_eq!(Mode::from_choice(input), None, "{input:?}");
        }
    }
}
