use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// The closed set of expense categories offered by the application.
///
/// The declaration order is the display order, and `Ord` follows it, which
/// keeps grouped views deterministic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let needle = input.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| LedgerError::Validation(format!("unknown category `{}`", input)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("TRANSPORT".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!(" Other ".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn unknown_label_is_a_validation_error() {
        let err = "Rent".parse::<Category>().expect_err("Rent is not in the set");
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn ordering_follows_declaration_order() {
        let mut shuffled = [Category::Other, Category::Food, Category::Transport];
        shuffled.sort();
        assert_eq!(
            shuffled,
            [Category::Food, Category::Transport, Category::Other]
        );
    }
}
