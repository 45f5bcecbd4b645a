pub mod config;
pub mod core;
pub mod dict;
pub mod error;
pub mod format;

use once_cell::sync::Lazy;

pub use crate::core::calculator::{ElementalCalculator, TraversalMode};
pub use crate::core::label::{Label, Path, ResultSet};
pub use crate::error::{ElementalError, Result};

pub static GLOBAL_CALCULATOR: Lazy<ElementalCalculator> = Lazy::new(ElementalCalculator::default);

/// Spells `word` with the built-in element table.
pub fn elemental_forms(word: Option<&str>) -> ResultSet {
    GLOBAL_CALCULATOR.elemental_forms(word)
}

#[cfg(test)]
mod tests {
    use crate::elemental_forms;

    fn test_once(text: &str, expect_forms: Vec<Vec<&str>>) {
        assert_eq!(expect_forms, elemental_forms(Some(text)));
    }

    #[test]
    fn global_calculator_works() {
        test_once("Sc", vec![vec!["Sulfur (S)", "Carbon (C)"], vec!["Scandium (Sc)"]]);
        test_once(
            "Snack",
            vec![
                vec!["Sulfur (S)", "Nitrogen (N)", "Actinium (Ac)", "Potassium (K)"],
                vec!["Sulfur (S)", "Sodium (Na)", "Carbon (C)", "Potassium (K)"],
                vec!["Tin (Sn)", "Actinium (Ac)", "Potassium (K)"],
            ],
        );
        test_once("Xerox", vec![]);
    }

    #[test]
    fn global_calculator_shared_across_threads() {
        let handles: Vec<_> = ["beach", "BEACH", "BeAcH"]
            .into_iter()
            .map(|word| std::thread::spawn(move || elemental_forms(Some(word))))
            .collect();
        for handle in handles {
            assert_eq!(
                vec![vec!["Beryllium (Be)", "Actinium (Ac)", "Hydrogen (H)"]],
                handle.join().unwrap()
            );
        }
    }
}
