use crate::dict::symbol_table::MAX_SYMBOL_LEN;

// ascii uppercase -> lowercase, everything else untouched
pub fn regularize(input: char) -> char {
    input.to_ascii_lowercase()
}

pub fn regularize_str(input: &str) -> String {
    input.chars().map(regularize).collect()
}

/// An element symbol is one to three ASCII letters.
pub fn is_symbol(input: &str) -> bool {
    let len = input.chars().count();
    (1..=MAX_SYMBOL_LEN).contains(&len) && input.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn regularize_ascii_only() {
        assert_eq!('a', regularize('A'));
        assert_eq!('z', regularize('z'));
        assert_eq!('É', regularize('É'));
        assert_eq!("beach", regularize_str("BeAcH"));
    }

    #[test]
    fn symbol_shape() {
        assert!(is_symbol("H"));
        assert!(is_symbol("uue"));
        assert!(!is_symbol(""));
        assert!(!is_symbol("Uuex"));
        assert!(!is_symbol("H2"));
        assert!(!is_symbol("Hé"));
    }

    #[test]
    fn blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" H "));
    }
}
