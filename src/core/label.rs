use crate::dict::symbol_table::Element;

/// `"{Name} ({Symbol})"`, symbol in the table's canonical casing.
pub type Label = String;
/// One complete spelling of a word, left to right.
pub type Path = Vec<Label>;
/// Every spelling of a word, in traversal order.
pub type ResultSet = Vec<Path>;

pub fn label_of(element: &Element) -> Label {
    element.to_string()
}

// copy of `path` with `label` appended; `path` itself is left alone
pub fn extend_path(path: &[Label], label: Label) -> Path {
    let mut new_path = Vec::with_capacity(path.len() + 1);
    new_path.extend_from_slice(path);
    new_path.push(label);
    new_path
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn label_format() {
        let element = Element {
            symbol: "Ac".to_string(),
            name: "Actinium".to_string(),
        };
        assert_eq!("Actinium (Ac)", label_of(&element));
    }

    #[test]
    fn extend_leaves_original() {
        let path = vec!["Sulfur (S)".to_string()];
        let a = extend_path(&path, "Nitrogen (N)".to_string());
        let b = extend_path(&path, "Sodium (Na)".to_string());
        assert_eq!(vec!["Sulfur (S)"], path);
        assert_eq!(vec!["Sulfur (S)", "Nitrogen (N)"], a);
        assert_eq!(vec!["Sulfur (S)", "Sodium (Na)"], b);
    }
}
