//! Splitting flashcard and quiz batches into cards

/// Separator between cards in a batch
pub const CARD_DELIMITER: &str = "\n\n";

/// Split a batch on blank lines, trimming each card and dropping empty ones
pub fn split_cards(batch: &str) -> Vec<String> {
    batch
        .split(CARD_DELIMITER)
        .map(str::trim)
        .filter(|card| !card.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn trailing_blank_entries_are_dropped() {
        assert_eq!(split_cards("A\n\nB\n\n\n\n"), vec!["A", "B"]);
    }

    #[test]
    fn whitespace_batch_has_no_cards() {
        assert!(split_cards("  \n\n \t \n\n\n").is_empty());
        assert!(split_cards("").is_empty());
    }

    #[test]
    fn single_newlines_stay_inside_a_card() {
        let batch = "Q: What is Rust?\nA: A language\n\nQ: Who?\nA: Everyone";
        assert_eq!(
            split_cards(batch),
            vec!["Q: What is Rust?\nA: A language", "Q: Who?\nA: Everyone"]
        );
    }

    #[test]
    fn cards_keep_order() {
        assert_eq!(split_cards("3\n\n1\n\n2"), vec!["3", "1", "2"]);
    }

    proptest! {
        #[test]
        fn cards_are_trimmed_and_non_empty(batch in "[a-c \\n]{0,40}") {
            for card in split_cards(&batch) {
                prop_assert!(!card.is_empty());
                prop_assert_eq!(card.trim(), card.as_str());
                prop_assert!(!card.contains(CARD_DELIMITER));
            }
        }

        #[test]
        fn joined_cards_split_back(cards in proptest::collection::vec("[a-z]{1,8}", 0..6)) {
            let batch = cards.join(CARD_DELIMITER);
            prop_assert_eq!(split_cards(&batch), cards);
        }
    }
}
