use crate::Card;
use std::collections::BTreeSet;

/// Filters the effective list down to the selected categories. An empty
/// selection means "no filter", not "match nothing". Order is preserved.
pub fn select_pool<'a>(effective: &[&'a Card], selected: &BTreeSet<String>) -> Vec<&'a Card> {
    if selected.is_empty() {
        return effective.to_vec();
    }
    effective
        .iter()
        .copied()
        .filter(|card| selected.contains(&card.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardKind;

    fn card(id: &str, category: &str) -> Card {
        Card {
            id: id.to_string(),
            kind: CardKind::Info,
            category: category.to_string(),
            prompt: String::new(),
            question: String::new(),
            guide: String::new(),
            source_refs: String::new(),
        }
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let cards = [card("info-0", "A"), card("info-1", "B")];
        let effective: Vec<&Card> = cards.iter().collect();
        let pool = select_pool(&effective, &BTreeSet::new());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn selection_filters_and_preserves_order() {
        let cards = [card("info-0", "A"), card("info-1", "B"), card("info-2", "A")];
        let effective: Vec<&Card> = cards.iter().collect();
        let selected = BTreeSet::from(["A".to_string()]);
        let ids: Vec<&str> = select_pool(&effective, &selected)
            .iter()
            .map(|card| card.id.as_str())
            .collect();
        assert_eq!(ids, ["info-0", "info-2"]);
    }

    #[test]
    fn category_match_is_exact() {
        let cards = [card("info-0", "Santé")];
        let effective: Vec<&Card> = cards.iter().collect();
        let selected = BTreeSet::from(["santé".to_string()]);
        assert!(select_pool(&effective, &selected).is_empty());
    }
}
