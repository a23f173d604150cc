use crate::model::Flashcard;

/// Posición y cara visible del mazo de tarjetas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashcardDeck {
    index: usize,
    flipped: bool,
}

impl FlashcardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn current<'a>(&self, cards: &'a [Flashcard]) -> Option<&'a Flashcard> {
        cards.get(self.index)
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.flipped = false;
        self.index = (self.index + 1) % len;
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.flipped = false;
        self.index = (self.index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_in_both_directions() {
        let mut deck = FlashcardDeck::new();
        deck.previous(3);
        assert_eq!(deck.index(), 2);
        deck.next(3);
        assert_eq!(deck.index(), 0);
        deck.next(3);
        deck.next(3);
        deck.next(3);
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn moving_shows_the_front_again() {
        let mut deck = FlashcardDeck::new();
        deck.flip();
        assert!(deck.is_flipped());
        deck.next(2);
        assert!(!deck.is_flipped());
        deck.flip();
        deck.previous(2);
        assert!(!deck.is_flipped());
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut deck = FlashcardDeck::new();
        deck.next(0);
        deck.previous(0);
        assert_eq!(deck.index(), 0);
        assert!(deck.current(&[]).is_none());
    }
}
