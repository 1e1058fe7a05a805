//! Memory Match: shuffled pair deck and two-card flip resolution
//!
//! Turn-based like the board game. The deck shuffle takes the caller's RNG so
//! a fixed seed deals the same layout; clearing the board is the hub's only
//! other VICTORY condition.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::settings::MemorySettings;
use crate::sim::state::SessionStatus;

/// One card in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    /// Which pair this card belongs to; the render layer maps it to art
    pub pair: u8,
    pub face_up: bool,
    pub matched: bool,
}

#[derive(Debug, Clone)]
pub struct MemoryGame {
    pub cards: Vec<Card>,
    /// Cards currently face up and unresolved; never more than two
    flipped: Vec<usize>,
    /// Completed two-card attempts
    pub moves: u32,
    pub status: SessionStatus,
}

impl MemoryGame {
    /// Deal a shuffled deck of `pairs` duplicated values
    pub fn new<R: Rng + ?Sized>(pairs: usize, rng: &mut R) -> Self {
        let pairs = pairs.clamp(1, usize::from(u8::MAX));
        let mut cards: Vec<Card> = (0..pairs as u8)
            .flat_map(|pair| {
                [Card {
                    pair,
                    face_up: false,
                    matched: false,
                }; 2]
            })
            .collect();
        cards.shuffle(rng);
        Self {
            cards,
            flipped: Vec::with_capacity(2),
            moves: 0,
            status: SessionStatus::Playing,
        }
    }

    /// Deal from the configured deck size, clamped
    pub fn from_settings<R: Rng + ?Sized>(cfg: &MemorySettings, rng: &mut R) -> Self {
        let mut cfg = *cfg;
        cfg.sanitize();
        Self::new(cfg.pairs, rng)
    }

    /// Deal a fresh deck for a rematch
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.cards.len() / 2, rng);
    }

    /// Whether a flipped pair is waiting on `resolve`
    pub fn pending(&self) -> bool {
        self.flipped.len() == 2
    }

    /// Turn a card face up. Ignored for matched or already-up cards, and
    /// while a pair is awaiting `resolve`.
    pub fn flip(&mut self, index: usize) {
        if self.status != SessionStatus::Playing || index >= self.cards.len() {
            return;
        }
        if self.pending() {
            return;
        }
        let card = &mut self.cards[index];
        if card.matched || card.face_up {
            return;
        }
        card.face_up = true;
        self.flipped.push(index);
        if self.flipped.len() == 2 {
            self.moves += 1;
        }
    }

    /// Settle the current pair: mark a match (clearing the board wins the
    /// session) or turn both cards back down. The presentation layer calls
    /// this after its reveal delay.
    pub fn resolve(&mut self) {
        let &[a, b] = self.flipped.as_slice() else {
            return;
        };
        if self.cards[a].pair == self.cards[b].pair {
            self.cards[a].matched = true;
            self.cards[b].matched = true;
            if self.cards.iter().all(|c| c.matched) {
                self.status.finish(SessionStatus::Victory);
                log::info!("memory: board cleared in {} moves", self.moves);
            }
        } else {
            self.cards[a].face_up = false;
            self.cards[b].face_up = false;
        }
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn game(pairs: usize, seed: u64) -> MemoryGame {
        let mut rng = Pcg32::seed_from_u64(seed);
        MemoryGame::new(pairs, &mut rng)
    }

    /// Index of the other card with the same pair value
    fn partner(game: &MemoryGame, index: usize) -> usize {
        game.cards
            .iter()
            .enumerate()
            .position(|(i, c)| i != index && c.pair == game.cards[index].pair)
            .unwrap()
    }

    #[test]
    fn test_degenerate_deck_settings_clamp() {
        let mut rng = Pcg32::seed_from_u64(0);
        let g = MemoryGame::from_settings(&MemorySettings { pairs: 0 }, &mut rng);
        assert_eq!(g.cards.len(), 4);
    }

    #[test]
    fn test_deck_holds_every_pair_twice() {
        let game = game(6, 1);
        assert_eq!(game.cards.len(), 12);
        for pair in 0..6u8 {
            let count = game.cards.iter().filter(|c| c.pair == pair).count();
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_same_seed_deals_the_same_layout() {
        let a = game(8, 7);
        let b = game(8, 7);
        assert_eq!(a.cards, b.cards);
    }

    #[test]
    fn test_matching_pair_stays_up() {
        let mut g = game(4, 2);
        let first = 0;
        let second = partner(&g, first);
        g.flip(first);
        g.flip(second);
        assert_eq!(g.moves, 1);

        g.resolve();
        assert!(g.cards[first].matched);
        assert!(g.cards[second].matched);
        assert_eq!(g.status, SessionStatus::Playing);
    }

    #[test]
    fn test_mismatch_turns_both_back_down() {
        let mut g = game(4, 3);
        let first = 0;
        // Any card that is not the partner of `first`
        let second = (1..g.cards.len())
            .find(|&i| g.cards[i].pair != g.cards[first].pair)
            .unwrap();
        g.flip(first);
        g.flip(second);
        g.resolve();
        assert!(!g.cards[first].face_up);
        assert!(!g.cards[second].face_up);
        assert_eq!(g.moves, 1);
    }

    #[test]
    fn test_third_flip_is_ignored_until_resolve() {
        let mut g = game(4, 4);
        g.flip(0);
        let second = (1..g.cards.len()).find(|&i| !g.cards[i].face_up).unwrap();
        g.flip(second);
        assert!(g.pending());

        let third = (1..g.cards.len())
            .find(|&i| i != second && !g.cards[i].face_up)
            .unwrap();
        g.flip(third);
        assert!(!g.cards[third].face_up);
    }

    #[test]
    fn test_flipping_a_matched_or_face_up_card_is_a_no_op() {
        let mut g = game(4, 5);
        g.flip(0);
        g.flip(0);
        assert_eq!(g.flipped.len(), 1);
        assert_eq!(g.moves, 0);

        let second = partner(&g, 0);
        g.flip(second);
        g.resolve();
        g.flip(0); // matched card
        assert_eq!(g.flipped.len(), 0);
    }

    #[test]
    fn test_clearing_the_board_is_victory() {
        let mut g = game(3, 6);
        for pair in 0..3u8 {
            let first = g.cards.iter().position(|c| c.pair == pair).unwrap();
            let second = partner(&g, first);
            g.flip(first);
            g.flip(second);
            g.resolve();
        }
        assert_eq!(g.status, SessionStatus::Victory);

        // Frozen once won
        g.flip(0);
        assert!(g.flipped.is_empty());
    }
}
