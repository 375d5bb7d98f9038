use crate::domain::entities::account::{
    checkbox_element_id, AccountId, AccountSelection, PendingAccount,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    pub account: PendingAccount,
    pub checked: bool,
}

impl ReviewCard {
    pub fn element_id(&self) -> String {
        checkbox_element_id(&self.account.id)
    }
}

/// The pending-account cards in display order together with their checkbox state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewBoard {
    cards: Vec<ReviewCard>,
}

impl ReviewBoard {
    pub fn new(accounts: Vec<PendingAccount>) -> Self {
        Self {
            cards: accounts
                .into_iter()
                .map(|account| ReviewCard {
                    account,
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn cards(&self) -> &[ReviewCard] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn check_all(&mut self) {
        self.set_all(true);
    }

    pub fn uncheck_all(&mut self) {
        self.set_all(false);
    }

    fn set_all(&mut self, checked: bool) {
        for card in &mut self.cards {
            card.checked = checked;
        }
    }

    pub fn set_checked(&mut self, id: &AccountId, checked: bool) {
        if let Some(card) = self.cards.iter_mut().find(|card| &card.account.id == id) {
            card.checked = checked;
        }
    }

    pub fn checked_count(&self) -> usize {
        self.cards.iter().filter(|card| card.checked).count()
    }

    /// Ids are taken from the cards themselves, never parsed back out of `check-<id>`.
    pub fn selection(&self) -> AccountSelection {
        self.cards
            .iter()
            .filter(|card| card.checked)
            .map(|card| card.account.id.clone())
            .collect()
    }

    /// Drops the cards that were part of `selection`; returns how many went.
    pub fn remove_cards(&mut self, selection: &AccountSelection) -> usize {
        let before = self.cards.len();
        self.cards
            .retain(|card| !selection.contains(&card.account.id));
        before - self.cards.len()
    }
}
