use crate::catalog::{ElementRecord, GridPosition};
use crate::controller::Surface;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug)]
pub struct Card {
    pub record: ElementRecord,
    pub position: GridPosition,
    pub visible: bool,
}

/// Terminal rendering surface. The controller writes into it; the render
/// module only reads from it.
#[derive(Clone, Debug, Default)]
pub struct Board {
    // keyed by position so iteration follows grid order
    cards: BTreeMap<GridPosition, Card>,
    index: HashMap<u32, GridPosition>,
    highlighted: Option<u32>,
    detail: Option<ElementRecord>,
    dark: bool,
}

impl Board {
    pub fn card_at(&self, pos: GridPosition) -> Option<&Card> {
        self.cards.get(&pos)
    }

    pub fn card(&self, atomic_number: u32) -> Option<&Card> {
        self.index.get(&atomic_number).and_then(|p| self.cards.get(p))
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Positions of visible cards in row-major grid order.
    pub fn visible_positions(&self) -> Vec<GridPosition> {
        self.cards
            .values()
            .filter(|c| c.visible)
            .map(|c| c.position)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.cards.values().filter(|c| c.visible).count()
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn highlighted(&self) -> Option<u32> {
        self.highlighted
    }

    pub fn detail(&self) -> Option<&ElementRecord> {
        self.detail.as_ref()
    }

    pub fn dark(&self) -> bool {
        self.dark
    }
}

impl Surface for Board {
    fn render_card(&mut self, record: &ElementRecord, position: GridPosition) {
        if let Some(old) = self.index.insert(record.atomic_number, position) {
            self.cards.remove(&old);
        }
        self.cards.insert(
            position,
            Card {
                record: *record,
                position,
                visible: true,
            },
        );
    }

    fn update_detail_panel(&mut self, record: &ElementRecord) {
        self.detail = Some(*record);
    }

    fn close_detail_panel(&mut self) {
        self.detail = None;
    }

    fn set_card_visibility(&mut self, atomic_number: u32, visible: bool) {
        // unpositioned records have no card
        let Some(pos) = self.index.get(&atomic_number) else {
            return;
        };
        if let Some(card) = self.cards.get_mut(pos) {
            card.visible = visible;
        }
    }

    fn highlight_card(&mut self, atomic_number: u32) {
        self.highlighted = Some(atomic_number);
    }

    fn clear_highlight(&mut self, atomic_number: u32) {
        if self.highlighted == Some(atomic_number) {
            self.highlighted = None;
        }
    }

    fn apply_theme(&mut self, dark: bool) {
        self.dark = dark;
    }
}
