/// Result of a card interaction; the caller applies it to the DOM.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardTransition {
    pub closed: Vec<usize>,
    pub opened: Option<usize>,
    /// True while a card is open: backdrop shown, page scroll locked.
    pub overlay_active: bool,
}

impl CardTransition {
    pub fn is_noop(&self) -> bool {
        self.closed.is_empty() && self.opened.is_none()
    }
}

/// At most one card is open at a time.
#[derive(Clone, Debug, Default)]
pub struct ExpandableCards {
    count: usize,
    open: Option<usize>,
}

impl ExpandableCards {
    pub fn new(count: usize) -> Self {
        Self { count, open: None }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, closing whichever card was open; toggling the open card
    /// closes it. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> CardTransition {
        if index >= self.count {
            return self.transition(Vec::new(), None);
        }
        match self.open.take() {
            Some(current) if current == index => self.transition(vec![current], None),
            previous => {
                self.open = Some(index);
                self.transition(previous.into_iter().collect(), Some(index))
            }
        }
    }

    pub fn close_all(&mut self) -> CardTransition {
        let closed = self.open.take().into_iter().collect();
        self.transition(closed, None)
    }

    fn transition(&self, closed: Vec<usize>, opened: Option<usize>) -> CardTransition {
        CardTransition {
            closed,
            opened,
            overlay_active: self.open.is_some(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKeyAction {
    Toggle,
    CloseAll,
}

#[inline]
pub fn card_key_action(key: &str) -> Option<CardKeyAction> {
    match key {
        "Enter" | " " => Some(CardKeyAction::Toggle),
        "Escape" => Some(CardKeyAction::CloseAll),
        _ => None,
    }
}
