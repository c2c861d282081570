use contracts::domain::a001_vehicle::{CatalogFilter, VehicleCatalogEntry};

/// Visibility phase of one catalog card.
///
/// Hiding is two-step: the card fades out first and leaves the layout only
/// after the fade delay, otherwise the transition would be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Visible,
    /// Back in layout, about to fade in
    Revealing,
    /// Faded, still in layout
    FadingOut,
    /// Out of layout
    Hidden,
}

impl CardPhase {
    pub fn style(&self) -> &'static str {
        match self {
            CardPhase::Visible => "display: block; opacity: 1; transform: translateY(0);",
            CardPhase::Revealing | CardPhase::FadingOut => {
                "display: block; opacity: 0; transform: translateY(20px);"
            }
            CardPhase::Hidden => "display: none; opacity: 0; transform: translateY(20px);",
        }
    }
}

/// A phase change to apply later, if the card has not moved on meanwhile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPhase {
    pub index: usize,
    pub from: CardPhase,
    pub to: CardPhase,
    pub delay_ms: u32,
}

/// Catalog listings with their visibility and the active category filter
#[derive(Debug, Clone)]
pub struct CatalogState {
    entries: Vec<VehicleCatalogEntry>,
    phases: Vec<CardPhase>,
    active: CatalogFilter,
    fade_ms: u32,
    reveal_ms: u32,
}

impl CatalogState {
    pub fn new(entries: Vec<VehicleCatalogEntry>, fade_ms: u32, reveal_ms: u32) -> Self {
        let phases = vec![CardPhase::Visible; entries.len()];
        Self {
            entries,
            phases,
            active: CatalogFilter::All,
            fade_ms,
            reveal_ms,
        }
    }

    pub fn entries(&self) -> &[VehicleCatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&VehicleCatalogEntry> {
        self.entries.get(index)
    }

    pub fn phase(&self, index: usize) -> CardPhase {
        self.phases.get(index).copied().unwrap_or(CardPhase::Hidden)
    }

    pub fn active(&self) -> &CatalogFilter {
        &self.active
    }

    /// Filter buttons, "all" first
    pub fn filters(&self) -> Vec<CatalogFilter> {
        CatalogFilter::available(&self.entries)
    }

    /// Switch the active filter. Immediate phase changes are applied; the
    /// returned ones must be handed to [`CatalogState::settle`] after their delay.
    pub fn apply_filter(&mut self, filter: CatalogFilter) -> Vec<PendingPhase> {
        log::debug!("catalog filter: {}", filter.key());
        let mut pending = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            let current = self.phases[index];
            let next = if filter.matches(entry) {
                match current {
                    CardPhase::Visible => continue,
                    _ => PendingPhase {
                        index,
                        from: CardPhase::Revealing,
                        to: CardPhase::Visible,
                        delay_ms: self.reveal_ms,
                    },
                }
            } else {
                match current {
                    CardPhase::Hidden => continue,
                    _ => PendingPhase {
                        index,
                        from: CardPhase::FadingOut,
                        to: CardPhase::Hidden,
                        delay_ms: self.fade_ms,
                    },
                }
            };
            self.phases[index] = next.from;
            pending.push(next);
        }

        self.active = filter;
        pending
    }

    /// Apply a deferred phase change. Stale changes (the card was re-filtered
    /// in between) are ignored.
    pub fn settle(&mut self, pending: &PendingPhase) -> bool {
        match self.phases.get_mut(pending.index) {
            Some(phase) if *phase == pending.from => {
                *phase = pending.to;
                true
            }
            _ => false,
        }
    }

    /// Whether the card is shown once all pending changes have settled
    pub fn is_shown(&self, index: usize) -> bool {
        matches!(self.phase(index), CardPhase::Visible | CardPhase::Revealing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_vehicle::RawCatalogEntry;

    fn catalog() -> CatalogState {
        let entries = ["suv", "sports", "luxury", "suv", "economy"]
            .iter()
            .enumerate()
            .map(|(i, c)| {
                VehicleCatalogEntry::from_raw(RawCatalogEntry {
                    title: format!("Car {i}"),
                    price_per_day: "100".into(),
                    category: c.to_string(),
                    ..Default::default()
                })
            })
            .collect();
        CatalogState::new(entries, 300, 50)
    }

    fn settle_all(state: &mut CatalogState, pending: &[PendingPhase]) {
        for p in pending {
            state.settle(p);
        }
    }

    #[test]
    fn test_visible_iff_matches_after_settle() {
        let mut state = catalog();
        for key in ["suv", "sports", "all", "economy", "van", "luxury", "all"] {
            let filter = CatalogFilter::from_key(key);
            let pending = state.apply_filter(filter.clone());
            settle_all(&mut state, &pending);
            for (i, entry) in state.entries().iter().enumerate() {
                let expected = key == "all" || entry.category == key;
                let phase = state.phase(i);
                assert_eq!(phase == CardPhase::Visible, expected, "{key}: card {i}");
                assert_eq!(phase == CardPhase::Hidden, !expected, "{key}: card {i}");
            }
            assert_eq!(state.active(), &filter);
        }
    }

    #[test]
    fn test_fade_precedes_hide() {
        let mut state = catalog();
        let pending = state.apply_filter(CatalogFilter::from_key("suv"));
        assert_eq!(state.phase(1), CardPhase::FadingOut);
        let hide = pending.iter().find(|p| p.index == 1).unwrap();
        assert_eq!(hide.to, CardPhase::Hidden);
        assert_eq!(hide.delay_ms, 300);
        assert!(state.settle(hide));
        assert_eq!(state.phase(1), CardPhase::Hidden);
    }

    #[test]
    fn test_is_shown_tracks_target_visibility() {
        let mut state = catalog();
        let hide = state.apply_filter(CatalogFilter::from_key("suv"));
        assert!(state.is_shown(0));
        assert!(!state.is_shown(1));
        settle_all(&mut state, &hide);

        state.apply_filter(CatalogFilter::All);
        assert_eq!(state.phase(1), CardPhase::Revealing);
        assert!(state.is_shown(1));
        assert!(!state.is_shown(99));
    }

    #[test]
    fn test_unchanged_cards_get_no_pending_work() {
        let mut state = catalog();
        let pending = state.apply_filter(CatalogFilter::All);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_stale_hide_ignored_after_refilter() {
        let mut state = catalog();
        let first = state.apply_filter(CatalogFilter::from_key("suv"));
        // back to all before the fade completed
        let second = state.apply_filter(CatalogFilter::All);
        settle_all(&mut state, &first);
        settle_all(&mut state, &second);
        assert!((0..5).all(|i| state.phase(i) == CardPhase::Visible));
    }

    #[test]
    fn test_filters_listed() {
        let keys: Vec<String> = catalog()
            .filters()
            .iter()
            .map(|f| f.key().to_string())
            .collect();
        assert_eq!(keys, vec!["all", "suv", "sports", "luxury", "economy"]);
    }
}
