//! Per-section reveal state shared by every reveal path.
//!
//! Sections are kept in registration (document) order. Every flag in here is
//! monotonic: the only writes are `false -> true`, so the eager mount default,
//! the intersection signal, the scroll fallback and navigation can all write
//! the same section without coordinating.

/// A child element of a section that fades in as part of its cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaggerItem {
    pub order: usize,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub revealed: bool,
    pub observed: bool,
    cascaded: bool,
    items: Vec<StaggerItem>,
}

impl Section {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            revealed: false,
            observed: false,
            cascaded: false,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[StaggerItem] {
        &self.items
    }

    /// Whether a positive observation has already started this section's cascade.
    #[cfg(test)]
    pub fn cascaded(&self) -> bool {
        self.cascaded
    }
}

/// Result of a reveal write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// The flag flipped to `true` with this write.
    Newly,
    /// The flag was already `true`; nothing changed.
    Already,
    /// No section with that id is registered.
    Unknown,
}

impl Reveal {
    pub fn changed(self) -> bool {
        matches!(self, Reveal::Newly)
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RevealRegistry {
    sections: Vec<Section>,
    active: Option<String>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a section as observed. Registering the same id twice only
    /// re-marks it observed; its reveal state is preserved.
    pub fn register(&mut self, id: &str) {
        match self.position(id) {
            Some(index) => self.sections[index].observed = true,
            None => {
                let mut section = Section::new(id);
                section.observed = true;
                self.sections.push(section);
            }
        }
    }

    pub fn reveal(&mut self, id: &str) -> Reveal {
        match self.section_mut(id) {
            None => Reveal::Unknown,
            Some(section) if section.revealed => Reveal::Already,
            Some(section) => {
                section.revealed = true;
                Reveal::Newly
            }
        }
    }

    /// Fixes the section's item list to `count` entries in document order.
    /// Items that were already revealed stay revealed.
    pub fn assign_items(&mut self, id: &str, count: usize) {
        if let Some(section) = self.section_mut(id) {
            if section.items.len() < count {
                let start = section.items.len();
                section.items.extend((start..count).map(|order| StaggerItem {
                    order,
                    revealed: false,
                }));
            }
        }
    }

    /// Claims the first cascade of a section. Returns `false` if a cascade was
    /// already claimed or the section is unknown.
    pub fn claim_cascade(&mut self, id: &str) -> bool {
        match self.section_mut(id) {
            Some(section) if !section.cascaded => {
                section.cascaded = true;
                true
            }
            _ => false,
        }
    }

    /// Reveals one stagger item. Refused while the owning section is still
    /// unrevealed, so an item can never be shown ahead of its section.
    pub fn reveal_item(&mut self, id: &str, order: usize) -> Reveal {
        let Some(section) = self.section_mut(id) else {
            return Reveal::Unknown;
        };
        if !section.revealed {
            return Reveal::Unknown;
        }
        match section.items.get_mut(order) {
            None => Reveal::Unknown,
            Some(item) if item.revealed => Reveal::Already,
            Some(item) => {
                item.revealed = true;
                Reveal::Newly
            }
        }
    }

    /// Sets the active section. Unlike reveals this is freely overwritten.
    pub fn set_active(&mut self, id: Option<&str>) -> bool {
        if self.active.as_deref() == id {
            return false;
        }
        self.active = id.map(str::to_string);
        true
    }

    /// Clears every `observed` flag and returns the ids that were observed.
    pub fn unobserve_all(&mut self) -> Vec<String> {
        self.sections
            .iter_mut()
            .filter(|section| section.observed)
            .map(|section| {
                section.observed = false;
                section.id.clone()
            })
            .collect()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.section(id).map_or(false, |section| section.revealed)
    }

    pub fn is_item_revealed(&self, id: &str, order: usize) -> bool {
        self.section(id)
            .and_then(|section| section.items.get(order))
            .map_or(false, |item| item.revealed)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|section| section.id == id)
    }
}
