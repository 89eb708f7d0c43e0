use super::constants::{
    INITIAL_ACTIVE_BOTTOM_FRACTION, INITIAL_ACTIVE_TOP_FRACTION, SECTION_MIN_ACTIVE_RATIO,
};
use fnv::FnvHashMap;

#[derive(Clone, Debug)]
struct SectionObservation {
    id: String,
    visibility_ratio: f64,
}

#[derive(Clone, Debug, Default)]
pub struct SectionVisibilityResolver {
    // document order, fixed at construction
    sections: Vec<SectionObservation>,
    index_by_id: FnvHashMap<String, usize>,
}

impl SectionVisibilityResolver {
    /// Register the static section list. Order is the tie-break order; a
    /// repeated id keeps its first position.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sections = Vec::new();
        let mut index_by_id = FnvHashMap::default();
        for id in ids {
            let id = id.into();
            if index_by_id.contains_key(&id) {
                continue;
            }
            index_by_id.insert(id.clone(), sections.len());
            sections.push(SectionObservation {
                id,
                visibility_ratio: 0.0,
            });
        }
        Self {
            sections,
            index_by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    /// Record the latest ratio for `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, ratio: f64) {
        if let Some(&i) = self.index_by_id.get(id) {
            self.sections[i].visibility_ratio = sanitize_ratio(ratio);
        }
    }

    /// Observer-entry form of [`update`](Self::update): a section that is no
    /// longer intersecting counts as fully hidden.
    pub fn update_entry(&mut self, id: &str, is_intersecting: bool, ratio: f64) {
        self.update(id, if is_intersecting { ratio } else { 0.0 });
    }

    pub fn ratio(&self, id: &str) -> Option<f64> {
        self.index_by_id
            .get(id)
            .map(|&i| self.sections[i].visibility_ratio)
    }

    /// The section with the highest recorded ratio, if that ratio reaches
    /// [`SECTION_MIN_ACTIVE_RATIO`]. Equal ratios resolve to the earliest
    /// section in document order.
    pub fn resolve_active(&self) -> Option<&str> {
        let mut best: Option<&SectionObservation> = None;
        for s in &self.sections {
            match best {
                Some(b) if s.visibility_ratio <= b.visibility_ratio => {}
                _ => best = Some(s),
            }
        }
        best.filter(|b| b.visibility_ratio >= SECTION_MIN_ACTIVE_RATIO)
            .map(|b| b.id.as_str())
    }
}

#[inline]
fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Viewport-relative vertical extent of a section (bounding client rect).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// Page-load guess before the first observer batch arrives: the first section
/// spanning the band between a quarter and half of the viewport height.
pub fn initial_active<'a, I>(sections: I, viewport_height: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, SectionRect)>,
{
    let top_limit = viewport_height * INITIAL_ACTIVE_TOP_FRACTION;
    let bottom_limit = viewport_height * INITIAL_ACTIVE_BOTTOM_FRACTION;
    sections
        .into_iter()
        .find(|(_, r)| r.top <= top_limit && r.bottom >= bottom_limit)
        .map(|(id, _)| id)
}

/// Vertical centre of the active nav item, relative to the top of the menu.
#[inline]
pub fn indicator_offset(menu_top: f64, item_top: f64, item_bottom: f64) -> f64 {
    (item_top + item_bottom) * 0.5 - menu_top
}

/// `"#about"` -> `Some("about")`; an empty fragment selects nothing.
#[inline]
pub fn parse_fragment(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}
