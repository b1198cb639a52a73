//! Cats, deliverable items, and the resting-spot allocator.

use crate::game::geometry::Rect;
use crate::game::rng::Lcg;

/// The two resource types a cat can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Need {
    Food,
    Water,
}

impl Need {
    pub fn glyph(&self) -> &'static str {
        match self {
            Need::Food => "\u{1F37D}",  // 🍽
            Need::Water => "\u{1F4A7}", // 💧
        }
    }

    /// Badge colour shown next to a requesting cat.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Need::Food => "#FF6B6B",
            Need::Water => "#4ECDC4",
        }
    }

    pub fn other(&self) -> Need {
        match self {
            Need::Food => Need::Water,
            Need::Water => Need::Food,
        }
    }
}

/// Dialogue personality. Misa asks politely; Pars demands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temperament {
    Gentle,
    Bossy,
}

pub const CAT_SIZE: f64 = 70.0;
pub const ITEM_SIZE: f64 = 60.0;

/// Fixed candidate resting positions around the room.
pub const REST_SPOTS: [(f64, f64); 9] = [
    (90.0, 220.0),
    (140.0, 220.0),
    (240.0, 260.0),
    (290.0, 260.0),
    (340.0, 260.0),
    (60.0, 480.0),
    (150.0, 520.0),
    (80.0, 440.0),
    (200.0, 480.0),
];

#[derive(Clone, Debug)]
pub struct Cat {
    pub id: &'static str,
    pub name: &'static str,
    pub temperament: Temperament,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    /// At most one active need; never set while `satisfied` is true.
    pub need: Option<Need>,
    /// Absolute timestamp (ms) by which the need must be fulfilled.
    pub deadline: Option<f64>,
    /// Grace flag after a correct delivery; suppresses new requests.
    pub satisfied: bool,
}

impl Cat {
    fn new(
        id: &'static str,
        name: &'static str,
        temperament: Temperament,
        color: &'static str,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id,
            name,
            temperament,
            color,
            x,
            y,
            need: None,
            deadline: None,
            satisfied: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, CAT_SIZE, CAT_SIZE)
    }

    /// Idle and unsatisfied: eligible for a new request.
    pub fn is_available(&self) -> bool {
        self.need.is_none() && !self.satisfied
    }

    pub fn clear_need(&mut self) {
        self.need = None;
        self.deadline = None;
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub kind: Need,
    pub x: f64,
    pub y: f64,
    pub home_x: f64,
    pub home_y: f64,
    pub dragging: bool,
}

impl Item {
    fn new(kind: Need, x: f64, y: f64) -> Self {
        Self {
            kind,
            x,
            y,
            home_x: x,
            home_y: y,
            dragging: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ITEM_SIZE, ITEM_SIZE)
    }

    /// Every drop ends with the item back at its tray position.
    pub fn snap_home(&mut self) {
        self.x = self.home_x;
        self.y = self.home_y;
        self.dragging = false;
    }
}

/// The fixed two-cat roster at its starting positions.
pub fn spawn_cats() -> Vec<Cat> {
    vec![
        Cat::new("misa", "Misa", Temperament::Gentle, "#666666", 50.0, 380.0),
        Cat::new("pars", "Pars", Temperament::Bossy, "#DAA520", 150.0, 500.0),
    ]
}

/// Food and water bowls on the tray at the bottom of the room.
pub fn spawn_items() -> Vec<Item> {
    vec![
        Item::new(Need::Food, 40.0, 620.0),
        Item::new(Need::Water, 120.0, 620.0),
    ]
}

/// Pick a new resting spot for a cat, preferring spots farther than
/// `min_separation` from every other cat and different from where the cat
/// already sits. When no spot qualifies the constraints relax in order:
/// occasional visual overlap beats never relocating.
pub fn next_spot(
    rng: &mut Lcg,
    current: (f64, f64),
    others: &[(f64, f64)],
    min_separation: f64,
) -> (f64, f64) {
    let far_enough = |sx: f64, sy: f64| {
        others
            .iter()
            .all(|&(ox, oy)| ((sx - ox).powi(2) + (sy - oy).powi(2)).sqrt() > min_separation)
    };
    let clear: Vec<(f64, f64)> = REST_SPOTS
        .iter()
        .copied()
        .filter(|&(sx, sy)| (sx, sy) != current && far_enough(sx, sy))
        .collect();
    if !clear.is_empty() {
        return clear[rng.pick(clear.len())];
    }
    let moved: Vec<(f64, f64)> = REST_SPOTS
        .iter()
        .copied()
        .filter(|&s| s != current)
        .collect();
    if !moved.is_empty() {
        return moved[rng.pick(moved.len())];
    }
    REST_SPOTS[rng.pick(REST_SPOTS.len())]
}
