//! Drop resolution: which cat caught the item, and was it what it asked for.

use crate::game::actors::{Cat, Need};
use crate::game::geometry::Point;

/// Classification of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The cat had an open request matching the item type.
    Correct(usize),
    /// The cat had a different request, or none at all.
    Wrong(usize),
    /// No cat under the drop point.
    Missed,
}

/// First cat (iteration order) whose bounding box contains the drop point.
/// Overlapping cats resolve arbitrarily by roster order; there is no z-order.
pub fn find_target(cats: &[Cat], drop_point: Point) -> Option<usize> {
    cats.iter().position(|cat| cat.rect().contains(drop_point))
}

pub fn classify(cats: &[Cat], drop_point: Point, kind: Need) -> DropOutcome {
    match find_target(cats, drop_point) {
        Some(idx) if cats[idx].need == Some(kind) => DropOutcome::Correct(idx),
        Some(idx) => DropOutcome::Wrong(idx),
        None => DropOutcome::Missed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::actors::spawn_cats;

    fn cats_with_need(need: Option<Need>) -> Vec<Cat> {
        let mut cats = spawn_cats();
        cats[0].need = need;
        cats
    }

    #[test]
    fn matching_need_is_correct() {
        let cats = cats_with_need(Some(Need::Food));
        let inside = Point::new(cats[0].x + 10.0, cats[0].y + 10.0);
        assert_eq!(classify(&cats, inside, Need::Food), DropOutcome::Correct(0));
    }

    #[test]
    fn mismatched_or_absent_need_is_wrong() {
        let cats = cats_with_need(Some(Need::Food));
        let inside = Point::new(cats[0].x + 10.0, cats[0].y + 10.0);
        assert_eq!(classify(&cats, inside, Need::Water), DropOutcome::Wrong(0));
        let idle = cats_with_need(None);
        assert_eq!(classify(&idle, inside, Need::Food), DropOutcome::Wrong(0));
    }

    #[test]
    fn drop_in_empty_space_misses() {
        let cats = spawn_cats();
        assert_eq!(
            classify(&cats, Point::new(399.0, 5.0), Need::Food),
            DropOutcome::Missed
        );
    }

    #[test]
    fn overlapping_cats_resolve_by_roster_order() {
        let mut cats = spawn_cats();
        cats[1].x = cats[0].x;
        cats[1].y = cats[0].y;
        cats[1].need = Some(Need::Food);
        let inside = Point::new(cats[0].x + 5.0, cats[0].y + 5.0);
        // First match wins even though the second cat would have been correct.
        assert_eq!(classify(&cats, inside, Need::Food), DropOutcome::Wrong(0));
    }
}
