use geo::{BoundingRect, Coord, Rect};
use serde::Serialize;
use thiserror::Error;

use crate::hierarchy::Level;
use crate::map::{Feature, FeatureSet};

use super::selection::{Pick, Selection};

/// The selection matched no boundable geometry, so there is nothing to fit
/// the viewport to. Callers recover by falling back to a wider subset or by
/// leaving the viewport where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("selection matches no features; nothing to bound")]
pub struct EmptySubsetError;

/// Dropdown options for `level` under the current selection.
///
/// The universe is restricted by every concrete pick strictly above `level`
/// (equality on the derived level values); the result is the distinct,
/// present values at `level`, sorted ascending, with the "all" sentinel
/// prepended. Deterministic for a given (features, selection) pair.
pub fn options_for(level: Level, features: &FeatureSet, selection: &Selection) -> Vec<String> {
    let mut values: Vec<&str> = features
        .iter()
        .filter(|feature| matches_above(feature, selection, level))
        .filter_map(|feature| feature.levels.get(level))
        .collect();
    values.sort_unstable();
    values.dedup();

    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(Pick::ALL.to_string());
    options.extend(values.into_iter().map(str::to_string));
    options
}

/// True when `feature` satisfies every concrete pick broader than `level`.
fn matches_above(feature: &Feature, selection: &Selection, level: Level) -> bool {
    Level::order()
        .into_iter()
        .take_while(|broader| *broader != level)
        .all(|broader| match selection.get(broader) {
            Pick::All => true,
            Pick::Only(value) => feature.levels.get(broader) == Some(value.as_str()),
        })
}

/// The features the current selection narrows down to, with their combined
/// bounding box.
///
/// The narrowest concrete pick wins: analyst, else desk, else unit, else
/// the whole collection. Fails with [`EmptySubsetError`] when the subset
/// contains no boundable geometry.
pub fn resolve_active_subset<'a>(
    features: &'a FeatureSet,
    selection: &Selection,
) -> Result<(Vec<&'a Feature>, Rect<f64>), EmptySubsetError> {
    let subset: Vec<&Feature> = match selection.most_specific() {
        Some((level, value)) => features
            .iter()
            .filter(|feature| feature.levels.get(level) == Some(value))
            .collect(),
        None => features.iter().collect(),
    };

    let bounds = subset
        .iter()
        .filter_map(|feature| feature.geometry.bounding_rect())
        .reduce(merge)
        .ok_or(EmptySubsetError)?;

    Ok((subset, bounds))
}

fn merge(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

/// Viewport parameters a map widget consumes to recenter itself: the bbox
/// midpoint and the south-west / north-east corners as (lat, lon) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

impl FitView {
    pub fn from_bounds(bounds: Rect<f64>) -> Self {
        let (min, max) = (bounds.min(), bounds.max());
        Self {
            center_lat: (min.y + max.y) / 2.0,
            center_lon: (min.x + max.x) / 2.0,
            south_west: [min.y, min.x],
            north_east: [max.y, max.x],
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::{LineString, MultiPolygon, Polygon};

    use super::*;
    use crate::hierarchy::HierarchyCode;
    use crate::map::StyleHints;

    fn square(x: f64, y: f64) -> MultiPolygon<f64> {
        Polygon::new(
            LineString::from(vec![(x, y), (x + 1.0, y), (x + 1.0, y + 1.0), (x, y + 1.0), (x, y)]),
            vec![],
        )
        .into()
    }

    fn feat(code: &str, x: f64, y: f64) -> Feature {
        Feature::new(HierarchyCode::new(code), square(x, y), StyleHints::default())
    }

    fn fixture() -> FeatureSet {
        FeatureSet::new(vec![
            feat("A-1-a", 0.0, 0.0),
            feat("A-1-b", 2.0, 0.0),
            feat("A-2-c", 4.0, 0.0),
            feat("B-1-d", 0.0, 4.0),
            feat("B", 2.0, 4.0),
        ])
    }

    fn selection(unit: &str, desk: &str, analyst: &str) -> Selection {
        Selection {
            unit: Pick::parse(unit),
            desk: Pick::parse(desk),
            analyst: Pick::parse(analyst),
        }
    }

    fn codes<'a>(subset: &[&'a Feature]) -> Vec<&'a str> {
        subset.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn unit_options_ignore_the_selection() {
        let features = fixture();
        let options = options_for(Level::Unit, &features, &selection("B", "all", "all"));
        assert_eq!(options, vec!["all", "A", "B"]);
    }

    #[test]
    fn desk_options_cascade_from_the_unit_pick() {
        let features = fixture();
        let options = options_for(Level::Desk, &features, &selection("A", "all", "all"));
        assert_eq!(options, vec!["all", "A-1", "A-2"]);

        let options = options_for(Level::Desk, &features, &selection("all", "all", "all"));
        assert_eq!(options, vec!["all", "A-1", "A-2", "B-1"]);
    }

    #[test]
    fn analyst_options_cascade_from_unit_and_desk() {
        let features = fixture();
        let options = options_for(Level::Analyst, &features, &selection("A", "A-1", "all"));
        assert_eq!(options, vec!["all", "A-1-a", "A-1-b"]);
    }

    #[test]
    fn options_are_deduplicated_and_skip_absent_values() {
        let features = FeatureSet::new(vec![
            feat("A-1-a", 0.0, 0.0),
            feat("A-1-b", 2.0, 0.0),
            feat("A", 4.0, 0.0), // no desk value
        ]);
        let options = options_for(Level::Desk, &features, &Selection::default());
        assert_eq!(options, vec!["all", "A-1"]);
    }

    #[test]
    fn options_always_lead_with_the_sentinel() {
        let features = fixture();
        for level in Level::order() {
            let options = options_for(level, &features, &Selection::default());
            assert_eq!(options.first().map(String::as_str), Some("all"));
            let mut deduped = options.clone();
            deduped.dedup();
            assert_eq!(options, deduped);
        }
        // Even over an empty collection.
        let options = options_for(Level::Unit, &FeatureSet::default(), &Selection::default());
        assert_eq!(options, vec!["all"]);
    }

    #[test]
    fn no_selection_resolves_to_everything() {
        let features = fixture();
        let (subset, bounds) = resolve_active_subset(&features, &Selection::default()).unwrap();
        assert_eq!(subset.len(), features.len());
        assert_eq!(bounds.min(), Coord { x: 0.0, y: 0.0 });
        assert_eq!(bounds.max(), Coord { x: 5.0, y: 5.0 });
    }

    #[test]
    fn narrowest_concrete_pick_wins() {
        let features = fixture();

        let (subset, _) = resolve_active_subset(&features, &selection("A", "all", "all")).unwrap();
        assert_eq!(codes(&subset), vec!["A-1-a", "A-1-b", "A-2-c"]);

        let (subset, _) = resolve_active_subset(&features, &selection("A", "A-1", "all")).unwrap();
        assert_eq!(codes(&subset), vec!["A-1-a", "A-1-b"]);

        let (subset, bounds) =
            resolve_active_subset(&features, &selection("A", "A-1", "A-1-b")).unwrap();
        assert_eq!(codes(&subset), vec!["A-1-b"]);
        assert_eq!(bounds.min(), Coord { x: 2.0, y: 0.0 });
        assert_eq!(bounds.max(), Coord { x: 3.0, y: 1.0 });
    }

    #[test]
    fn resolution_is_idempotent() {
        let features = fixture();
        let sel = selection("A", "A-1", "all");
        let (first_subset, first_bounds) = resolve_active_subset(&features, &sel).unwrap();
        let (second_subset, second_bounds) = resolve_active_subset(&features, &sel).unwrap();
        assert_eq!(codes(&first_subset), codes(&second_subset));
        assert_eq!(first_bounds, second_bounds);
    }

    #[test]
    fn analyst_subset_is_within_its_desk_subset() {
        let features = fixture();
        let (desk_subset, _) =
            resolve_active_subset(&features, &selection("A", "A-1", "all")).unwrap();
        let (analyst_subset, _) =
            resolve_active_subset(&features, &selection("A", "A-1", "A-1-a")).unwrap();

        let desk_codes = codes(&desk_subset);
        for code in codes(&analyst_subset) {
            assert!(desk_codes.contains(&code));
        }
        assert!(analyst_subset.len() <= desk_subset.len());
    }

    #[test]
    fn empty_subset_is_an_error() {
        let features = fixture();
        assert_eq!(
            resolve_active_subset(&features, &selection("Z", "all", "all")).unwrap_err(),
            EmptySubsetError
        );
        assert_eq!(
            resolve_active_subset(&FeatureSet::default(), &Selection::default()).unwrap_err(),
            EmptySubsetError
        );
    }

    #[test]
    fn bounds_merge_across_disjoint_geometries() {
        let features = FeatureSet::new(vec![feat("A-1-a", 0.0, 0.0), feat("A-1-b", 10.0, -3.0)]);
        let (_, bounds) = resolve_active_subset(&features, &selection("A", "all", "all")).unwrap();
        assert_eq!(bounds.min(), Coord { x: 0.0, y: -3.0 });
        assert_eq!(bounds.max(), Coord { x: 11.0, y: 1.0 });
    }

    #[test]
    fn fit_view_centers_on_the_bbox_midpoint() {
        let bounds = Rect::new(Coord { x: -4.0, y: 2.0 }, Coord { x: 6.0, y: 8.0 });
        let view = FitView::from_bounds(bounds);
        assert_eq!(view.center_lon, 1.0);
        assert_eq!(view.center_lat, 5.0);
        assert_eq!(view.south_west, [2.0, -4.0]);
        assert_eq!(view.north_east, [8.0, 6.0]);
    }
}
