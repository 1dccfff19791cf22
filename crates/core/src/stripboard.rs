//! Stripboard scheduling: bucket grouping, strip moves, day remapping.
//!
//! A stripboard is an ordered list of strips, each referencing one scene.
//! Strips are displayed partitioned into an "unscheduled" bucket plus one
//! bucket per shoot day (ascending). Moving a strip up/down walks the
//! flattened order, crossing bucket boundaries by reassigning the scene's
//! shoot day.
//!
//! Everything here is pure: functions take a snapshot of strips and scene
//! shoot days and return the mutations to persist ([`MoveOutcome`],
//! [`SceneDayChange`], [`OrderUpdate`]). The API layer applies them in a
//! single transaction, so a failed write leaves no partial state.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// One strip as seen by the scheduler: its identity, the scene it points to,
/// and its sort key within whatever bucket it currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripRef {
    pub strip_id: DbId,
    pub scene_id: DbId,
    pub sort_order: f64,
}

/// Scene shoot-day lookup: `scene_id -> Some(day)` (scheduled) or `None`
/// (unscheduled). Strips whose scene id is absent from the map reference a
/// deleted scene and are silently excluded from grouping.
pub type ShootDayMap = HashMap<DbId, Option<NaiveDate>>;

/// A display bucket: the unscheduled pool, or one shoot day.
///
/// The derived `Ord` puts `Unscheduled` before every `Day`, and days in
/// ascending date order, which is exactly the flattened display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bucket {
    Unscheduled,
    Day(NaiveDate),
}

impl Bucket {
    /// The shoot day this bucket assigns to scenes landing in it.
    pub fn shoot_day(self) -> Option<NaiveDate> {
        match self {
            Bucket::Unscheduled => None,
            Bucket::Day(d) => Some(d),
        }
    }
}

/// One bucket and its strips, sorted by ascending `sort_order`.
#[derive(Debug, Clone, Serialize)]
pub struct BucketGroup {
    pub bucket: Bucket,
    pub strips: Vec<StripRef>,
}

/// The full grouped projection of a stripboard.
///
/// `buckets[0]` is always the unscheduled bucket; day buckets follow in
/// ascending date order. Day buckets exist for every candidate day even when
/// empty, so explicitly planned shooting days always render.
#[derive(Debug, Clone, Serialize)]
pub struct Grouping {
    pub buckets: Vec<BucketGroup>,
}

impl Grouping {
    /// Locate a strip, returning `(bucket_index, index_within_bucket)`.
    fn position_of(&self, strip_id: DbId) -> Option<(usize, usize)> {
        self.buckets.iter().enumerate().find_map(|(b, group)| {
            group
                .strips
                .iter()
                .position(|s| s.strip_id == strip_id)
                .map(|i| (b, i))
        })
    }
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Partition strips into the unscheduled bucket plus per-day buckets.
///
/// Candidate days are the union of the board's explicit shooting days and
/// every scene's non-null shoot day. Strips referencing a missing scene are
/// excluded (display policy, not an error). Within each bucket strips sort
/// by ascending `sort_order`, with `strip_id` as a deterministic tiebreak.
pub fn group(strips: &[StripRef], shoot_days: &ShootDayMap, board_days: &[NaiveDate]) -> Grouping {
    let mut days: BTreeSet<NaiveDate> = board_days.iter().copied().collect();
    days.extend(shoot_days.values().flatten().copied());

    let mut buckets: Vec<BucketGroup> = std::iter::once(Bucket::Unscheduled)
        .chain(days.into_iter().map(Bucket::Day))
        .map(|bucket| BucketGroup {
            bucket,
            strips: Vec::new(),
        })
        .collect();

    for strip in strips {
        let Some(day) = shoot_days.get(&strip.scene_id) else {
            continue; // scene deleted elsewhere
        };
        let target = match day {
            None => Bucket::Unscheduled,
            Some(d) => Bucket::Day(*d),
        };
        // Candidate days include all scene days, so the bucket always exists.
        if let Some(group) = buckets.iter_mut().find(|g| g.bucket == target) {
            group.strips.push(*strip);
        }
    }

    for group in &mut buckets {
        group.strips.sort_by(|a, b| {
            a.sort_order
                .partial_cmp(&b.sort_order)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.strip_id.cmp(&b.strip_id))
        });
    }

    Grouping { buckets }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// Direction of a single-step strip move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A new sort order for one strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderUpdate {
    pub strip_id: DbId,
    pub sort_order: f64,
}

/// The persistable result of a move.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MoveOutcome {
    /// The strip was already at the relevant end of the flattened order.
    NoOp,
    /// Same-bucket move: the two strips exchange sort orders.
    Swapped { first: OrderUpdate, second: OrderUpdate },
    /// Cross-bucket move: the strip gets a new order and its scene a new
    /// shoot day (`None` when moving up into the unscheduled pool).
    Rebucketed {
        order: OrderUpdate,
        scene_id: DbId,
        shoot_day: Option<NaiveDate>,
    },
}

/// Move one strip a single position up or down in the flattened order.
///
/// Within a bucket this swaps sort orders with the adjacent strip. At a
/// bucket boundary the strip slides into the adjacent bucket: moving up it
/// lands *last* in the previous bucket (order = bucket max + 1), moving down
/// it lands *first* in the next bucket (order = bucket min - 1); an empty
/// destination bucket assigns the sentinel order `0.0`.
///
/// Moving up from the top of the unscheduled bucket, or down from the bottom
/// of the last day bucket, is a no-op.
pub fn move_strip(
    strips: &[StripRef],
    shoot_days: &ShootDayMap,
    board_days: &[NaiveDate],
    strip_id: DbId,
    direction: Direction,
) -> Result<MoveOutcome, CoreError> {
    let grouping = group(strips, shoot_days, board_days);
    let (bucket_idx, strip_idx) =
        grouping
            .position_of(strip_id)
            .ok_or(CoreError::NotFound {
                entity: "Strip",
                id: strip_id,
            })?;

    let bucket = &grouping.buckets[bucket_idx];
    let strip = bucket.strips[strip_idx];

    let neighbor_idx = match direction {
        Direction::Up => strip_idx.checked_sub(1),
        Direction::Down => (strip_idx + 1 < bucket.strips.len()).then_some(strip_idx + 1),
    };

    // Same-bucket move: swap orders with the adjacent strip.
    if let Some(n) = neighbor_idx {
        let neighbor = bucket.strips[n];
        return Ok(MoveOutcome::Swapped {
            first: OrderUpdate {
                strip_id: strip.strip_id,
                sort_order: neighbor.sort_order,
            },
            second: OrderUpdate {
                strip_id: neighbor.strip_id,
                sort_order: strip.sort_order,
            },
        });
    }

    // Bucket boundary: find the adjacent bucket, if any.
    let dest_idx = match direction {
        Direction::Up => bucket_idx.checked_sub(1),
        Direction::Down => (bucket_idx + 1 < grouping.buckets.len()).then_some(bucket_idx + 1),
    };
    let Some(dest_idx) = dest_idx else {
        return Ok(MoveOutcome::NoOp);
    };

    let dest = &grouping.buckets[dest_idx];
    let sort_order = match direction {
        // Land at the bottom (end) of the previous bucket.
        Direction::Up => dest.strips.last().map(|s| s.sort_order + 1.0),
        // Land at the top (start) of the next bucket.
        Direction::Down => dest.strips.first().map(|s| s.sort_order - 1.0),
    }
    .unwrap_or(0.0);

    Ok(MoveOutcome::Rebucketed {
        order: OrderUpdate {
            strip_id: strip.strip_id,
            sort_order,
        },
        scene_id: strip.scene_id,
        shoot_day: dest.bucket.shoot_day(),
    })
}

// ---------------------------------------------------------------------------
// Day-range remap
// ---------------------------------------------------------------------------

/// A scene whose shoot day must be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneDayChange {
    pub scene_id: DbId,
    pub shoot_day: Option<NaiveDate>,
}

/// Remap scenes onto a replacement day range by positional correspondence.
///
/// Existing distinct days sort ascending, new days sort ascending; old day
/// at index *i* maps to new day at index *i*. Old days beyond the new
/// range's length map to `None` (their scenes become unscheduled). Only
/// scenes whose mapped day differs from their current day are returned, so
/// unchanged scenes incur no write.
pub fn remap_days(
    scene_days: &[(DbId, Option<NaiveDate>)],
    new_days: &[NaiveDate],
) -> Vec<SceneDayChange> {
    let old_days: BTreeSet<NaiveDate> = scene_days.iter().filter_map(|(_, d)| *d).collect();
    let new_days: Vec<NaiveDate> = new_days
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mapping: HashMap<NaiveDate, Option<NaiveDate>> = old_days
        .into_iter()
        .enumerate()
        .map(|(i, old)| (old, new_days.get(i).copied()))
        .collect();

    scene_days
        .iter()
        .filter_map(|(scene_id, day)| {
            let old = (*day)?;
            let mapped = mapping.get(&old).copied().flatten();
            (mapped != Some(old)).then_some(SceneDayChange {
                scene_id: *scene_id,
                shoot_day: mapped,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Order normalization
// ---------------------------------------------------------------------------

/// Reassign contiguous sort orders (0.0, 1.0, 2.0, ...) per bucket.
///
/// Boundary moves extend orders by one unit past the bucket extremes and
/// never renormalize, so long-lived boards drift toward large magnitudes.
/// Run on full-board saves to bound that drift. Only strips whose order
/// actually changes are returned.
pub fn normalize_orders(
    strips: &[StripRef],
    shoot_days: &ShootDayMap,
    board_days: &[NaiveDate],
) -> Vec<OrderUpdate> {
    let grouping = group(strips, shoot_days, board_days);
    let mut updates = Vec::new();
    for bucket in &grouping.buckets {
        for (i, strip) in bucket.strips.iter().enumerate() {
            let target = i as f64;
            if strip.sort_order != target {
                updates.push(OrderUpdate {
                    strip_id: strip.strip_id,
                    sort_order: target,
                });
            }
        }
    }
    updates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn strip(strip_id: DbId, scene_id: DbId, sort_order: f64) -> StripRef {
        StripRef {
            strip_id,
            scene_id,
            sort_order,
        }
    }

    /// Apply a move outcome back onto the snapshot, as the API layer would.
    fn apply(outcome: &MoveOutcome, strips: &mut [StripRef], shoot_days: &mut ShootDayMap) {
        let mut set_order = |u: &OrderUpdate| {
            for s in strips.iter_mut() {
                if s.strip_id == u.strip_id {
                    s.sort_order = u.sort_order;
                }
            }
        };
        match outcome {
            MoveOutcome::NoOp => {}
            MoveOutcome::Swapped { first, second } => {
                set_order(first);
                set_order(second);
            }
            MoveOutcome::Rebucketed {
                order,
                scene_id,
                shoot_day,
            } => {
                set_order(order);
                shoot_days.insert(*scene_id, *shoot_day);
            }
        }
    }

    fn bucket_ids(grouping: &Grouping, idx: usize) -> Vec<DbId> {
        grouping.buckets[idx].strips.iter().map(|s| s.strip_id).collect()
    }

    // -- grouping ------------------------------------------------------------

    #[test]
    fn partition_is_total_and_disjoint() {
        let strips = vec![
            strip(1, 101, 0.0),
            strip(2, 102, 1.0),
            strip(3, 103, 0.0),
            strip(4, 104, 2.0),
            strip(5, 999, 0.0), // missing scene
        ];
        let mut days = ShootDayMap::new();
        days.insert(101, None);
        days.insert(102, Some(day("2024-01-02")));
        days.insert(103, Some(day("2024-01-01")));
        days.insert(104, None);

        let grouping = group(&strips, &days, &[]);

        let mut seen: Vec<DbId> = grouping
            .buckets
            .iter()
            .flat_map(|b| b.strips.iter().map(|s| s.strip_id))
            .collect();
        seen.sort_unstable();
        // Every strip with a resolvable scene appears exactly once; the
        // missing-scene strip is excluded.
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn unscheduled_first_then_days_ascending() {
        let strips = vec![strip(1, 101, 0.0), strip(2, 102, 0.0), strip(3, 103, 0.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, Some(day("2024-03-05")));
        days.insert(102, None);
        days.insert(103, Some(day("2024-03-01")));

        let grouping = group(&strips, &days, &[]);
        let buckets: Vec<Bucket> = grouping.buckets.iter().map(|b| b.bucket).collect();
        assert_eq!(
            buckets,
            vec![
                Bucket::Unscheduled,
                Bucket::Day(day("2024-03-01")),
                Bucket::Day(day("2024-03-05")),
            ]
        );
    }

    #[test]
    fn board_days_create_empty_buckets() {
        let strips = vec![strip(1, 101, 0.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, None);

        let grouping = group(&strips, &days, &[day("2024-06-01"), day("2024-06-02")]);
        assert_eq!(grouping.buckets.len(), 3);
        assert!(grouping.buckets[1].strips.is_empty());
        assert!(grouping.buckets[2].strips.is_empty());
    }

    #[test]
    fn buckets_sorted_by_order_within() {
        let strips = vec![strip(1, 101, 5.0), strip(2, 102, -1.0), strip(3, 103, 2.0)];
        let mut days = ShootDayMap::new();
        for id in [101, 102, 103] {
            days.insert(id, None);
        }
        let grouping = group(&strips, &days, &[]);
        assert_eq!(bucket_ids(&grouping, 0), vec![2, 3, 1]);
    }

    // -- same-bucket moves ---------------------------------------------------

    #[test]
    fn move_up_swaps_with_previous() {
        // Scenario: 3 unscheduled strips, orders [0,1,2]; move middle one up.
        let mut strips = vec![strip(1, 101, 0.0), strip(2, 102, 1.0), strip(3, 103, 2.0)];
        let mut days = ShootDayMap::new();
        for id in [101, 102, 103] {
            days.insert(id, None);
        }

        let outcome = move_strip(&strips, &days, &[], 2, Direction::Up).unwrap();
        assert_matches!(outcome, MoveOutcome::Swapped { .. });
        apply(&outcome, &mut strips, &mut days);

        let grouping = group(&strips, &days, &[]);
        assert_eq!(bucket_ids(&grouping, 0), vec![2, 1, 3]);
        // All three remain unscheduled.
        assert!(days.values().all(|d| d.is_none()));
    }

    #[test]
    fn up_then_down_restores_order() {
        let original = vec![strip(1, 101, 0.0), strip(2, 102, 1.0), strip(3, 103, 2.0)];
        let mut strips = original.clone();
        let mut days = ShootDayMap::new();
        for id in [101, 102, 103] {
            days.insert(id, None);
        }

        let up = move_strip(&strips, &days, &[], 2, Direction::Up).unwrap();
        apply(&up, &mut strips, &mut days);
        let down = move_strip(&strips, &days, &[], 2, Direction::Down).unwrap();
        apply(&down, &mut strips, &mut days);

        let before = group(&original, &days, &[]);
        let after = group(&strips, &days, &[]);
        assert_eq!(bucket_ids(&before, 0), bucket_ids(&after, 0));
    }

    // -- boundary no-ops -----------------------------------------------------

    #[test]
    fn up_from_top_of_unscheduled_is_noop() {
        let strips = vec![strip(1, 101, 0.0), strip(2, 102, 1.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, None);
        days.insert(102, None);

        let outcome = move_strip(&strips, &days, &[], 1, Direction::Up).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
    }

    #[test]
    fn down_with_no_day_buckets_is_noop() {
        // Scenario: bottom of unscheduled, no days exist yet.
        let strips = vec![strip(1, 101, 0.0), strip(2, 102, 1.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, None);
        days.insert(102, None);

        let outcome = move_strip(&strips, &days, &[], 2, Direction::Down).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
    }

    #[test]
    fn down_from_bottom_of_last_day_is_noop() {
        let strips = vec![strip(1, 101, 0.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, Some(day("2024-01-02")));

        let outcome = move_strip(&strips, &days, &[], 1, Direction::Down).unwrap();
        assert_eq!(outcome, MoveOutcome::NoOp);
    }

    // -- cross-bucket moves --------------------------------------------------

    #[test]
    fn down_across_boundary_lands_first_in_next_bucket() {
        // Scenario: bottom of 2024-01-01; next day holds orders [5,6].
        let strips = vec![strip(1, 101, 3.0), strip(2, 102, 5.0), strip(3, 103, 6.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, Some(day("2024-01-01")));
        days.insert(102, Some(day("2024-01-02")));
        days.insert(103, Some(day("2024-01-02")));

        let outcome = move_strip(&strips, &days, &[], 1, Direction::Down).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Rebucketed {
                order: OrderUpdate {
                    strip_id: 1,
                    sort_order: 4.0,
                },
                scene_id: 101,
                shoot_day: Some(day("2024-01-02")),
            }
        );

        let mut strips = strips;
        let mut days = days;
        apply(&outcome, &mut strips, &mut days);
        let grouping = group(&strips, &days, &[]);
        // 01-01 has no scenes left, so only unscheduled + 01-02 remain, and
        // the moved strip is first in the 01-02 bucket.
        assert_eq!(grouping.buckets.len(), 2);
        assert_eq!(bucket_ids(&grouping, 1), vec![1, 2, 3]);
    }

    #[test]
    fn up_across_boundary_lands_last_in_previous_bucket() {
        let strips = vec![strip(1, 101, 0.0), strip(2, 102, 1.0), strip(3, 103, 0.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, None);
        days.insert(102, None);
        days.insert(103, Some(day("2024-01-01")));

        // Strip 3 is at the top of its day bucket; moving up clears its day
        // and lands it last among the unscheduled strips (order max + 1 = 2).
        let outcome = move_strip(&strips, &days, &[], 3, Direction::Up).unwrap();
        assert_matches!(
            outcome,
            MoveOutcome::Rebucketed {
                scene_id: 103,
                shoot_day: None,
                ..
            }
        );

        let mut strips = strips;
        let mut days = days;
        apply(&outcome, &mut strips, &mut days);
        let grouping = group(&strips, &days, &[]);
        assert_eq!(bucket_ids(&grouping, 0), vec![1, 2, 3]);
    }

    #[test]
    fn empty_destination_bucket_gets_sentinel_order() {
        let strips = vec![strip(1, 101, 7.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, Some(day("2024-01-01")));

        // Board plans a second day nobody is scheduled on yet.
        let board_days = vec![day("2024-01-01"), day("2024-01-02")];
        let outcome = move_strip(&strips, &days, &board_days, 1, Direction::Down).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Rebucketed {
                order: OrderUpdate {
                    strip_id: 1,
                    sort_order: 0.0,
                },
                scene_id: 101,
                shoot_day: Some(day("2024-01-02")),
            }
        );
    }

    #[test]
    fn cross_bucket_move_preserves_strict_bucket_order() {
        let mut strips = vec![
            strip(1, 101, 0.0),
            strip(2, 102, 1.0),
            strip(3, 103, 0.0),
            strip(4, 104, 1.0),
        ];
        let mut days = ShootDayMap::new();
        days.insert(101, None);
        days.insert(102, None);
        days.insert(103, Some(day("2024-01-01")));
        days.insert(104, Some(day("2024-01-01")));

        // Bottom of unscheduled moves down into the day bucket.
        let outcome = move_strip(&strips, &days, &[], 2, Direction::Down).unwrap();
        apply(&outcome, &mut strips, &mut days);

        let grouping = group(&strips, &days, &[]);
        for bucket in &grouping.buckets {
            for pair in bucket.strips.windows(2) {
                assert!(
                    pair[0].sort_order < pair[1].sort_order,
                    "orders must stay strictly increasing in {:?}",
                    bucket.bucket
                );
            }
        }
    }

    #[test]
    fn moving_unknown_strip_is_not_found() {
        let strips = vec![strip(1, 101, 0.0)];
        let mut days = ShootDayMap::new();
        days.insert(101, None);

        let err = move_strip(&strips, &days, &[], 42, Direction::Up).unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "Strip", id: 42 });
    }

    // -- day remap -----------------------------------------------------------

    #[test]
    fn remap_is_index_positional() {
        let d1 = day("2024-01-01");
        let d2 = day("2024-01-02");
        let d3 = day("2024-01-03");
        let n1 = day("2024-02-10");
        let n2 = day("2024-02-11");

        let scene_days = vec![
            (101, Some(d1)),
            (102, Some(d2)),
            (103, Some(d3)),
            (104, None),
        ];
        let changes = remap_days(&scene_days, &[n2, n1]); // unsorted input

        assert_eq!(
            changes,
            vec![
                SceneDayChange {
                    scene_id: 101,
                    shoot_day: Some(n1),
                },
                SceneDayChange {
                    scene_id: 102,
                    shoot_day: Some(n2),
                },
                SceneDayChange {
                    scene_id: 103,
                    shoot_day: None,
                },
            ]
        );
    }

    #[test]
    fn remap_elides_unchanged_scenes() {
        let d1 = day("2024-01-01");
        let d2 = day("2024-01-02");
        let n2 = day("2024-02-11");

        // d1 maps to itself; only the d2 scene needs a write.
        let scene_days = vec![(101, Some(d1)), (102, Some(d2))];
        let changes = remap_days(&scene_days, &[d1, n2]);

        assert_eq!(
            changes,
            vec![SceneDayChange {
                scene_id: 102,
                shoot_day: Some(n2),
            }]
        );
    }

    #[test]
    fn remap_with_no_scheduled_scenes_changes_nothing() {
        let scene_days = vec![(101, None), (102, None)];
        assert!(remap_days(&scene_days, &[day("2024-05-01")]).is_empty());
    }

    // -- normalization -------------------------------------------------------

    #[test]
    fn normalize_reassigns_contiguous_orders_per_bucket() {
        let strips = vec![
            strip(1, 101, -3.0),
            strip(2, 102, 17.5),
            strip(3, 103, 4.0),
            strip(4, 104, 9.0),
        ];
        let mut days = ShootDayMap::new();
        days.insert(101, None);
        days.insert(102, None);
        days.insert(103, Some(day("2024-01-01")));
        days.insert(104, Some(day("2024-01-01")));

        let updates = normalize_orders(&strips, &days, &[]);
        let expected = vec![
            OrderUpdate {
                strip_id: 1,
                sort_order: 0.0,
            },
            OrderUpdate {
                strip_id: 2,
                sort_order: 1.0,
            },
            OrderUpdate {
                strip_id: 3,
                sort_order: 0.0,
            },
            OrderUpdate {
                strip_id: 4,
                sort_order: 1.0,
            },
        ];
        assert_eq!(updates, expected);
    }

    #[test]
    fn normalize_skips_already_contiguous_strips() {
        let strips = vec![strip(1, 101, 0.0), strip(2, 102, 1.0), strip(3, 103, 5.0)];
        let mut days = ShootDayMap::new();
        for id in [101, 102, 103] {
            days.insert(id, None);
        }
        let updates = normalize_orders(&strips, &days, &[]);
        assert_eq!(
            updates,
            vec![OrderUpdate {
                strip_id: 3,
                sort_order: 2.0,
            }]
        );
    }
}
