//! Two-pass target-to-window matching.

use tilewindows_common::{LiveWindow, Target};
use tracing::{debug, warn};

use super::types::{Assignment, MatchKind, Pairing};

/// Match saved targets of one application to its live windows.
///
/// Targets are visited in stored order twice. The first pass honours index
/// hints: a target with `index: n` takes the standard window enumerated as
/// `n` if nothing has claimed it yet. The second pass hands every target
/// still pending the first unclaimed standard window in ascending index
/// order. Targets left over become gaps.
///
/// Non-standard windows are never handed out. A live window is claimed at
/// most once. The result depends only on the order and content of the
/// inputs, so re-running on the same snapshot gives the same answer.
pub fn assign(targets: &[Target], live: &[LiveWindow]) -> Assignment {
    let mut windows: Vec<&LiveWindow> = live.iter().collect();
    windows.sort_by_key(|w| w.index);
    let before = windows.len();
    windows.dedup_by_key(|w| w.index);
    if windows.len() != before {
        warn!(
            dropped = before - windows.len(),
            "duplicate enumeration indexes in window snapshot"
        );
    }

    let mut used = vec![false; windows.len()];
    let mut claimed: Vec<Option<(u32, MatchKind)>> = vec![None; targets.len()];

    for (pos, target) in targets.iter().enumerate() {
        let Some(hint) = target.index else {
            continue;
        };
        let hit = windows
            .iter()
            .enumerate()
            .find(|(slot, w)| !used[*slot] && w.standard && w.index == hint);
        if let Some((slot, w)) = hit {
            used[slot] = true;
            claimed[pos] = Some((w.index, MatchKind::Index));
        }
    }

    for (pos, target) in targets.iter().enumerate() {
        if claimed[pos].is_some() {
            continue;
        }
        let hit = windows
            .iter()
            .enumerate()
            .find(|(slot, w)| !used[*slot] && w.standard);
        match hit {
            Some((slot, w)) => {
                used[slot] = true;
                claimed[pos] = Some((w.index, MatchKind::Fallback));
            }
            None => debug!(app = %target.app, position = pos, "no window left for target"),
        }
    }

    let mut assignment = Assignment::default();
    for (pos, claim) in claimed.into_iter().enumerate() {
        match claim {
            Some((window, kind)) => {
                debug!(position = pos, window, ?kind, "assigned");
                assignment.pairs.push(Pairing {
                    target: pos,
                    window,
                    kind,
                });
            }
            None => assignment.gaps.push(pos),
        }
    }
    assignment
}
