use crate::position::{Selection, SelectionDirection, selection_direction};

/// Sort selections, merge overlapping ones and drop duplicates.
///
/// Returns the normalized list and the index of the selection that now holds the old primary's
/// active end.
pub(crate) fn normalize_selections(
    mut selections: Vec<Selection>,
    primary_index: usize,
) -> (Vec<Selection>, usize) {
    let Some(primary_active) = selections
        .get(primary_index)
        .or_else(|| selections.first())
        .map(|s| s.end)
    else {
        return (selections, 0);
    };

    for sel in &mut selections {
        sel.direction = selection_direction(sel.start, sel.end);
    }

    selections.sort_by(|a, b| {
        let (a_min, a_max) = a.min_max();
        let (b_min, b_max) = b.min_max();
        a_min
            .cmp(&b_min)
            .then_with(|| a_max.cmp(&b_max))
            .then_with(|| a.end.cmp(&b.end))
    });

    // Touching selections stay separate; only true overlaps merge.
    let mut merged: Vec<Selection> = Vec::with_capacity(selections.len());
    for sel in selections {
        let Some(last) = merged.last_mut() else {
            merged.push(sel);
            continue;
        };

        let (last_min, last_max) = last.min_max();
        let (sel_min, sel_max) = sel.min_max();

        if sel_min == last_min && sel_max == last_max {
            continue;
        }
        if sel_min < last_max {
            *last = Selection {
                start: last_min.min(sel_min),
                end: last_max.max(sel_max),
                direction: SelectionDirection::Forward,
            };
        } else {
            merged.push(sel);
        }
    }

    let new_primary_index = merged
        .iter()
        .position(|s| s.contains_inclusive(primary_active))
        .unwrap_or_else(|| merged.len().saturating_sub(1));

    (merged, new_primary_index)
}
