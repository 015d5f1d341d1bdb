// SPDX-License-Identifier: MPL-2.0
//! Stacking layout of the toast list.

use super::toast::Toast;

/// Recomputes index, front/visible flags, offset and z-index of every toast.
///
/// `toasts` is ordered front to back. Removed toasts keep their last layout
/// but still count toward the z-index of the toasts behind them.
pub(crate) fn refresh(toasts: &mut [Toast], gap: f32, visible_toasts: usize) {
    let len = toasts.len();
    let mut heights_before = 0.0;
    let mut removed = 0;

    for (position, toast) in toasts.iter_mut().enumerate() {
        if toast.removed {
            removed += 1;
            continue;
        }
        let index = position - removed;
        toast.index = index;
        toast.front = index == 0;
        toast.visible = index < visible_toasts;
        toast.offset = gap * index as f32 + heights_before;
        toast.z_index = len - position;
        heights_before += toast.initial_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toaster::ShowOptions;

    fn toast(id: &str, height: f32) -> Toast {
        let mut toast = Toast::new(id.into(), id.to_string(), ShowOptions::default());
        toast.initial_height = height;
        toast
    }

    #[test]
    fn offsets_accumulate_heights_and_gaps() {
        let mut toasts = vec![toast("a", 50.0), toast("b", 60.0), toast("c", 70.0)];
        refresh(&mut toasts, 14.0, 3);

        let offsets: Vec<f32> = toasts.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0.0, 64.0, 138.0]);
        let z: Vec<usize> = toasts.iter().map(|t| t.z_index).collect();
        assert_eq!(z, vec![3, 2, 1]);
    }

    #[test]
    fn removed_toasts_are_skipped() {
        let mut toasts = vec![toast("a", 50.0), toast("b", 60.0), toast("c", 70.0)];
        toasts[0].removed = true;
        refresh(&mut toasts, 14.0, 3);

        assert_eq!(toasts[1].index, 0);
        assert!(toasts[1].front);
        assert_eq!(toasts[1].offset, 0.0);
        assert_eq!(toasts[2].index, 1);
        assert_eq!(toasts[2].offset, 74.0);
        // Removed entries still count for z-index.
        assert_eq!(toasts[1].z_index, 2);
    }

    #[test]
    fn only_the_first_toasts_are_visible() {
        let mut toasts: Vec<Toast> = (0..5).map(|i| toast(&i.to_string(), 40.0)).collect();
        refresh(&mut toasts, 14.0, 3);

        let visible: Vec<bool> = toasts.iter().map(|t| t.visible).collect();
        assert_eq!(visible, vec![true, true, true, false, false]);
        assert_eq!(toasts.iter().filter(|t| t.front).count(), 1);
    }
}
