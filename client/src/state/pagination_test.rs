use super::*;

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn items(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

// =============================================================
// total_pages
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(10, size(8)), 2);
    assert_eq!(total_pages(16, size(8)), 2);
    assert_eq!(total_pages(17, size(8)), 3);
}

#[test]
fn total_pages_is_zero_for_empty_list() {
    assert_eq!(total_pages(0, size(8)), 0);
}

#[test]
fn total_pages_matches_ceiling_for_small_grid() {
    for len in 0..40 {
        for per_page in 1..10 {
            let expected = (len + per_page - 1) / per_page;
            assert_eq!(total_pages(len, size(per_page)), expected, "len={len} per_page={per_page}");
        }
    }
}

#[test]
fn default_page_size_is_eight() {
    assert_eq!(DEFAULT_PRODUCTS_PER_PAGE.get(), 8);
    assert_eq!(Paginator::default().page_size().get(), 8);
}

// =============================================================
// page_slice
// =============================================================

#[test]
fn ten_items_split_into_eight_and_two() {
    let list = items(10);
    assert_eq!(page_slice(&list, 1, size(8)), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(page_slice(&list, 2, size(8)), &[9, 10]);
}

#[test]
fn valid_pages_have_expected_length_and_contents() {
    for len in 1..30 {
        for per_page in 1..7 {
            let list = items(len);
            let total = total_pages(len, size(per_page));
            for page in 1..=total {
                let slice = page_slice(&list, page, size(per_page));
                let start = (page - 1) * per_page;
                let expected_len = per_page.min(len - start);
                assert_eq!(slice.len(), expected_len);
                assert_eq!(slice, &list[start..start + expected_len]);
            }
        }
    }
}

#[test]
fn page_past_end_is_empty() {
    let list = items(10);
    assert!(page_slice(&list, 3, size(8)).is_empty());
    assert!(page_slice(&list, usize::MAX, size(8)).is_empty());
}

#[test]
fn page_zero_is_empty() {
    let list = items(10);
    assert!(page_slice(&list, 0, size(8)).is_empty());
}

#[test]
fn page_bounds_clips_to_count() {
    assert_eq!(page_bounds(2, size(8), 10), 8..10);
    assert_eq!(page_bounds(4, size(8), 10), 10..10);
}

// =============================================================
// clamp_page
// =============================================================

#[test]
fn clamp_page_keeps_valid_page() {
    assert_eq!(clamp_page(2, 3), 2);
}

#[test]
fn clamp_page_pulls_back_past_end() {
    assert_eq!(clamp_page(5, 3), 3);
}

#[test]
fn clamp_page_lifts_zero_to_first() {
    assert_eq!(clamp_page(0, 3), 1);
}

#[test]
fn clamp_page_with_no_pages_is_first() {
    assert_eq!(clamp_page(4, 0), 1);
}

// =============================================================
// Paginator
// =============================================================

#[test]
fn paginator_starts_on_first_page() {
    assert_eq!(Paginator::new(size(4)).current_page(), 1);
}

#[test]
fn paginator_set_page_is_unvalidated() {
    let mut paginator = Paginator::new(size(8));
    paginator.set_page(9);
    assert_eq!(paginator.current_page(), 9);
    assert!(paginator.visible(&items(10)).is_empty());
}

#[test]
fn paginator_visible_follows_current_page() {
    let list = items(10);
    let mut paginator = Paginator::new(size(8));
    assert_eq!(paginator.visible(&list).len(), 8);
    paginator.set_page(2);
    assert_eq!(paginator.visible(&list), &[9, 10]);
}

#[test]
fn paginator_clamp_to_moves_page_when_list_shrinks() {
    let mut paginator = Paginator::new(size(8));
    paginator.set_page(3);
    assert!(paginator.clamp_to(10));
    assert_eq!(paginator.current_page(), 2);
    assert!(!paginator.clamp_to(10));
}

#[test]
fn paginator_clamp_to_empty_list_returns_to_first() {
    let mut paginator = Paginator::new(size(8));
    paginator.set_page(2);
    assert!(paginator.clamp_to(0));
    assert_eq!(paginator.current_page(), 1);
}

// =============================================================
// controls
// =============================================================

#[test]
fn controls_absent_for_empty_list() {
    assert_eq!(Paginator::new(size(8)).controls(0), None);
}

#[test]
fn controls_absent_when_list_fits_one_page() {
    assert_eq!(Paginator::new(size(8)).controls(8), None);
}

#[test]
fn controls_present_iff_more_than_one_page() {
    for len in 0..30 {
        let paginator = Paginator::new(size(5));
        assert_eq!(paginator.controls(len).is_some(), paginator.total_pages(len) > 1, "len={len}");
    }
}

#[test]
fn controls_on_first_page_disable_previous_only() {
    let controls = Paginator::new(size(8)).controls(10).unwrap();
    assert!(controls.previous_disabled);
    assert!(!controls.next_disabled);
}

#[test]
fn controls_on_last_page_disable_next_only() {
    let mut paginator = Paginator::new(size(8));
    paginator.set_page(2);
    let controls = paginator.controls(10).unwrap();
    assert!(!controls.previous_disabled);
    assert!(controls.next_disabled);
}

#[test]
fn controls_on_middle_page_enable_both() {
    let mut paginator = Paginator::new(size(4));
    paginator.set_page(2);
    let controls = paginator.controls(10).unwrap();
    assert!(!controls.previous_disabled);
    assert!(!controls.next_disabled);
}

#[test]
fn controls_list_every_page_and_highlight_current() {
    let mut paginator = Paginator::new(size(4));
    paginator.set_page(3);
    let controls = paginator.controls(10).unwrap();
    assert_eq!(
        controls.pages,
        vec![
            PageButton { number: 1, active: false },
            PageButton { number: 2, active: false },
            PageButton { number: 3, active: true },
        ]
    );
}
