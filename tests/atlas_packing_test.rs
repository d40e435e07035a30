use vignette::resources::font::pack_shelves;

fn overlaps(a: ((u32, u32), (u32, u32)), b: ((u32, u32), (u32, u32))) -> bool {
    let ((ax, ay), (aw, ah)) = a;
    let ((bx, by), (bw, bh)) = b;
    ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
}

#[test]
fn single_row_layout() {
    let sizes = [(10, 20), (5, 10), (8, 15)];
    let layout = pack_shelves(&sizes, 2048);

    // Everything fits in one shelf: x advances by width + 1, y stays 0.
    assert_eq!(layout.placements, vec![(0, 0), (11, 0), (17, 0)]);
    // Row width counts the trailing gap, row height is the tallest glyph.
    assert_eq!(layout.width, 11 + 6 + 9);
    assert_eq!(layout.height, 20);
}

#[test]
fn wraps_to_a_new_shelf() {
    // Second rectangle would cross the max width, so it opens a new row.
    let sizes = [(30, 10), (30, 12), (5, 4)];
    let layout = pack_shelves(&sizes, 40);

    assert_eq!(layout.placements[0], (0, 0));
    assert_eq!(layout.placements[1], (0, 10));
    assert_eq!(layout.placements[2], (31, 10));
    assert_eq!(layout.height, 10 + 12);
}

#[test]
fn placements_stay_in_bounds_and_disjoint() {
    let sizes: Vec<(u32, u32)> = (0..96)
        .map(|i| (3 + (i * 7) % 40, 2 + (i * 13) % 50))
        .collect();
    let layout = pack_shelves(&sizes, 128);

    for (&(w, h), &(x, y)) in sizes.iter().zip(&layout.placements) {
        assert!(x + w <= layout.width, "glyph sticks out horizontally");
        assert!(y + h <= layout.height, "glyph sticks out vertically");
    }

    for i in 0..sizes.len() {
        for j in i + 1..sizes.len() {
            // Empty rectangles cannot overlap anything.
            if sizes[i].0 == 0 || sizes[i].1 == 0 || sizes[j].0 == 0 || sizes[j].1 == 0 {
                continue;
            }
            assert!(
                !overlaps(
                    (layout.placements[i], sizes[i]),
                    (layout.placements[j], sizes[j])
                ),
                "glyphs {} and {} overlap",
                i,
                j
            );
        }
    }
}

#[test]
fn empty_input_packs_to_nothing() {
    let layout = pack_shelves(&[], 2048);
    assert_eq!(layout.width, 0);
    assert_eq!(layout.height, 0);
    assert!(layout.placements.is_empty());
}

#[test]
fn zero_size_glyphs_take_a_gap_only() {
    // Spaces rasterize to 0x0 bitmaps but still occupy a slot.
    let layout = pack_shelves(&[(0, 0), (4, 4)], 2048);
    assert_eq!(layout.placements, vec![(0, 0), (1, 0)]);
    assert_eq!(layout.height, 4);
}
