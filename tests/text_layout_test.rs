use vignette::materials::font::layout_text;
use vignette::resources::font::{FontAtlas, GLYPH_COUNT, GlyphInfo};

// A hand-built atlas: 'A' and 'B' are visible glyphs, space is zero-sized,
// '@' supplies the line height.
fn test_atlas() -> FontAtlas {
    let mut glyphs = [GlyphInfo::default(); GLYPH_COUNT];
    glyphs[(b'A' - 32) as usize] = GlyphInfo {
        advance_x: 12.0,
        advance_y: 0.0,
        width: 10,
        height: 20,
        left: 1.0,
        top: 20.0,
        uv_x: 0.25,
        uv_y: 0.0,
    };
    glyphs[(b'B' - 32) as usize] = GlyphInfo {
        advance_x: 10.0,
        advance_y: 0.0,
        width: 8,
        height: 20,
        left: 0.0,
        top: 20.0,
        uv_x: 0.5,
        uv_y: 0.0,
    };
    glyphs[0] = GlyphInfo {
        advance_x: 5.0,
        ..Default::default()
    };
    glyphs[(b'@' - 32) as usize] = GlyphInfo {
        advance_x: 22.0,
        width: 20,
        height: 30,
        top: 30.0,
        uv_x: 0.0,
        uv_y: 0.4,
    };
    FontAtlas::from_parts(100, 50, vec![0; 100 * 50], glyphs)
}

#[test]
fn one_quad_per_visible_glyph() {
    let atlas = test_atlas();
    let (vertices, indices) = layout_text(&atlas, "AB", 0.0, 0.0, 1.0, 1.0, 0xffffff);
    assert_eq!(vertices.len(), 8);
    assert_eq!(indices.len(), 12);
    assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
}

#[test]
fn spaces_advance_without_geometry() {
    let atlas = test_atlas();
    let (vertices, _) = layout_text(&atlas, "A A", 0.0, 0.0, 1.0, 1.0, 0xffffff);
    assert_eq!(vertices.len(), 8);
    // Second 'A' starts after one advance of 'A' (12) plus one space (5).
    assert_eq!(vertices[4].position[0], 17.0 + 1.0);
}

#[test]
fn pen_and_bearings_place_the_quad() {
    let atlas = test_atlas();
    let (vertices, _) = layout_text(&atlas, "A", 0.0, 0.0, 1.0, 1.0, 0xffffff);
    // left = pen + bearing, top = baseline + top bearing.
    assert_eq!(vertices[0].position, [1.0, 20.0]);
    assert_eq!(vertices[1].position, [11.0, 20.0]);
    assert_eq!(vertices[2].position, [1.0, 0.0]);
    assert_eq!(vertices[3].position, [11.0, 0.0]);
    // Atlas rectangle normalized against the 100x50 atlas.
    assert_eq!(vertices[0].tex_coords, [0.25, 0.0]);
    assert_eq!(vertices[3].tex_coords, [0.25 + 10.0 / 100.0, 20.0 / 50.0]);
}

#[test]
fn newline_returns_to_origin_and_drops_a_line() {
    let atlas = test_atlas();
    let (vertices, _) = layout_text(&atlas, "A\nA", 0.0, 0.0, 1.0, 1.0, 0xffffff);
    assert_eq!(vertices.len(), 8);
    // Second line restarts at the original x and sits one '@'-height lower.
    assert_eq!(vertices[4].position, [1.0, -30.0 + 20.0]);
}

#[test]
fn scales_apply_to_metrics() {
    let atlas = test_atlas();
    let (vertices, _) = layout_text(&atlas, "A", 0.0, 0.0, 0.5, 0.1, 0xffffff);
    assert_eq!(vertices[0].position, [0.5, 2.0]);
    assert_eq!(vertices[1].position[0], 0.5 + 10.0 * 0.5);
}

#[test]
fn color_unpacks_red_from_the_low_byte() {
    let atlas = test_atlas();
    let (vertices, _) = layout_text(&atlas, "A", 0.0, 0.0, 1.0, 1.0, 0x0000ff);
    assert_eq!(vertices[0].color, [1.0, 0.0, 0.0]);
    let (vertices, _) = layout_text(&atlas, "A", 0.0, 0.0, 1.0, 1.0, 0xff8000);
    assert_eq!(vertices[0].color, [0.0, 128.0 / 255.0, 1.0]);
}

#[test]
fn unknown_characters_are_skipped() {
    let atlas = test_atlas();
    let (vertices, indices) = layout_text(&atlas, "\u{263a}A", 0.0, 0.0, 1.0, 1.0, 0xffffff);
    assert_eq!(vertices.len(), 4);
    assert_eq!(indices.len(), 6);
    // The unknown character must not advance the pen either.
    assert_eq!(vertices[0].position, [1.0, 20.0]);
}
