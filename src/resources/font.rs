//! Font rasterization and atlas packing.
//!
//! The printable ASCII range is rasterized once with `fontdue` and packed
//! into a single-channel atlas with a greedy shelf packer: glyphs fill a row
//! left to right with a one-pixel gap, and a new row starts whenever the next
//! glyph would cross the maximum width. The packer itself is pure so its
//! invariants are testable without a font or a GPU.

use anyhow::{Result, anyhow};

/// Widest atlas row we produce; conservative enough for small GPUs.
pub const MAX_ATLAS_WIDTH: u32 = 2048;

/// First rasterized code point (space).
pub const FIRST_CHAR: u32 = 32;
/// One past the last rasterized code point.
pub const LAST_CHAR: u32 = 128;

/// Number of glyphs in the rasterized range.
pub const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR) as usize;

/// The result of packing: total atlas size and one top-left offset per input
/// rectangle, in input order.
#[derive(Debug, Clone)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<(u32, u32)>,
}

/// Greedy shelf packing of `sizes` (width, height) rectangles.
///
/// Row height is the maximum glyph height seen in that row; the atlas width
/// is the widest row produced, its height the sum of row heights.
pub fn pack_shelves(sizes: &[(u32, u32)], max_width: u32) -> AtlasLayout {
    let mut width = 0u32;
    let mut height = 0u32;
    let mut row_w = 0u32;
    let mut row_h = 0u32;
    for &(w, h) in sizes {
        if row_w + w + 1 >= max_width {
            width = width.max(row_w);
            height += row_h;
            row_w = 0;
            row_h = 0;
        }
        row_w += w + 1;
        row_h = row_h.max(h);
    }
    let width = width.max(row_w);
    let height = height + row_h;

    let mut placements = Vec::with_capacity(sizes.len());
    let mut offset_x = 0u32;
    let mut offset_y = 0u32;
    let mut row_h = 0u32;
    for &(w, h) in sizes {
        if offset_x + w + 1 >= max_width {
            offset_y += row_h;
            row_h = 0;
            offset_x = 0;
        }
        placements.push((offset_x, offset_y));
        row_h = row_h.max(h);
        offset_x += w + 1;
    }

    AtlasLayout {
        width,
        height,
        placements,
    }
}

/// Placement and metrics of one rasterized glyph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphInfo {
    /// Horizontal pen advance in pixels.
    pub advance_x: f32,
    /// Vertical pen advance in pixels (zero for horizontal scripts).
    pub advance_y: f32,
    /// Bitmap size in pixels.
    pub width: u32,
    pub height: u32,
    /// Bearing from the pen position to the bitmap's left edge.
    pub left: f32,
    /// Bearing from the baseline to the bitmap's top edge.
    pub top: f32,
    /// Normalized atlas coordinates of the bitmap's top-left corner.
    pub uv_x: f32,
    pub uv_y: f32,
}

/// A packed single-channel glyph atlas for ASCII 32..128.
pub struct FontAtlas {
    pub width: u32,
    pub height: u32,
    pub bitmap: Vec<u8>,
    glyphs: [GlyphInfo; GLYPH_COUNT],
}

impl FontAtlas {
    /// Rasterizes a TrueType/OpenType font at `px` pixels and packs it.
    pub fn new(font_bytes: &[u8], px: f32) -> Result<Self> {
        let font = fontdue::Font::from_bytes(font_bytes, fontdue::FontSettings::default())
            .map_err(|e| anyhow!("font load error: {}", e))?;

        let rasterized: Vec<(fontdue::Metrics, Vec<u8>)> = (FIRST_CHAR..LAST_CHAR)
            .map(|c| font.rasterize(char::from_u32(c).unwrap(), px))
            .collect();

        let sizes: Vec<(u32, u32)> = rasterized
            .iter()
            .map(|(m, _)| (m.width as u32, m.height as u32))
            .collect();
        let layout = pack_shelves(&sizes, MAX_ATLAS_WIDTH);

        let width = layout.width.max(1);
        let height = layout.height.max(1);
        let mut bitmap = vec![0u8; (width * height) as usize];
        let mut glyphs = [GlyphInfo::default(); GLYPH_COUNT];

        for (i, ((metrics, pixels), &(x, y))) in
            rasterized.iter().zip(&layout.placements).enumerate()
        {
            for row in 0..metrics.height {
                let src = row * metrics.width;
                let dst = (y as usize + row) * width as usize + x as usize;
                bitmap[dst..dst + metrics.width]
                    .copy_from_slice(&pixels[src..src + metrics.width]);
            }
            glyphs[i] = GlyphInfo {
                advance_x: metrics.advance_width,
                advance_y: metrics.advance_height,
                width: metrics.width as u32,
                height: metrics.height as u32,
                left: metrics.xmin as f32,
                top: (metrics.ymin + metrics.height as i32) as f32,
                uv_x: x as f32 / width as f32,
                uv_y: y as f32 / height as f32,
            };
        }

        Ok(Self {
            width,
            height,
            bitmap,
            glyphs,
        })
    }

    /// Assembles an atlas from pre-rasterized glyphs (one entry per code
    /// point in FIRST_CHAR..LAST_CHAR, in order).
    pub fn from_parts(
        width: u32,
        height: u32,
        bitmap: Vec<u8>,
        glyphs: [GlyphInfo; GLYPH_COUNT],
    ) -> Self {
        debug_assert_eq!(bitmap.len(), (width * height) as usize);
        Self {
            width,
            height,
            bitmap,
            glyphs,
        }
    }

    /// Metrics for a character, if it is in the rasterized range.
    pub fn glyph(&self, c: char) -> Option<&GlyphInfo> {
        let code = c as u32;
        if (FIRST_CHAR..LAST_CHAR).contains(&code) {
            Some(&self.glyphs[(code - FIRST_CHAR) as usize])
        } else {
            None
        }
    }

    /// The line step used when laying out a newline.
    pub fn line_height(&self) -> f32 {
        self.glyphs[('@' as u32 - FIRST_CHAR) as usize].height as f32
    }
}
