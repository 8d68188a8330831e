// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and sprite palettes.

use alloc::vec::Vec;

/// An 8-bit-per-channel color with straight (non-premultiplied) alpha.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha; `255` is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Composite `self` over `dst` (source-over).
    pub fn over(self, dst: Self) -> Self {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }
        let sa = u32::from(self.a);
        let da = u32::from(dst.a) * (255 - sa) / 255;
        let out_a = sa + da;
        let channel = |s: u8, d: u8| -> u8 {
            let v = (u32::from(s) * sa + u32::from(d) * da) / out_a;
            // Weighted mean of two u8 values.
            u8::try_from(v).unwrap_or(u8::MAX)
        };
        Self {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: u8::try_from(out_a).unwrap_or(u8::MAX),
        }
    }

    /// Add `self` onto `dst`, clamping each channel (the "lighter" operator).
    pub fn lighter(self, dst: Self) -> Self {
        let sa = u16::from(self.a);
        let add = |s: u8, d: u8| -> u8 {
            let weighted = u16::from(s) * sa / 255;
            u8::try_from(weighted + u16::from(d)).unwrap_or(u8::MAX)
        };
        Self {
            r: add(self.r, dst.r),
            g: add(self.g, dst.g),
            b: add(self.b, dst.b),
            a: self.a.saturating_add(dst.a),
        }
    }
}

/// Maps bitmap cell values to colors.
///
/// An entry of `None` is transparent. By convention index `0` is transparent, so
/// a zero-initialized bitmap draws nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Option<Rgba8>>,
}

impl Palette {
    /// Create a palette from explicit entries.
    pub fn new(entries: Vec<Option<Rgba8>>) -> Self {
        Self { entries }
    }

    /// Create a palette whose index `0` is transparent and whose indices `1..`
    /// map to `colors` in order.
    pub fn with_transparent_zero(colors: impl IntoIterator<Item = Rgba8>) -> Self {
        let mut entries = Vec::from([None]);
        entries.extend(colors.into_iter().map(Some));
        Self { entries }
    }

    /// Color for `index`; `None` if transparent or out of range.
    pub fn get(&self, index: u8) -> Option<Rgba8> {
        self.entries.get(usize::from(index)).copied().flatten()
    }

    /// Number of entries, including transparent ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn palette_zero_is_transparent() {
        let p = Palette::with_transparent_zero([Rgba8::WHITE, Rgba8::rgb(9, 8, 7)]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.get(0), None);
        assert_eq!(p.get(1), Some(Rgba8::WHITE));
        assert_eq!(p.get(2), Some(Rgba8::rgb(9, 8, 7)));
        assert_eq!(p.get(3), None);
    }

    #[test]
    fn explicit_entries_may_hole() {
        let p = Palette::new(vec![Some(Rgba8::BLACK), None, Some(Rgba8::WHITE)]);
        assert_eq!(p.get(0), Some(Rgba8::BLACK));
        assert_eq!(p.get(1), None);
    }

    #[test]
    fn lighter_adds_and_clamps() {
        let a = Rgba8::rgb(200, 10, 0);
        let b = Rgba8::rgb(100, 20, 0);
        assert_eq!(a.lighter(b), Rgba8::rgb(255, 30, 0));
        assert_eq!(a.lighter(Rgba8::BLACK), a);
    }

    #[test]
    fn over_respects_alpha() {
        let red = Rgba8::rgb(255, 0, 0);
        assert_eq!(red.over(Rgba8::WHITE), red);
        assert_eq!(Rgba8::TRANSPARENT.over(Rgba8::WHITE), Rgba8::WHITE);
        let half_black = Rgba8::new(0, 0, 0, 128);
        let mixed = half_black.over(Rgba8::WHITE);
        assert_eq!(mixed.a, 255);
        assert!(mixed.r > 120 && mixed.r < 135, "got {mixed:?}");
    }
}
