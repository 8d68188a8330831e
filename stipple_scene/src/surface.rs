// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface boundary and a command-recording surface.

use alloc::vec::Vec;

use stipple_region::Point;

use crate::color::Rgba8;

/// How a layer's colors combine with what is already on the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Source-over: the layer's color is painted on top.
    #[default]
    Normal,
    /// Additive: the layer's color is added to the surface, clamping each channel.
    Lighter,
}

impl BlendMode {
    /// Combine `src` onto `dst` under this mode.
    pub fn blend(self, src: Rgba8, dst: Rgba8) -> Rgba8 {
        match self {
            Self::Normal => src.over(dst),
            Self::Lighter => src.lighter(dst),
        }
    }
}

/// A pixel sink the [`Scene`](crate::Scene) paints into.
///
/// The scene selects a blend mode before painting each layer and then issues one
/// [`fill_pixel`](Self::fill_pixel) per changed, non-transparent pixel of that layer.
/// Pixels a layer resolves to transparent get no call; under either blend mode the
/// result equals filling them with [`Rgba8::TRANSPARENT`].
pub trait Surface {
    /// Select the blend mode for subsequent fills.
    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Combine `color` into the pixel at `p` under the current blend mode.
    fn fill_pixel(&mut self, p: Point, color: Rgba8);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_blend_mode(&mut self, mode: BlendMode) {
        (**self).set_blend_mode(mode);
    }

    fn fill_pixel(&mut self, p: Point, color: Rgba8) {
        (**self).fill_pixel(p, color);
    }
}

/// A call received by a [`RecordingSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceCommand {
    /// [`Surface::set_blend_mode`].
    SetBlendMode(BlendMode),
    /// [`Surface::fill_pixel`].
    Fill(Point, Rgba8),
}

/// A surface that records every call, in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands received so far.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Points of all fill commands, in order.
    pub fn filled_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match c {
            SurfaceCommand::Fill(p, _) => Some(*p),
            SurfaceCommand::SetBlendMode(_) => None,
        })
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<SurfaceCommand> {
        core::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.commands.push(SurfaceCommand::SetBlendMode(mode));
    }

    fn fill_pixel(&mut self, p: Point, color: Rgba8) {
        self.commands.push(SurfaceCommand::Fill(p, color));
    }
}
