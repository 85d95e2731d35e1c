//! Coordinate spaces for reporting drag location and velocity.
//!
//! The gesture reports locations in a caller-chosen space. Hosts that already
//! have a conversion service implement [`CoordinateSpaceConverter`] directly;
//! otherwise [`CoordinateSpaces`] maps named spaces to frames in global
//! coordinates and [`PointerSnapshot`] converts through it.

use sheetdrag_ui_graphics::{Point, Rect};
use std::borrow::Cow;
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CoordinateSpace {
    /// Window/screen coordinates, as pointer events are delivered.
    #[default]
    Global,
    /// A space registered by name, e.g. the sheet being dragged.
    Named(Cow<'static, str>),
}

impl CoordinateSpace {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        CoordinateSpace::Named(name.into())
    }
}

/// Maps the current pointer location and velocity into a coordinate space.
pub trait CoordinateSpaceConverter {
    fn location(&self, space: &CoordinateSpace) -> Point;

    /// `None` when the host has no velocity estimate.
    fn velocity(&self, space: &CoordinateSpace) -> Option<Point>;
}

/// Registry of named coordinate spaces, keyed to frames in global space.
#[derive(Clone, Debug, Default)]
pub struct CoordinateSpaces {
    frames: HashMap<Cow<'static, str>, Rect>,
}

impl CoordinateSpaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_space(mut self, name: impl Into<Cow<'static, str>>, frame: Rect) -> Self {
        self.insert(name, frame);
        self
    }

    /// Registers or moves a named space.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, frame: Rect) {
        self.frames.insert(name.into(), frame);
    }

    pub fn remove(&mut self, name: &str) -> Option<Rect> {
        self.frames.remove(name)
    }

    pub fn frame(&self, name: &str) -> Option<Rect> {
        self.frames.get(name).copied()
    }

    /// Converts a global point into `space`. Unknown names fall back to
    /// global coordinates.
    pub fn convert_point(&self, point: Point, space: &CoordinateSpace) -> Point {
        match space {
            CoordinateSpace::Global => point,
            CoordinateSpace::Named(name) => match self.frame(name) {
                Some(frame) => point - frame.origin(),
                None => {
                    log::warn!("unknown coordinate space '{name}', reporting global coordinates");
                    point
                }
            },
        }
    }
}

/// Pointer state at one event, convertible through a [`CoordinateSpaces`].
#[derive(Clone, Copy, Debug)]
pub struct PointerSnapshot<'a> {
    pub position: Point,
    pub velocity: Option<Point>,
    pub spaces: &'a CoordinateSpaces,
}

impl CoordinateSpaceConverter for PointerSnapshot<'_> {
    fn location(&self, space: &CoordinateSpace) -> Point {
        self.spaces.convert_point(self.position, space)
    }

    // Spaces are pure translations, so velocity is the same in all of them.
    fn velocity(&self, _space: &CoordinateSpace) -> Option<Point> {
        self.velocity
    }
}
