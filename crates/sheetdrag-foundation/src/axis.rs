use bitflags::bitflags;

/// A scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right scrolling.
    Horizontal,

    /// Up/down scrolling.
    Vertical,
}

bitflags! {
    /// A set of scroll axes, used when locking or unlocking native scrolling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Axes: u8 {
        const HORIZONTAL = 1 << 0;
        const VERTICAL = 1 << 1;
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl From<Axis> for Axes {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Axes::HORIZONTAL,
            Axis::Vertical => Axes::VERTICAL,
        }
    }
}

impl Axes {
    /// Iterates the member axes, horizontal first.
    pub fn axes(self) -> impl Iterator<Item = Axis> {
        [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .filter(move |axis| self.contains((*axis).into()))
    }
}
