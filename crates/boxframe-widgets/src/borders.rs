#![forbid(unsafe_code)]

//! Border edge selection and glyph sets.

use bitflags::bitflags;

bitflags! {
    /// Which edges of the frame to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        /// Top edge.
        const TOP = 0b0001;
        /// Right edge.
        const RIGHT = 0b0010;
        /// Bottom edge.
        const BOTTOM = 0b0100;
        /// Left edge.
        const LEFT = 0b1000;
        /// All four edges.
        const ALL = Self::TOP.bits() | Self::RIGHT.bits() | Self::BOTTOM.bits() | Self::LEFT.bits();
    }
}

/// The glyphs used to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal edge.
    pub horizontal: char,
    /// Vertical edge.
    pub vertical: char,
}

impl BorderSet {
    /// Double-line box drawing (`╔═╗`), the classic terminal frame.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Single-line box drawing (`┌─┐`).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Plain ASCII (`+-+`) for hosts without box-drawing glyphs.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Frame glyph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Double-line box drawing.
    #[default]
    Double,
    /// Single-line box drawing.
    Square,
    /// ASCII fallback.
    Ascii,
}

impl BorderType {
    /// The glyph set for this style.
    pub const fn to_border_set(self) -> BorderSet {
        match self {
            Self::Double => BorderSet::DOUBLE,
            Self::Square => BorderSet::SQUARE,
            Self::Ascii => BorderSet::ASCII,
        }
    }
}
