//! Typed integer ids for agents and frames.
//!
//! Both are `Copy + Ord + Hash`, so they work as map keys and sort keys.

use std::fmt;

/// Wrap a primitive integer in a named id type.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The id as a `Vec` index.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        /// Prints as `Name(n)`, e.g. `FrameIndex(3)`.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Fails past the inner type's range.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a tracked agent.  Stable across frames and unique within
    /// one frame; it is *not* a slot position.
    pub struct AgentId(u32);
}

typed_id! {
    /// Position of a frame within its dataset (the rug's column).
    pub struct FrameIndex(u32);
}
