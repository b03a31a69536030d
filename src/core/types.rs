//! Core type definitions used throughout the codebase

/// A single face of a six-sided die, 1 through 6.
///
/// Roll targets share this type. Save targets may also hold [`NO_SAVE`].
pub type DieFace = u8;

/// Save value meaning "no save possible": nothing on a d6 reaches it.
pub const NO_SAVE: DieFace = 7;

/// Highest face on the die
pub const MAX_FACE: DieFace = 6;
