pub mod animator;
pub mod language;
pub mod scroll;
pub mod theme;
