//! Turning dates and times into text, and back again.

mod iso;
pub(crate) mod pattern;
