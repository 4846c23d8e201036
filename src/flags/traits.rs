// Standard library
use std::fmt::Debug;
use std::hash::Hash;

/// A member of a closed set of capabilities that can be collected into a
/// [`FlagSet`](super::types::FlagSet).
pub trait Flag: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// What kind of flag this is, used in parse errors.
    const KIND: &'static str;

    /// Position of the member inside the set. Must be below 8.
    fn index(self) -> u8;

    /// Canonical display name.
    fn name(self) -> &'static str;

    /// Extra spellings accepted when parsing, compared case-insensitively.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
}
