// Standard library
use std::fmt;
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

// Current module imports
use super::errors::ParseFlagError;
use super::traits::Flag;
use super::types::{FlagSet, IpVersion, Protocol, SourceId};

impl Flag for Protocol {
    const ALL: &'static [Self] = &[Self::Http, Self::Https, Self::Dns, Self::DnsTxt];
    const KIND: &'static str = "protocol";

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::Http => "HTTP",
            Self::Https => "HTTPS",
            Self::Dns => "DNS",
            Self::DnsTxt => "DNS (TXT)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::DnsTxt => &["dns_txt", "dns-txt", "txt"],
            _ => &[],
        }
    }
}

impl Flag for IpVersion {
    const ALL: &'static [Self] = &[Self::V4, Self::V6];
    const KIND: &'static str = "address family";

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::V4 => "IPv4",
            Self::V6 => "IPv6",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::V4 => &["4", "v4"],
            Self::V6 => &["6", "v6"],
        }
    }
}

impl Flag for SourceId {
    const ALL: &'static [Self] = &[
        Self::Icanhazip,
        Self::IfconfigMe,
        Self::Ipify,
        Self::OpenDns,
        Self::GoogleDnsTxt,
    ];
    const KIND: &'static str = "source";

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        match self {
            Self::Icanhazip => "ICANHAZIP",
            Self::IfconfigMe => "IFCONFIGME",
            Self::Ipify => "IPIFY",
            Self::OpenDns => "OPENDNS",
            Self::GoogleDnsTxt => "GOOGLEDNSTXT",
        }
    }
}

/// Finds the member whose name or alias matches `value`, ignoring case.
pub fn parse_flag<T: Flag>(value: &str) -> Result<T, ParseFlagError> {
    let value = value.trim();
    T::ALL
        .iter()
        .copied()
        .find(|flag| {
            flag.name().eq_ignore_ascii_case(value)
                || flag
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(value))
        })
        .ok_or_else(|| ParseFlagError::Unknown {
            kind: T::KIND,
            value: value.to_string(),
        })
}

impl FromStr for Protocol {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(s)
    }
}

impl FromStr for IpVersion {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(s)
    }
}

impl FromStr for SourceId {
    type Err = ParseFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(s)
    }
}

impl<T: Flag> FlagSet<T> {
    fn mask(flag: T) -> u8 {
        1 << flag.index()
    }

    pub const fn empty() -> Self {
        Self {
            bits: 0,
            marker: PhantomData,
        }
    }

    pub fn all() -> Self {
        T::ALL.iter().copied().collect()
    }

    pub fn only(flag: T) -> Self {
        Self {
            bits: Self::mask(flag),
            marker: PhantomData,
        }
    }

    pub fn insert(&mut self, flag: T) {
        self.bits |= Self::mask(flag);
    }

    pub fn contains(self, flag: T) -> bool {
        self.bits & Self::mask(flag) != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            marker: PhantomData,
        }
    }

    pub fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
            marker: PhantomData,
        }
    }

    /// True when the two sets share at least one member.
    pub fn intersects(self, other: Self) -> bool {
        self.bits & other.bits != 0
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// The only member, if the set holds exactly one.
    pub fn single(self) -> Option<T> {
        let mut members = self.iter();
        match (members.next(), members.next()) {
            (Some(flag), None) => Some(flag),
            _ => None,
        }
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = T> {
        T::ALL.iter().copied().filter(move |flag| self.contains(*flag))
    }
}

impl<T: Flag> Default for FlagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Flag> fmt::Debug for FlagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Flag> From<T> for FlagSet<T> {
    fn from(flag: T) -> Self {
        Self::only(flag)
    }
}

impl<T: Flag> FromIterator<T> for FlagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<T: Flag> BitOr for FlagSet<T> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<T: Flag> BitOrAssign<T> for FlagSet<T> {
    fn bitor_assign(&mut self, rhs: T) {
        self.insert(rhs);
    }
}

impl<T: Flag> BitAnd for FlagSet<T> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

// `Protocol::Http | Protocol::Https` reads like the table it describes.
impl BitOr for Protocol {
    type Output = FlagSet<Protocol>;

    fn bitor(self, rhs: Self) -> FlagSet<Protocol> {
        FlagSet::only(self).union(FlagSet::only(rhs))
    }
}

impl BitOr for IpVersion {
    type Output = FlagSet<IpVersion>;

    fn bitor(self, rhs: Self) -> FlagSet<IpVersion> {
        FlagSet::only(self).union(FlagSet::only(rhs))
    }
}
