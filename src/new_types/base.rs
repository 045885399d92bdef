use std::fmt;

/// One nucleotide. Declaration order is the fixed neighbor order A, T, C, G.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Base {
    A,
    T,
    C,
    G,
}

pub const BASES: [Base; 4] = [Base::A, Base::T, Base::C, Base::G];

impl Base {
    /// decimal digit of the base in the table hash.
    pub fn digit(self) -> u64 {
        match self {
            Base::A => 1,
            Base::T => 5,
            Base::C => 7,
            Base::G => 9,
        }
    }
    pub fn as_u8(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::T => b'T',
            Base::C => b'C',
            Base::G => b'G',
        }
    }
    pub fn as_char(self) -> char {
        self.as_u8() as char
    }
}

impl TryFrom<u8> for Base {
    type Error = u8;

    fn try_from(b: u8) -> Result<Base, u8> {
        match b {
            b'A' => Ok(Base::A),
            b'T' => Ok(Base::T),
            b'C' => Ok(Base::C),
            b'G' => Ok(Base::G),
            other => Err(other),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
