// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1.1
//
//   15  14..11  10   9    8    7   6..4  3..0
//  +--+-------+----+----+----+----+----+-------+
//  |QR| OPCODE| AA | TC | RD | RA | Z  | RCODE |
//  +--+-------+----+----+----+----+----+-------+

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FlagField {
    Rcode,
    Z,
    Ra,
    Rd,
    Tc,
    Aa,
    Opcode,
    Qr,
}

impl FlagField {
    pub const ALL: [FlagField; 8] = [
        FlagField::Rcode,
        FlagField::Z,
        FlagField::Ra,
        FlagField::Rd,
        FlagField::Tc,
        FlagField::Aa,
        FlagField::Opcode,
        FlagField::Qr,
    ];

    /// Bit position of the field's least significant bit.
    pub const fn offset(self) -> u16 {
        match self {
            FlagField::Rcode => 0,
            FlagField::Z => 4,
            FlagField::Ra => 7,
            FlagField::Rd => 8,
            FlagField::Tc => 9,
            FlagField::Aa => 10,
            FlagField::Opcode => 11,
            FlagField::Qr => 15,
        }
    }

    pub const fn width(self) -> u16 {
        match self {
            FlagField::Rcode | FlagField::Opcode => 4,
            FlagField::Z => 3,
            _ => 1,
        }
    }

    pub const fn max_value(self) -> u16 {
        (1 << self.width()) - 1
    }

    const fn mask(self) -> u16 {
        self.max_value() << self.offset()
    }
}

pub const OPCODE_QUERY: u16 = 0;
pub const OPCODE_INVERSE: u16 = 1;
pub const OPCODE_STATUS: u16 = 2;
pub const RCODE_NO_ERROR: u16 = 0;

/// The 16-bit flags word of a DNS header.
///
/// `set` clears the field's bits before writing, so fields can be written in
/// any order and any number of times. Values wider than the field are
/// truncated to its width.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn get(&self, field: FlagField) -> u16 {
        (self.0 & field.mask()) >> field.offset()
    }

    pub fn set(&mut self, field: FlagField, value: u16) {
        self.0 = (self.0 & !field.mask()) | ((value << field.offset()) & field.mask());
    }

    pub fn with(mut self, field: FlagField, value: u16) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_response(&self) -> bool {
        self.get(FlagField::Qr) == 1
    }
    pub fn opcode(&self) -> u16 {
        self.get(FlagField::Opcode)
    }
    pub fn authoritative(&self) -> bool {
        self.get(FlagField::Aa) == 1
    }
    pub fn truncated(&self) -> bool {
        self.get(FlagField::Tc) == 1
    }
    pub fn recursion_desired(&self) -> bool {
        self.get(FlagField::Rd) == 1
    }
    pub fn recursion_available(&self) -> bool {
        self.get(FlagField::Ra) == 1
    }
    pub fn rcode(&self) -> u16 {
        self.get(FlagField::Rcode)
    }

    pub fn set_recursion_desired(&mut self, value: bool) {
        self.set(FlagField::Rd, value as u16);
    }
}

impl From<u16> for HeaderFlags {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<HeaderFlags> for u16 {
    fn from(value: HeaderFlags) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_all_fields_at_max_pack_to_ffff() {
        let mut flags = HeaderFlags::default();
        for field in FlagField::ALL {
            flags.set(field, field.max_value());
        }

        assert_eq!(flags.bits(), 0xFFFF);
        for field in FlagField::ALL {
            assert_eq!(flags.get(field), field.max_value(), "{:?}", field);
        }
    }

    #[test]
    fn test_widths_cover_word() {
        let total: u16 = FlagField::ALL.iter().map(|f| f.width()).sum();
        let union = FlagField::ALL.iter().fold(0u16, |acc, f| {
            assert_eq!(acc & f.mask(), 0, "{:?} overlaps", f);
            acc | f.mask()
        });

        assert_eq!(total, 16);
        assert_eq!(union, 0xFFFF);
    }

    #[test]
    fn test_every_value_round_trips() {
        for field in FlagField::ALL {
            for value in 0..=field.max_value() {
                let flags = HeaderFlags::default().with(field, value);
                assert_eq!(flags.get(field), value);
            }
        }
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let mut flags = HeaderFlags::default();
        flags.set(FlagField::Opcode, 0b1111);
        flags.set(FlagField::Opcode, OPCODE_STATUS);
        assert_eq!(flags.opcode(), OPCODE_STATUS);

        flags.set_recursion_desired(true);
        flags.set_recursion_desired(false);
        assert!(!flags.recursion_desired());
        assert_eq!(flags.bits(), OPCODE_STATUS << 11);
    }

    #[test]
    fn test_opcode_positions() {
        for (opcode, bits) in [
            (OPCODE_QUERY, 0x0000),
            (OPCODE_INVERSE, 0x0800),
            (OPCODE_STATUS, 0x1000),
        ] {
            let flags = HeaderFlags::default().with(FlagField::Opcode, opcode);
            assert_eq!(flags.bits(), bits);
            assert_eq!(HeaderFlags::from_bits(bits).opcode(), opcode);
        }
    }

    #[test]
    fn test_oversized_value_is_truncated() {
        let flags = HeaderFlags::default().with(FlagField::Z, 0xFF);
        assert_eq!(flags.get(FlagField::Z), 7);
        assert_eq!(flags.bits(), 0b0000_0000_0111_0000);
    }

    #[test]
    fn test_response_flags() {
        // Standard recursive response: QR, RD, RA set.
        let flags = HeaderFlags::from(0x8180);
        assert!(flags.is_response());
        assert_eq!(flags.opcode(), OPCODE_QUERY);
        assert!(!flags.authoritative());
        assert!(!flags.truncated());
        assert!(flags.recursion_desired());
        assert!(flags.recursion_available());
        assert_eq!(flags.rcode(), RCODE_NO_ERROR);
    }

    proptest! {
        #[test]
        fn setting_one_field_leaves_others(start in any::<u16>(), idx in 0usize..8, value in any::<u16>()) {
            let field = FlagField::ALL[idx];
            let before = HeaderFlags::from_bits(start);
            let after = before.with(field, value);

            prop_assert_eq!(after.get(field), value & field.max_value());
            for other in FlagField::ALL.into_iter().filter(|f| *f != field) {
                prop_assert_eq!(after.get(other), before.get(other));
            }
        }

        #[test]
        fn set_is_idempotent(start in any::<u16>(), idx in 0usize..8, value in any::<u16>()) {
            let field = FlagField::ALL[idx];
            let once = HeaderFlags::from_bits(start).with(field, value);
            prop_assert_eq!(once.with(field, value), once);
        }
    }
}
