//! CRC validation utilities for superframe streams.
//!
//! Provides the two fixed CRC-16 algorithms used by the superframe layer:
//! the CCITT checksum protecting access units and the fire code protecting
//! superframe synchronization.
//!
//! Note: the fire code is used here purely for sync detection, not for
//! burst error correction.

/// CRC algorithm specification with polynomial, initial value and final XOR.
pub struct Algorithm<T> {
    poly: T,
    init: T,
    xorout: T,
}

/// CRC-16/CCITT algorithm for access unit validation.
pub const CRC_CCITT_ALG: Algorithm<u16> = Algorithm {
    poly: 0x1021,
    init: 0xFFFF,
    xorout: 0xFFFF,
};

/// Fire code algorithm for superframe sync detection.
pub const CRC_FIRE_CODE_ALG: Algorithm<u16> = Algorithm {
    poly: 0x782F,
    init: 0x0000,
    xorout: 0x0000,
};

/// Computes one CRC-16 table step using the specified polynomial.
#[inline(always)]
pub const fn crc16(poly: u16, mut value: u16, len: usize) -> u16 {
    value <<= 8;

    let mut i = 0;
    while i < len {
        value = (value << 1) ^ (((value >> 15) & 1) * poly);
        i += 1;
    }

    value
}

#[inline(always)]
const fn crc16_table(poly: u16) -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < table.len() {
        table[i] = crc16(poly, i as u16, 8);
        i += 1;
    }

    table
}

#[derive(Debug)]
pub struct Crc16 {
    pub poly: u16,
    pub init: u16,
    pub xorout: u16,
    table: [u16; 256],
}

impl Crc16 {
    pub const fn new(algorithm: &Algorithm<u16>) -> Self {
        Self {
            poly: algorithm.poly,
            init: algorithm.init,
            xorout: algorithm.xorout,
            table: crc16_table(algorithm.poly),
        }
    }

    const fn table_entry(&self, index: u16) -> u16 {
        self.table[(index & 0xFF) as usize]
    }

    #[inline(always)]
    pub const fn update(&self, mut crc: u16, bytes: &[u8]) -> u16 {
        let mut i = 0;

        while i < bytes.len() {
            crc = (crc << 8) ^ self.table_entry((crc >> 8) ^ bytes[i] as u16);
            i += 1;
        }

        crc
    }

    /// Full checksum over `bytes`, including initial value and final XOR.
    #[inline(always)]
    pub const fn checksum(&self, bytes: &[u8]) -> u16 {
        self.update(self.init, bytes) ^ self.xorout
    }
}

#[test]
fn ccitt_check_value() {
    let crc = Crc16::new(&CRC_CCITT_ALG);
    assert_eq!(crc.checksum(b"123456789"), 0xD64E);
}

#[test]
fn ccitt_detects_bit_flip() {
    let crc = Crc16::new(&CRC_CCITT_ALG);
    let mut data = *b"123456789";
    let reference = crc.checksum(&data);

    data[4] ^= 0x01;
    assert_ne!(crc.checksum(&data), reference);
}

#[test]
fn fire_code_zero_preserving() {
    // Zero init, zero final XOR: an all-zero message checksums to zero.
    let crc = Crc16::new(&CRC_FIRE_CODE_ALG);
    assert_eq!(crc.checksum(&[0u8; 9]), 0x0000);
    assert_ne!(crc.checksum(&[0x40, 0, 0, 0x12, 0xC0, 0, 0, 0, 0]), 0x0000);
}
