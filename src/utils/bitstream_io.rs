//! Bitstream I/O utilities for superframe header parsing.
//!
//! Thin wrapper over `bitstream_io` providing big-endian bit reads over a
//! byte slice, used for the format byte and the packed 12-bit access unit
//! offset fields.

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader, UnsignedInteger};

#[derive(Debug)]
pub struct BsIoSliceReader<'a> {
    bs: BitReader<io::Cursor<&'a [u8]>, BigEndian>,
}

impl<'a> BsIoSliceReader<'a> {
    pub fn from_slice(buf: &'a [u8]) -> Self {
        Self {
            bs: BitReader::new(io::Cursor::new(buf)),
        }
    }

    #[inline(always)]
    pub fn get(&mut self) -> io::Result<bool> {
        self.bs.read_bit()
    }

    #[inline(always)]
    pub fn get_n<I: UnsignedInteger>(&mut self, n: u32) -> io::Result<I> {
        self.bs.read_unsigned_var(n)
    }

    #[inline(always)]
    pub fn skip_n(&mut self, n: u32) -> io::Result<()> {
        self.bs.skip(n)
    }
}

impl Default for BsIoSliceReader<'_> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}

#[test]
fn packed_field_reads() -> anyhow::Result<()> {
    // 0x12C and 0x226 packed as consecutive 12-bit big-endian fields.
    let buf = [0x12, 0xC2, 0x26];
    let mut reader = BsIoSliceReader::from_slice(&buf);

    assert_eq!(reader.get_n::<u16>(12)?, 0x12C);
    assert_eq!(reader.get_n::<u16>(12)?, 0x226);
    // exactly 24 bits in the slice
    assert!(reader.get().is_err());
    Ok(())
}
