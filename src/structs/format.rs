//! Superframe format and header structures.
//!
//! ## Header Layout
//!
//! Bytes 0..2 carry the fire code word protecting the 9 header bytes that
//! follow. Byte 2 is the format byte; the access unit offset table is
//! packed as consecutive 12-bit big-endian fields from byte 3 onward.
//!
//! ## Audio Configurations
//!
//! | `dac_rate` | `sbr_flag` | AUs | first AU offset |
//! |------------|------------|-----|-----------------|
//! | 0          | 0          | 4   | 8               |
//! | 0          | 1          | 2   | 5               |
//! | 1          | 0          | 6   | 11              |
//! | 1          | 1          | 3   | 6               |

use anyhow::{Result, bail};

use crate::process::rs::{CODEWORD_LEN, DATA_LEN};
use crate::utils::bitstream_io::BsIoSliceReader;
use crate::utils::crc::Crc16;
use crate::utils::errors::SyncError;

/// Maximum number of access units per superframe.
pub const MAX_AUS: usize = 6;

/// Audio format information from the superframe format byte.
///
/// Changes only when the raw format byte changes; drives access unit
/// count, offset table geometry and codec (re)initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuperframeFormat {
    /// Core sample rate selector: 48 kHz when set, 32 kHz otherwise.
    pub dac_rate: bool,

    /// Spectral band replication in use (HE-AAC family).
    pub sbr_flag: bool,

    /// Two-channel AAC transport.
    pub aac_channel_mode: bool,

    /// Parametric stereo in use (HE-AAC v2, implies `sbr_flag`).
    pub ps_flag: bool,

    /// MPEG Surround configuration: 0 = none, 1 = 5.1, 2 = 7.1.
    pub mpeg_surround_config: u8,
}

impl SuperframeFormat {
    fn read(reader: &mut BsIoSliceReader) -> Result<Self> {
        // rfa
        reader.skip_n(1)?;

        Ok(Self {
            dac_rate: reader.get()?,
            sbr_flag: reader.get()?,
            aac_channel_mode: reader.get()?,
            ps_flag: reader.get()?,
            mpeg_surround_config: reader.get_n(3)?,
        })
    }

    /// Number of access units carried by a superframe in this format.
    pub fn num_aus(&self) -> usize {
        match (self.dac_rate, self.sbr_flag) {
            (false, false) => 4,
            (false, true) => 2,
            (true, false) => 6,
            (true, true) => 3,
        }
    }

    /// Fixed start offset of the first access unit (the header length).
    pub fn first_au_start(&self) -> usize {
        match (self.dac_rate, self.sbr_flag) {
            (false, false) => 8,
            (false, true) => 5,
            (true, false) => 11,
            (true, true) => 6,
        }
    }

    /// Core AAC sample rate in Hz (before any SBR upsampling).
    pub fn sample_rate(&self) -> u32 {
        if self.dac_rate { 48000 } else { 32000 }
    }

    /// Decoded output channel count.
    pub fn channels(&self) -> u8 {
        if self.aac_channel_mode || self.ps_flag {
            2
        } else {
            1
        }
    }

    /// AAC channel configuration for the audio specific config.
    ///
    /// Parametric stereo is intentionally excluded here: it is signalled
    /// implicitly and decoders derive stereo output on their own.
    pub fn aac_channel_config(&self) -> u8 {
        match self.mpeg_surround_config {
            1 => 6,
            2 => 7,
            _ => {
                if self.aac_channel_mode {
                    2
                } else {
                    1
                }
            }
        }
    }

    /// Human-readable format description for observers.
    ///
    /// `bitrate_kbps` is the subchannel bitrate derived from the
    /// superframe length.
    pub fn description(&self, bitrate_kbps: usize) -> String {
        let codec = if self.sbr_flag {
            if self.ps_flag { "HE-AAC v2" } else { "HE-AAC" }
        } else {
            "AAC-LC"
        };

        let rate = if self.dac_rate { 48 } else { 32 };

        let mode = match self.mpeg_surround_config {
            0 => {
                if self.aac_channel_mode || self.ps_flag {
                    "Stereo"
                } else {
                    "Mono"
                }
            }
            1 => "Surround 5.1",
            2 => "Surround 7.1",
            _ => "Surround (unknown)",
        };

        format!("{codec}, {rate} kHz {mode} @ {bitrate_kbps} kBit/s")
    }
}

/// Parsed and verified superframe header.
///
/// Produced by the sync check on a corrected superframe; holds the format,
/// the access unit count and the offset table terminated by the usable
/// payload length.
#[derive(Debug, Clone, Copy)]
pub struct SuperframeHeader {
    /// Raw format byte, compared against the last applied value to detect
    /// configuration changes.
    pub raw_format: u8,
    pub format: SuperframeFormat,
    pub num_aus: usize,
    pub au_start: [usize; MAX_AUS + 1],
}

impl SuperframeHeader {
    /// Verifies sync and parses the header of a corrected superframe.
    ///
    /// `payload_len` is the usable superframe length once Reed-Solomon
    /// parity is excluded; it terminates the offset table as a
    /// pseudo-offset. Any returned error is a sync failure: either the
    /// fire code did not match or the offset table is implausible despite
    /// a matching fire code (guard against CRC collisions).
    pub fn read(sf: &[u8], payload_len: usize, fire: &Crc16) -> Result<Self> {
        // Refuse to sync on an all-zero pattern the error correction may
        // have converged towards.
        if sf[3] == 0x00 && sf[4] == 0x00 {
            bail!(SyncError::DegenerateOffsets);
        }

        let read = u16::from_be_bytes([sf[0], sf[1]]);
        let calculated = fire.checksum(&sf[2..11]);
        if read != calculated {
            bail!(SyncError::FireCodeMismatch { calculated, read });
        }

        let mut reader = BsIoSliceReader::from_slice(&sf[2..11]);
        let format = SuperframeFormat::read(&mut reader)?;

        let num_aus = format.num_aus();
        let mut au_start = [0usize; MAX_AUS + 1];
        au_start[0] = format.first_au_start();
        au_start[num_aus] = payload_len;

        for entry in au_start.iter_mut().take(num_aus).skip(1) {
            *entry = reader.get_n::<u16>(12)? as usize;
        }

        for i in 0..num_aus {
            if au_start[i] >= au_start[i + 1] {
                bail!(SyncError::NonMonotonicOffsets {
                    index: i,
                    value: au_start[i],
                    next_index: i + 1,
                    next: au_start[i + 1],
                });
            }
        }

        Ok(Self {
            raw_format: sf[2],
            format,
            num_aus,
            au_start,
        })
    }
}

/// Usable payload length of a superframe of `sf_len` bytes.
pub fn payload_len(sf_len: usize) -> usize {
    sf_len / CODEWORD_LEN * DATA_LEN
}

/// Subchannel bitrate in kBit/s for a superframe of `sf_len` bytes.
pub fn bitrate_kbps(sf_len: usize) -> usize {
    sf_len / CODEWORD_LEN * 8
}
