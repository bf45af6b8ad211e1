//! AAC codec adaptation.
//!
//! The superframe filter drives audio decoding through one uniform
//! contract so decoder backends stay interchangeable: a backend is opened
//! from the current [`SuperframeFormat`] and then consumes raw access
//! unit payloads one at a time. Selecting a concrete backend is the
//! embedding application's concern.

use crate::process::SubchannelObserver;
use crate::structs::format::SuperframeFormat;

pub use crate::utils::errors::CodecError;

/// An opened AAC decoder instance bound to one audio configuration.
pub trait AacDecoder {
    /// Decodes one access unit payload.
    ///
    /// Must consume the entire input; decoded PCM is forwarded to the
    /// observer via [`put_audio`](SubchannelObserver::put_audio). Errors
    /// are codec-internal and non-fatal: the filter logs them and
    /// continues with the next access unit.
    fn decode_frame(
        &mut self,
        data: &[u8],
        observer: &mut dyn SubchannelObserver,
    ) -> Result<(), CodecError>;
}

/// Factory for decoder instances, selected when the filter is built.
pub trait AacDecoderBackend {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Opens a decoder for the given audio configuration.
    ///
    /// Implementations emit
    /// [`start_audio`](SubchannelObserver::start_audio) once the output
    /// layout is known. A failure here is fatal for the session: no
    /// further audio can be produced.
    fn open(
        &self,
        format: SuperframeFormat,
        observer: &mut dyn SubchannelObserver,
    ) -> Result<Box<dyn AacDecoder>, CodecError>;
}

/// Two-byte AAC audio specific config derived from the superframe format.
///
/// The only way to select the 960 transform: object type 2 (AAC LC), core
/// sample rate index, channel configuration, and a GASpecificConfig with
/// the 960 frame length flag. SBR and PS are signalled implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpecificConfig {
    pub bytes: [u8; 2],
}

impl AudioSpecificConfig {
    pub fn from_format(format: &SuperframeFormat) -> Self {
        // 24/48/16/32 kHz core rates
        let core_sr_index: u8 = if format.dac_rate {
            if format.sbr_flag { 6 } else { 3 }
        } else if format.sbr_flag {
            8
        } else {
            5
        };

        let core_ch_config = format.aac_channel_config();

        Self {
            bytes: [
                0b00010 << 3 | core_sr_index >> 1,
                (core_sr_index & 0x01) << 7 | core_ch_config << 3 | 0b100,
            ],
        }
    }
}

impl AsRef<[u8]> for AudioSpecificConfig {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
