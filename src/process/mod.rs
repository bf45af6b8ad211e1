//! Processing pipeline for DAB+ superframe streams.

use crate::structs::pad::FPAD_LEN;

/// Superframe reassembly and access unit dispatch.
///
/// Provides the [`SuperframeFilter`](filter::SuperframeFilter), the sole
/// ingress point for subchannel transport frames.
pub mod filter;

/// Byte-interleaved Reed-Solomon error correction.
///
/// Provides the [`RsDecoder`](rs::RsDecoder) operating in place on one
/// superframe buffer.
pub mod rs;

/// AAC codec adaptation.
///
/// Provides the [`AacDecoder`](codec::AacDecoder) contract implemented by
/// interchangeable decoder backends, and the
/// [`AudioSpecificConfig`](codec::AudioSpecificConfig) derivation.
pub mod codec;

/// Receiver of all subchannel output.
///
/// Every callback happens synchronously within the dynamic extent of a
/// [`feed`](filter::SuperframeFilter::feed) call, on the caller's thread.
pub trait SubchannelObserver {
    /// Human-readable format description, emitted only when the audio
    /// configuration changes.
    fn format_change(&mut self, description: &str);

    /// Emitted once per codec (re)instantiation, before any
    /// [`put_audio`](Self::put_audio).
    fn start_audio(&mut self, sample_rate: u32, channels: u8, float_samples: bool);

    /// One call per successfully decoded access unit.
    fn put_audio(&mut self, samples: &[u8]);

    /// One call per processed access unit, always: when no PAD element is
    /// present, `variable` is empty and `fpad` all zeros so the PAD
    /// parser downstream resets its state.
    fn process_pad(&mut self, variable: &[u8], fpad: &[u8; FPAD_LEN]);
}
