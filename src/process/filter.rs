//! Superframe reassembly and access unit dispatch.
//!
//! The [`SuperframeFilter`] is the sole ingress point for subchannel
//! transport frames. Five consecutive frames form one superframe
//! candidate; each candidate is error-corrected, sync-checked against the
//! fire code, and split into CRC-validated access units which are handed
//! to the codec backend and scanned for embedded PAD.
//!
//! Sync acquisition relies on a sliding window: while the sync check
//! keeps failing, every new frame produces an overlapping candidate
//! shifted by one frame. Only a candidate that passes the sync check
//! resets the window for a fresh 5-frame accumulation.

use anyhow::{Result, anyhow};
use log::Level::Warn;
use log::{debug, info};

use crate::log_or_err;
use crate::process::SubchannelObserver;
use crate::process::codec::{AacDecoder, AacDecoderBackend};
use crate::process::rs::{CODEWORD_LEN, RsDecoder};
use crate::structs::format::{self, SuperframeFormat, SuperframeHeader};
use crate::structs::pad::{FPAD_LEN, PadElement};
use crate::utils::crc::{CRC_CCITT_ALG, CRC_FIRE_CODE_ALG, Crc16};
use crate::utils::errors::{AccessUnitError, FrameError};

/// Transport frames per superframe.
pub const SF_FRAMES: usize = 5;

/// Minimum acceptable transport frame length in bytes.
pub const MIN_FRAME_LEN: usize = 10;

/// Session counters for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Superframes that passed the sync check.
    pub superframes: usize,

    /// Reed-Solomon corrected bytes across the session.
    pub corrected_bytes: usize,

    /// Superframes containing at least one uncorrectable codeword.
    pub uncorrectable_superframes: usize,

    /// Transport frames dropped before accumulation.
    pub dropped_frames: usize,

    /// Access units skipped due to failed validation.
    pub skipped_aus: usize,
}

/// Accumulation buffers, sized once by the first valid frame and held for
/// the session.
#[derive(Debug)]
struct SessionBuffers {
    frame_len: usize,
    sf_len: usize,
    /// Raw accumulation window; retained so correction never destroys
    /// frames still in flight.
    sf_raw: Vec<u8>,
    /// Working copy the Reed-Solomon decoder corrects in place.
    sf: Vec<u8>,
}

impl SessionBuffers {
    fn new(frame_len: usize) -> Result<Self, FrameError> {
        if frame_len < MIN_FRAME_LEN {
            return Err(FrameError::TooShort(frame_len));
        }

        let sf_len = SF_FRAMES * frame_len;
        if sf_len % CODEWORD_LEN != 0 {
            return Err(FrameError::MisalignedLength { frame_len, sf_len });
        }

        Ok(Self {
            frame_len,
            sf_len,
            sf_raw: vec![0; sf_len],
            sf: vec![0; sf_len],
        })
    }
}

/// Reassembles superframes from subchannel transport frames.
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = SuperframeFilter::new(Box::new(backend));
///
/// for frame in subchannel_frames {
///     filter.feed(&frame, &mut observer)?;
/// }
/// ```
pub struct SuperframeFilter {
    backend: Box<dyn AacDecoderBackend>,
    decoder: Option<Box<dyn AacDecoder>>,
    buffers: Option<SessionBuffers>,
    frame_count: usize,
    sync_frames: usize,
    format_raw: Option<u8>,
    format: Option<SuperframeFormat>,
    rs: RsDecoder,
    crc_fire: Crc16,
    crc_ccitt: Crc16,
    stats: FilterStats,
    fail_level: log::Level,
}

impl SuperframeFilter {
    pub fn new(backend: Box<dyn AacDecoderBackend>) -> Self {
        Self {
            backend,
            decoder: None,
            buffers: None,
            frame_count: 0,
            sync_frames: 0,
            format_raw: None,
            format: None,
            rs: RsDecoder::new(),
            crc_fire: Crc16::new(&CRC_FIRE_CODE_ALG),
            crc_ccitt: Crc16::new(&CRC_CCITT_ALG),
            stats: FilterStats::default(),
            fail_level: log::Level::Error,
        }
    }

    /// Sets the failure level for recoverable faults.
    ///
    /// - `log::Level::Error`: per-frame and per-AU faults only log (default)
    /// - `log::Level::Warn`: such faults become hard errors (strict mode)
    pub fn set_fail_level(&mut self, level: log::Level) {
        self.fail_level = level;
    }

    /// Audio format of the last successfully synced superframe.
    pub fn format(&self) -> Option<&SuperframeFormat> {
        self.format.as_ref()
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Feeds one transport frame.
    ///
    /// The first valid frame establishes the session frame length; frames
    /// of any other length are dropped and logged. All observer callbacks
    /// happen before this returns. The only unconditional error is a
    /// codec construction failure, which is fatal for the session.
    pub fn feed(&mut self, frame: &[u8], observer: &mut dyn SubchannelObserver) -> Result<()> {
        match &self.buffers {
            Some(buffers) if buffers.frame_len != frame.len() => {
                self.stats.dropped_frames += 1;
                log_or_err!(
                    self,
                    Warn,
                    anyhow!(FrameError::LengthMismatch {
                        found: frame.len(),
                        expected: buffers.frame_len,
                    })
                );
                return Ok(());
            }
            Some(_) => {}
            None => match SessionBuffers::new(frame.len()) {
                Ok(buffers) => self.buffers = Some(buffers),
                Err(e) => {
                    self.stats.dropped_frames += 1;
                    log_or_err!(self, Warn, anyhow!(e));
                    return Ok(());
                }
            },
        }

        let Some(buffers) = self.buffers.as_mut() else {
            return Ok(());
        };

        if self.frame_count == SF_FRAMES {
            // window full: evict the oldest frame
            buffers.sf_raw.copy_within(buffers.frame_len.., 0);
        } else {
            self.frame_count += 1;
        }

        let slot = (self.frame_count - 1) * buffers.frame_len;
        buffers.sf_raw[slot..slot + buffers.frame_len].copy_from_slice(frame);

        if self.frame_count < SF_FRAMES {
            return Ok(());
        }

        // correct a copy so the raw window survives a failed sync
        buffers.sf.copy_from_slice(&buffers.sf_raw);
        let report = self.rs.decode_superframe(&mut buffers.sf);
        self.stats.corrected_bytes += report.corrected;
        if report.uncorrectable {
            self.stats.uncorrectable_superframes += 1;
        }

        let sf_len = buffers.sf_len;
        let header =
            match SuperframeHeader::read(&buffers.sf, format::payload_len(sf_len), &self.crc_fire) {
                Ok(header) => header,
                Err(e) => {
                    debug!("sync check failed: {e}");
                    if self.sync_frames == 0 {
                        info!("superframe sync started...");
                    }
                    self.sync_frames += 1;
                    return Ok(());
                }
            };

        if self.sync_frames > 0 {
            info!("superframe sync succeeded after {} frame(s)", self.sync_frames);
            self.sync_frames = 0;
        }

        // force a complete new superframe before the next decode attempt
        self.frame_count = 0;
        self.stats.superframes += 1;

        if self.format_raw != Some(header.raw_format) {
            self.format_raw = Some(header.raw_format);
            self.format = Some(header.format);

            let description = header.format.description(format::bitrate_kbps(sf_len));
            observer.format_change(&description);

            info!("using decoder '{}'", self.backend.name());
            self.decoder = Some(self.backend.open(header.format, observer)?);
        }

        let Some(buffers) = self.buffers.as_ref() else {
            return Ok(());
        };
        let Some(decoder) = self.decoder.as_mut() else {
            return Ok(());
        };

        for i in 0..header.num_aus {
            let au = &buffers.sf[header.au_start[i]..header.au_start[i + 1]];
            // an AU needs at least its CRC trailer; an empty payload is
            // still validated and still resets the PAD parser
            if au.len() < 2 {
                self.stats.skipped_aus += 1;
                log_or_err!(
                    self,
                    Warn,
                    anyhow!(AccessUnitError::TooShort { index: i, len: au.len() })
                );
                continue;
            }

            let (payload, trailer) = au.split_at(au.len() - 2);
            let read = u16::from_be_bytes([trailer[0], trailer[1]]);
            let calculated = self.crc_ccitt.checksum(payload);
            if read != calculated {
                self.stats.skipped_aus += 1;
                log_or_err!(
                    self,
                    Warn,
                    anyhow!(AccessUnitError::CrcMismatch {
                        index: i,
                        calculated,
                        read,
                    })
                );
                continue;
            }

            if let Err(e) = decoder.decode_frame(payload, observer) {
                log_or_err!(self, Warn, anyhow!(e));
            }

            Self::check_for_pad(payload, observer);
        }

        Ok(())
    }

    /// Scans an access unit payload for embedded PAD.
    ///
    /// The observer is notified either way: an absent element yields an
    /// empty variable portion and an all-zero FPAD field, required to
    /// reset the downstream PAD parser.
    fn check_for_pad(payload: &[u8], observer: &mut dyn SubchannelObserver) {
        match PadElement::extract(payload) {
            Some(pad) => observer.process_pad(pad.variable, pad.fpad),
            None => observer.process_pad(&[], &[0u8; FPAD_LEN]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::codec::CodecError;
    use crate::process::rs::tests::seal_superframe;

    const FRAME_LEN: usize = 120;
    const SF_LEN: usize = SF_FRAMES * FRAME_LEN;
    const PAYLOAD_LEN: usize = 550;

    #[derive(Default)]
    struct RecordingObserver {
        formats: Vec<String>,
        starts: Vec<(u32, u8, bool)>,
        audio: Vec<Vec<u8>>,
        pads: Vec<(Vec<u8>, [u8; FPAD_LEN])>,
    }

    impl SubchannelObserver for RecordingObserver {
        fn format_change(&mut self, description: &str) {
            self.formats.push(description.to_owned());
        }

        fn start_audio(&mut self, sample_rate: u32, channels: u8, float_samples: bool) {
            self.starts.push((sample_rate, channels, float_samples));
        }

        fn put_audio(&mut self, samples: &[u8]) {
            self.audio.push(samples.to_vec());
        }

        fn process_pad(&mut self, variable: &[u8], fpad: &[u8; FPAD_LEN]) {
            self.pads.push((variable.to_vec(), *fpad));
        }
    }

    struct EchoDecoder;

    impl AacDecoder for EchoDecoder {
        fn decode_frame(
            &mut self,
            data: &[u8],
            observer: &mut dyn SubchannelObserver,
        ) -> Result<(), CodecError> {
            observer.put_audio(data);
            Ok(())
        }
    }

    struct EchoBackend;

    impl AacDecoderBackend for EchoBackend {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn open(
            &self,
            format: SuperframeFormat,
            observer: &mut dyn SubchannelObserver,
        ) -> Result<Box<dyn AacDecoder>, CodecError> {
            observer.start_audio(format.sample_rate(), format.channels(), false);
            Ok(Box::new(EchoDecoder))
        }
    }

    struct FailingBackend;

    impl AacDecoderBackend for FailingBackend {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn open(
            &self,
            _format: SuperframeFormat,
            _observer: &mut dyn SubchannelObserver,
        ) -> Result<Box<dyn AacDecoder>, CodecError> {
            Err(CodecError::BackendInit("no such backend".into()))
        }
    }

    fn format_raw(format: &SuperframeFormat) -> u8 {
        (format.dac_rate as u8) << 6
            | (format.sbr_flag as u8) << 5
            | (format.aac_channel_mode as u8) << 4
            | (format.ps_flag as u8) << 3
            | format.mpeg_surround_config
    }

    /// 48 kHz-less SBR stereo: 2 AUs, first offset 5.
    fn sbr_stereo() -> SuperframeFormat {
        SuperframeFormat {
            sbr_flag: true,
            aac_channel_mode: true,
            ..Default::default()
        }
    }

    /// Builds a superframe with sealed AU CRCs and fire code but without
    /// Reed-Solomon parity; callers corrupt it as needed and then run
    /// [`seal_rs`]. The last AU extends to the end of the payload.
    fn build_superframe(format: SuperframeFormat, payloads: &[&[u8]]) -> Vec<u8> {
        let num_aus = format.num_aus();
        assert_eq!(payloads.len(), num_aus);

        let mut sf = vec![0u8; SF_LEN];
        sf[2] = format_raw(&format);

        let mut bounds = Vec::with_capacity(num_aus);
        let mut start = format.first_au_start();
        for (i, payload) in payloads.iter().enumerate() {
            let end = if i == num_aus - 1 {
                PAYLOAD_LEN
            } else {
                start + payload.len() + 2
            };
            assert!(start + payload.len() + 2 <= end && end <= PAYLOAD_LEN);
            bounds.push((start, end));
            start = end;
        }

        // interior offsets as consecutive 12-bit fields from byte 3
        let mut bit = 24usize;
        for &(au_start, _) in bounds.iter().skip(1) {
            for i in 0..12 {
                if au_start & (1 << (11 - i)) != 0 {
                    sf[bit / 8] |= 0x80 >> (bit % 8);
                }
                bit += 1;
            }
        }

        let crc = Crc16::new(&CRC_CCITT_ALG);
        for (&(au_start, end), payload) in bounds.iter().zip(payloads) {
            sf[au_start..au_start + payload.len()].copy_from_slice(payload);
            let checksum = crc.checksum(&sf[au_start..end - 2]);
            sf[end - 2] = (checksum >> 8) as u8;
            sf[end - 1] = checksum as u8;
        }

        let fire = Crc16::new(&CRC_FIRE_CODE_ALG);
        let checksum = fire.checksum(&sf[2..11]);
        sf[0] = (checksum >> 8) as u8;
        sf[1] = checksum as u8;
        sf
    }

    fn seal_rs(sf: &mut [u8]) {
        seal_superframe(&RsDecoder::new(), sf);
    }

    fn feed_all(
        filter: &mut SuperframeFilter,
        sf: &[u8],
        observer: &mut RecordingObserver,
    ) -> Result<()> {
        for chunk in sf.chunks(FRAME_LEN) {
            filter.feed(chunk, observer)?;
        }
        Ok(())
    }

    fn pad_payload() -> Vec<u8> {
        let mut payload = vec![0x80, 10];
        payload.extend(1..=10u8);
        payload.resize(40, 0x5A);
        payload
    }

    #[test]
    fn five_frames_one_decode() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let pad = pad_payload();
        let mut sf = build_superframe(sbr_stereo(), &[&pad, &[0x11; 60]]);
        seal_rs(&mut sf);

        for chunk in sf.chunks(FRAME_LEN).take(4) {
            filter.feed(chunk, &mut observer)?;
        }
        assert!(observer.formats.is_empty());
        assert!(observer.audio.is_empty());
        assert_eq!(filter.stats().superframes, 0);

        filter.feed(&sf[4 * FRAME_LEN..], &mut observer)?;
        assert_eq!(observer.formats.len(), 1);
        assert!(observer.formats[0].contains("HE-AAC, 32 kHz Stereo"));
        assert!(observer.formats[0].contains("40 kBit/s"));
        assert_eq!(observer.starts, vec![(32000, 2, false)]);
        assert_eq!(observer.audio.len(), 2);
        assert_eq!(observer.pads.len(), 2);
        assert_eq!(filter.stats().superframes, 1);
        assert_eq!(filter.format().unwrap().num_aus(), 2);
        Ok(())
    }

    #[test]
    fn pad_extraction_and_reset_contract() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let pad = pad_payload();
        let mut sf = build_superframe(sbr_stereo(), &[&pad, &[0x11; 60]]);
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;

        // AU 0 carries a PAD element of length 10
        let (variable, fpad) = &observer.pads[0];
        assert_eq!(variable.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(fpad, &[9, 10]);

        // AU 1 has none: empty variable part, zeroed FPAD
        let (variable, fpad) = &observer.pads[1];
        assert!(variable.is_empty());
        assert_eq!(fpad, &[0u8; FPAD_LEN]);
        Ok(())
    }

    #[test]
    fn au_crc_failure_skips_single_au() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        // flip one payload bit of AU 0, past the fire-code-protected
        // header, after its CRC was sealed
        sf[12] ^= 0x01;
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;

        // only AU 1 decodes; the failed AU produces no PAD call either
        assert_eq!(observer.audio.len(), 1);
        assert_eq!(observer.audio[0][0], 0x33);
        assert_eq!(observer.pads.len(), 1);
        assert_eq!(filter.stats().skipped_aus, 1);
        assert_eq!(filter.stats().superframes, 1);
        Ok(())
    }

    #[test]
    fn empty_payload_au_flows_through() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        // AU 0 is CRC trailer only: validated (CRC over zero bytes),
        // decoded as empty, and the PAD reset still fires
        let mut sf = build_superframe(sbr_stereo(), &[&[], &[0x33; 60]]);
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;

        assert_eq!(observer.audio.len(), 2);
        assert!(observer.audio[0].is_empty());
        let (variable, fpad) = &observer.pads[0];
        assert!(variable.is_empty());
        assert_eq!(fpad, &[0u8; FPAD_LEN]);
        assert_eq!(filter.stats().skipped_aus, 0);
        Ok(())
    }

    #[test]
    fn fire_code_failure_suppresses_output_then_recovers() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let mut bad = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        bad[0] ^= 0xFF;
        seal_rs(&mut bad);
        feed_all(&mut filter, &bad, &mut observer)?;

        assert!(observer.formats.is_empty());
        assert!(observer.audio.is_empty());
        assert_eq!(filter.stats().superframes, 0);

        // the window keeps sliding one frame at a time until five good
        // frames line up
        let mut good = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        seal_rs(&mut good);
        feed_all(&mut filter, &good, &mut observer)?;

        assert_eq!(observer.audio.len(), 2);
        assert_eq!(filter.stats().superframes, 1);
        Ok(())
    }

    #[test]
    fn rs_corrects_transport_errors() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        seal_rs(&mut sf);

        // 5 byte errors within one interleaved codeword (stride 5)
        for pos in [1usize, 20, 50, 80, 115] {
            sf[pos * 5 + 2] ^= 0xFF;
        }
        feed_all(&mut filter, &sf, &mut observer)?;

        assert_eq!(observer.audio.len(), 2);
        assert_eq!(filter.stats().corrected_bytes, 5);
        assert_eq!(filter.stats().uncorrectable_superframes, 0);
        Ok(())
    }

    #[test]
    fn format_change_reopens_decoder() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;
        // same format again: no new notification
        feed_all(&mut filter, &sf, &mut observer)?;

        assert_eq!(observer.formats.len(), 1);
        assert_eq!(observer.starts.len(), 1);
        assert_eq!(observer.audio.len(), 4);

        // drop the channel mode bit: mono, new decoder instance
        let mono = SuperframeFormat {
            sbr_flag: true,
            ..Default::default()
        };
        let mut sf = build_superframe(mono, &[&[0x44; 40], &[0x55; 60]]);
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;

        assert_eq!(observer.formats.len(), 2);
        assert!(observer.formats[1].contains("Mono"));
        assert_eq!(observer.starts.len(), 2);
        assert_eq!(observer.starts[1], (32000, 1, false));
        Ok(())
    }

    #[test]
    fn first_frame_length_validation() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        // too short, then misaligned: both dropped without fixing the
        // session frame length
        filter.feed(&[0u8; 9], &mut observer)?;
        filter.feed(&[0u8; 121], &mut observer)?;
        assert_eq!(filter.stats().dropped_frames, 2);

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;

        assert_eq!(observer.audio.len(), 2);
        Ok(())
    }

    #[test]
    fn mismatched_frame_length_dropped_mid_session() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        seal_rs(&mut sf);

        for chunk in sf.chunks(FRAME_LEN).take(4) {
            filter.feed(chunk, &mut observer)?;
        }
        // wrong length: ignored, accumulation undisturbed
        filter.feed(&[0u8; 96], &mut observer)?;
        assert_eq!(filter.stats().dropped_frames, 1);
        assert!(observer.audio.is_empty());

        filter.feed(&sf[4 * FRAME_LEN..], &mut observer)?;
        assert_eq!(observer.audio.len(), 2);
        Ok(())
    }

    #[test]
    fn codec_construction_failure_is_fatal() {
        let mut filter = SuperframeFilter::new(Box::new(FailingBackend));
        let mut observer = RecordingObserver::default();

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        seal_rs(&mut sf);

        let result = feed_all(&mut filter, &sf, &mut observer);
        assert!(result.is_err());
        // the format notification already happened when construction failed
        assert_eq!(observer.formats.len(), 1);
        assert!(observer.audio.is_empty());
    }

    #[test]
    fn strict_mode_escalates_au_faults() {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        filter.set_fail_level(log::Level::Warn);
        let mut observer = RecordingObserver::default();

        let mut sf = build_superframe(sbr_stereo(), &[&[0x22; 40], &[0x33; 60]]);
        sf[12] ^= 0x01;
        seal_rs(&mut sf);

        assert!(feed_all(&mut filter, &sf, &mut observer).is_err());
    }

    #[test]
    fn six_au_configuration_dispatch() -> Result<()> {
        let mut filter = SuperframeFilter::new(Box::new(EchoBackend));
        let mut observer = RecordingObserver::default();

        // 48 kHz AAC-LC: 6 AUs, first offset 11
        let format = SuperframeFormat {
            dac_rate: true,
            aac_channel_mode: true,
            ..Default::default()
        };
        let payloads: [&[u8]; 6] = [&[1; 30], &[2; 40], &[3; 50], &[4; 60], &[5; 70], &[6; 80]];
        let mut sf = build_superframe(format, &payloads);
        seal_rs(&mut sf);
        feed_all(&mut filter, &sf, &mut observer)?;

        assert!(observer.formats[0].contains("AAC-LC, 48 kHz Stereo"));
        assert_eq!(observer.starts, vec![(48000, 2, false)]);
        assert_eq!(observer.audio.len(), 6);
        for (i, samples) in observer.audio.iter().take(5).enumerate() {
            assert_eq!(samples[0], i as u8 + 1);
        }
        Ok(())
    }
}
