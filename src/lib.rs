//! Parser and decoder front-end for DAB+ audio superframes.
//!
//! ## Technical Overview
//!
//! Reconstructs logical superframes from fixed-size subchannel transport
//! frames, applies forward error correction, verifies synchronization and
//! per-access-unit integrity, and extracts programme-associated data before
//! handing decodable access units to an AAC codec backend.
//!
//! ### Bitstream Organization
//!
//! **External structure**: five consecutive transport frames form one
//! superframe carrying Reed-Solomon parity.
//! **Internal structure**: a fire-code-protected header (audio format and a
//! 12-bit access-unit offset table) followed by CRC-protected access units.
//!
//! ### Processing Pipeline
//!
//! 1. Accumulate transport frames with [`process::filter::SuperframeFilter`]
//! 2. Correct byte errors in place using [`process::rs::RsDecoder`]
//! 3. Forward validated access units to an [`process::codec::AacDecoder`]
//!
//! ```rust
//! use dabplus::process::filter::SuperframeFilter;
//! use dabplus::process::codec::{AacDecoder, AacDecoderBackend, CodecError};
//! use dabplus::process::SubchannelObserver;
//! use dabplus::structs::format::SuperframeFormat;
//! use dabplus::structs::pad::FPAD_LEN;
//!
//! struct NullDecoder;
//!
//! impl AacDecoder for NullDecoder {
//!     fn decode_frame(
//!         &mut self,
//!         _data: &[u8],
//!         _observer: &mut dyn SubchannelObserver,
//!     ) -> Result<(), CodecError> {
//!         Ok(())
//!     }
//! }
//!
//! struct NullBackend;
//!
//! impl AacDecoderBackend for NullBackend {
//!     fn name(&self) -> &'static str {
//!         "null"
//!     }
//!
//!     fn open(
//!         &self,
//!         format: SuperframeFormat,
//!         observer: &mut dyn SubchannelObserver,
//!     ) -> Result<Box<dyn AacDecoder>, CodecError> {
//!         observer.start_audio(format.sample_rate(), format.channels(), false);
//!         Ok(Box::new(NullDecoder))
//!     }
//! }
//!
//! struct Sink;
//!
//! impl SubchannelObserver for Sink {
//!     fn format_change(&mut self, description: &str) {
//!         println!("format: {description}");
//!     }
//!     fn start_audio(&mut self, _sample_rate: u32, _channels: u8, _float_samples: bool) {}
//!     fn put_audio(&mut self, _samples: &[u8]) {}
//!     fn process_pad(&mut self, _variable: &[u8], _fpad: &[u8; FPAD_LEN]) {}
//! }
//!
//! let mut filter = SuperframeFilter::new(Box::new(NullBackend));
//! let mut sink = Sink;
//!
//! // One fixed-length transport frame per call; five complete a superframe.
//! let frame = vec![0u8; 120];
//! filter.feed(&frame, &mut sink)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Processing functionality for superframe streams.
///
/// 1. **Superframe Filtering** ([`process::filter`]): Frame accumulation,
///    sync verification and access unit dispatch.
///
/// 2. **Error Correction** ([`process::rs`]): Byte-interleaved Reed-Solomon
///    decoding over one superframe.
///
/// 3. **Codec Adaptation** ([`process::codec`]): Uniform contract for
///    interchangeable AAC decoder backends.
pub mod process;

/// Data structures representing DAB+ superframe components.
///
/// - **Format** ([`structs::format`]): Audio configuration and header parsing
/// - **PAD** ([`structs::pad`]): Programme-associated data extraction
pub mod structs;

/// Utility functions and supporting infrastructure.
///
/// - **Bitstream I/O** ([`utils::bitstream_io`]): Bit-level reading
/// - **CRC Validation** ([`utils::crc`]): Error detection
/// - **Error Handling** ([`utils::errors`]): Error types
pub mod utils;
