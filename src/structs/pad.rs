//! Programme-associated data (PAD) extraction.
//!
//! PAD rides inside an access unit payload, embedded in a Data Stream
//! Element. The element splits into a variable-length portion and a fixed
//! trailing FPAD field carrying transport-level framing state for the
//! downstream PAD parser.

/// Length of the fixed trailing FPAD field in bytes.
pub const FPAD_LEN: usize = 2;

/// Syntactic element id of a Data Stream Element in the top 3 bits of the
/// first payload byte.
const ID_SYN_ELE_DSE: u8 = 4;

/// One PAD element located within an access unit payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadElement<'a> {
    /// Variable-length PAD data preceding the FPAD field.
    pub variable: &'a [u8],

    /// Fixed trailing FPAD field.
    pub fpad: &'a [u8; FPAD_LEN],
}

impl<'a> PadElement<'a> {
    /// Locates a PAD element in an access unit payload.
    ///
    /// The element length is byte 1; a value of 255 selects the extended
    /// form where byte 2 holds the excess and the data starts one byte
    /// later. Returns `None` when no plausible element is present, in
    /// which case the observer must still be notified with an empty
    /// variable portion and an all-zero FPAD field so its PAD parser
    /// resets (omitted CI list case).
    pub fn extract(payload: &'a [u8]) -> Option<Self> {
        if payload.len() < 3 || payload[0] >> 5 != ID_SYN_ELE_DSE {
            return None;
        }

        let mut start = 2usize;
        let mut len = payload[1] as usize;
        if len == 255 {
            len += payload[2] as usize;
            start += 1;
        }

        if len < FPAD_LEN || payload.len() < start + len {
            return None;
        }

        let element = &payload[start..start + len];
        let (variable, fpad) = element.split_at(len - FPAD_LEN);

        Some(Self {
            variable,
            fpad: fpad.try_into().ok()?,
        })
    }
}
