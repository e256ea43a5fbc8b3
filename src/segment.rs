//! SMS transport segment accounting.
//!
//! A single unconcatenated segment carries 140 octets: 160 GSM-7 septets or
//! 70 UCS-2 characters. Concatenated messages spend 7 octets per segment on
//! the reassembly header, leaving 153 and 67 respectively.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::charset::{gsm7_len, is_gsm7};

/// Single-segment capacity of a GSM-7 message.
pub const GSM7_SINGLE_SEGMENT: usize = 160;
/// Per-segment capacity of a concatenated GSM-7 message.
pub const GSM7_MULTIPART_SEGMENT: usize = 153;
/// Single-segment capacity of a UCS-2 message.
pub const UCS2_SINGLE_SEGMENT: usize = 70;
/// Per-segment capacity of a concatenated UCS-2 message.
pub const UCS2_MULTIPART_SEGMENT: usize = 67;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Transport encoding chosen for a message body.
pub enum SmsEncoding {
    /// GSM 03.38 7-bit default alphabet.
    #[default]
    #[serde(rename = "GSM-7")]
    Gsm7,
    /// 2-byte Unicode, used when the body leaves the GSM-7 repertoire.
    #[serde(rename = "UCS-2")]
    Ucs2,
}

impl SmsEncoding {
    /// Capacity of a single unconcatenated segment.
    pub fn max_chars(self) -> usize {
        match self {
            Self::Gsm7 => GSM7_SINGLE_SEGMENT,
            Self::Ucs2 => UCS2_SINGLE_SEGMENT,
        }
    }

    /// Per-segment capacity once the message is concatenated.
    pub fn max_chars_multipart(self) -> usize {
        match self {
            Self::Gsm7 => GSM7_MULTIPART_SEGMENT,
            Self::Ucs2 => UCS2_MULTIPART_SEGMENT,
        }
    }
}

impl fmt::Display for SmsEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gsm7 => "GSM-7",
            Self::Ucs2 => "UCS-2",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Segment accounting for one message body.
///
/// Invariant: `segments == 0` iff the body is empty; otherwise `segments`
/// is `char_count` divided by the per-segment limit, rounded up.
pub struct SegmentInfo {
    /// Number of transport segments the body occupies.
    pub segments: usize,
    /// Encoding the body will be sent in.
    pub encoding: SmsEncoding,
    /// Character count under the encoding's accounting. For UCS-2 this
    /// counts UTF-16 code units, so astral-plane characters (most emoji)
    /// count as two.
    pub char_count: usize,
    /// Capacity of the allocated segments.
    pub max_chars: usize,
}

/// Classify `text` and compute its segment accounting.
pub fn count_segments(text: &str) -> SegmentInfo {
    if text.is_empty() {
        return SegmentInfo {
            segments: 0,
            encoding: SmsEncoding::Gsm7,
            char_count: 0,
            max_chars: GSM7_SINGLE_SEGMENT,
        };
    }

    if is_gsm7(text) {
        let char_count = gsm7_len(text);
        if char_count <= GSM7_SINGLE_SEGMENT {
            return SegmentInfo {
                segments: 1,
                encoding: SmsEncoding::Gsm7,
                char_count,
                max_chars: GSM7_SINGLE_SEGMENT,
            };
        }
        let segments = char_count.div_ceil(GSM7_MULTIPART_SEGMENT);
        return SegmentInfo {
            segments,
            encoding: SmsEncoding::Gsm7,
            char_count,
            max_chars: GSM7_MULTIPART_SEGMENT * segments,
        };
    }

    let char_count = text.encode_utf16().count();
    if char_count <= UCS2_SINGLE_SEGMENT {
        return SegmentInfo {
            segments: 1,
            encoding: SmsEncoding::Ucs2,
            char_count,
            max_chars: UCS2_SINGLE_SEGMENT,
        };
    }
    let segments = char_count.div_ceil(UCS2_MULTIPART_SEGMENT);
    SegmentInfo {
        segments,
        encoding: SmsEncoding::Ucs2,
        char_count,
        max_chars: UCS2_MULTIPART_SEGMENT * segments,
    }
}
