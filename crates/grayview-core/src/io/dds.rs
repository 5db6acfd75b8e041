use std::fs::File;
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt};
use memmap2::Mmap;
use ndarray::Array2;

use crate::error::{GrayviewError, Result};
use crate::grid::{PixelProvider, SampleGrid};

pub const FORMAT_LABEL_R16F: &str = "R16F (half)";
pub const FORMAT_LABEL_R32F: &str = "R32F (float)";

const DDS_MAGIC: &[u8; 4] = b"DDS ";
// Magic + the fixed 124-byte header.
const HEADER_SIZE: usize = 4 + 124;
const DX10_HEADER_SIZE: usize = 20;

const DDPF_FOURCC: u32 = 0x4;
const FOURCC_DX10: u32 = u32::from_le_bytes(*b"DX10");
const D3DFMT_R16F: u32 = 111;
const D3DFMT_R32F: u32 = 114;
const DXGI_FORMAT_R32_FLOAT: u32 = 41;
const DXGI_FORMAT_R16_FLOAT: u32 = 54;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PixelFormat {
    R16F,
    R32F,
}

impl PixelFormat {
    fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::R16F => 2,
            PixelFormat::R32F => 4,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PixelFormat::R16F => FORMAT_LABEL_R16F,
            PixelFormat::R32F => FORMAT_LABEL_R32F,
        }
    }
}

/// Load a single-channel float DDS (R16F or R32F) as f32 samples.
pub fn load(path: &Path) -> Result<Box<dyn PixelProvider>> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    decode(&mmap)
}

fn decode(bytes: &[u8]) -> Result<Box<dyn PixelProvider>> {
    let (format, width, height, data_offset) = parse_header(bytes)?;

    // Header-supplied dimensions are untrusted; an overflowing size is as
    // malformed as a short file.
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(format.bytes_per_pixel()))
        .and_then(|n| n.checked_add(data_offset))
        .ok_or_else(|| {
            GrayviewError::DecodeFailure(format!("implausible dimensions {width}x{height}"))
        })?;
    if bytes.len() < expected {
        return Err(GrayviewError::DecodeFailure(format!(
            "truncated pixel data: expected at least {} bytes, got {}",
            expected,
            bytes.len()
        )));
    }

    let pixels = &bytes[data_offset..];
    let mut data = Array2::<f32>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) * format.bytes_per_pixel();
            data[[y, x]] = match format {
                PixelFormat::R16F => half_to_f32(u16::from_le_bytes([pixels[i], pixels[i + 1]])),
                PixelFormat::R32F => f32::from_le_bytes([
                    pixels[i],
                    pixels[i + 1],
                    pixels[i + 2],
                    pixels[i + 3],
                ]),
            };
        }
    }

    Ok(Box::new(SampleGrid::new(data, format.label())?))
}

/// Parse the DDS header, returning (pixel format, width, height, offset of
/// the first pixel byte).
fn parse_header(bytes: &[u8]) -> Result<(PixelFormat, usize, usize, usize)> {
    if bytes.len() < HEADER_SIZE {
        return Err(GrayviewError::DecodeFailure(
            "file too small for DDS header".into(),
        ));
    }
    if &bytes[0..4] != DDS_MAGIC {
        return Err(GrayviewError::DecodeFailure("missing DDS magic".into()));
    }

    let mut cur = &bytes[4..HEADER_SIZE];
    let header_size = cur.read_u32::<LittleEndian>()?;
    if header_size != 124 {
        return Err(GrayviewError::DecodeFailure(format!(
            "unexpected DDS header size {header_size}"
        )));
    }

    let _flags = cur.read_u32::<LittleEndian>()?;
    let height = cur.read_u32::<LittleEndian>()? as usize;
    let width = cur.read_u32::<LittleEndian>()? as usize;

    // Pitch, depth, mipmap count and 11 reserved dwords are irrelevant here.
    for _ in 0..14 {
        cur.read_u32::<LittleEndian>()?;
    }

    let pf_size = cur.read_u32::<LittleEndian>()?;
    if pf_size != 32 {
        return Err(GrayviewError::DecodeFailure(format!(
            "unexpected pixel format block size {pf_size}"
        )));
    }
    let pf_flags = cur.read_u32::<LittleEndian>()?;
    let four_cc = cur.read_u32::<LittleEndian>()?;

    if pf_flags & DDPF_FOURCC == 0 {
        return Err(GrayviewError::DecodeFailure(
            "expected a 16/32-bit float grayscale DDS".into(),
        ));
    }

    match four_cc {
        D3DFMT_R16F => Ok((PixelFormat::R16F, width, height, HEADER_SIZE)),
        D3DFMT_R32F => Ok((PixelFormat::R32F, width, height, HEADER_SIZE)),
        FOURCC_DX10 => {
            if bytes.len() < HEADER_SIZE + DX10_HEADER_SIZE {
                return Err(GrayviewError::DecodeFailure(
                    "file too small for DX10 extension header".into(),
                ));
            }
            let mut ext = &bytes[HEADER_SIZE..];
            let dxgi_format = ext.read_u32::<LittleEndian>()?;
            let format = match dxgi_format {
                DXGI_FORMAT_R16_FLOAT => PixelFormat::R16F,
                DXGI_FORMAT_R32_FLOAT => PixelFormat::R32F,
                other => {
                    return Err(GrayviewError::DecodeFailure(format!(
                        "unsupported DXGI format {other}"
                    )))
                }
            };
            Ok((format, width, height, HEADER_SIZE + DX10_HEADER_SIZE))
        }
        other => Err(GrayviewError::DecodeFailure(format!(
            "unsupported fourCC 0x{other:08x}"
        ))),
    }
}

/// Expand an IEEE 754 binary16 value to f32.
fn half_to_f32(bits: u16) -> f32 {
    let sign = u32::from(bits >> 15) << 31;
    let exp = u32::from((bits >> 10) & 0x1f);
    let frac = u32::from(bits & 0x3ff);

    let out = match exp {
        0 => {
            if frac == 0 {
                sign // signed zero
            } else {
                // Subnormal half: renormalize into an f32 exponent.
                let mut exp32: u32 = 113;
                let mut mant = frac;
                while mant & 0x400 == 0 {
                    mant <<= 1;
                    exp32 -= 1;
                }
                sign | (exp32 << 23) | ((mant & 0x3ff) << 13)
            }
        }
        0x1f => sign | 0x7f80_0000 | (frac << 13), // inf / NaN
        _ => sign | ((exp + 127 - 15) << 23) | (frac << 13),
    };

    f32::from_bits(out)
}
