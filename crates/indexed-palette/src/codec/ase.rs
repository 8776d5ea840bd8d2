//! Adobe Swatch Exchange (`.ase`) encoder.
//!
//! Big-endian throughout:
//!
//! ```text
//! "ASEF" | u16 major=1 | u16 minor=0 | u32 block count
//! per color:
//!   u16 type=1 | u32 data length
//!   u16 name length (UTF-16 units incl. null) | UTF-16BE name + 0x0000
//!   "RGB " | f32 r | f32 g | f32 b | u16 color type=0
//! ```

use crate::palette::{PaletteEntry, PALETTE_SIZE};

const ASE_MAGIC: &[u8; 4] = b"ASEF";
const VERSION_MAJOR: u16 = 1;
const VERSION_MINOR: u16 = 0;
const BLOCK_COLOR: u16 = 0x0001;
const COLOR_MODEL_RGB: &[u8; 4] = b"RGB ";
/// Global color type. Spot and process types are never written.
const COLOR_TYPE_GLOBAL: u16 = 0;

const HEADER_LEN: usize = 12;
const BLOCK_HEADER_LEN: usize = 6;

fn write_u16_be(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn write_u32_be(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

fn write_f32_be(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_be_bytes());
}

/// Swatch name as null-terminated UTF-16BE.
fn swatch_name(index: u8) -> Vec<u8> {
    format!("color{index}")
        .encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_be_bytes)
        .collect()
}

/// Size of a color block's data section for a name of `name_bytes` bytes.
fn block_data_len(name_bytes: usize) -> usize {
    2 + name_bytes + COLOR_MODEL_RGB.len() + 3 * 4 + 2
}

pub(crate) fn encode_ase(entries: &[PaletteEntry; PALETTE_SIZE]) -> Vec<u8> {
    let names: Vec<Vec<u8>> = entries.iter().map(|e| swatch_name(e.index)).collect();
    let capacity = HEADER_LEN
        + names
            .iter()
            .map(|name| BLOCK_HEADER_LEN + block_data_len(name.len()))
            .sum::<usize>();

    let mut buf = Vec::with_capacity(capacity);
    buf.extend_from_slice(ASE_MAGIC);
    write_u16_be(&mut buf, VERSION_MAJOR);
    write_u16_be(&mut buf, VERSION_MINOR);
    write_u32_be(&mut buf, PALETTE_SIZE as u32);

    for (entry, name) in entries.iter().zip(&names) {
        write_u16_be(&mut buf, BLOCK_COLOR);
        write_u32_be(&mut buf, block_data_len(name.len()) as u32);

        // Length in UTF-16 code units, the terminator included
        write_u16_be(&mut buf, (name.len() / 2) as u16);
        buf.extend_from_slice(name);

        buf.extend_from_slice(COLOR_MODEL_RGB);
        for channel in entry.color.to_rgb() {
            write_f32_be(&mut buf, f32::from(channel) / 255.0);
        }
        write_u16_be(&mut buf, COLOR_TYPE_GLOBAL);
    }

    debug_assert_eq!(buf.len(), capacity);
    buf
}
