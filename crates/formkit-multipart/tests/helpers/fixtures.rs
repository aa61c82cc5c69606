//! Test fixtures: minimal buffers carrying each supported signature.
#![allow(dead_code)]

/// Minimal valid 1x1 PNG bytes.
pub fn minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// JPEG SOI marker plus a JFIF APP0 stub.
pub fn minimal_jpeg() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00]
}

/// GIF89a header with a 1x1 logical screen.
pub fn minimal_gif() -> Vec<u8> {
    let mut gif = b"GIF89a".to_vec();
    gif.extend_from_slice(&[0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00]);
    gif
}

/// RIFF/WEBP container header with an empty chunk list.
pub fn minimal_webp() -> Vec<u8> {
    let mut webp = b"RIFF".to_vec();
    webp.extend_from_slice(&4u32.to_le_bytes());
    webp.extend_from_slice(b"WEBP");
    webp
}

/// Little-endian TIFF header.
pub fn minimal_tiff() -> Vec<u8> {
    vec![0x49, 0x49, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00]
}

/// BMP header stub.
pub fn minimal_bmp() -> Vec<u8> {
    let mut bmp = b"BM".to_vec();
    bmp.extend_from_slice(&[0x3A, 0x00, 0x00, 0x00]);
    bmp
}

/// ISO BMFF `ftyp` box with the given brand (e.g. `b"heic"`, `b"avif"`).
pub fn minimal_ftyp(brand: &[u8; 4]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x18]);
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(brand);
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    data.extend_from_slice(brand);
    data.extend_from_slice(b"mif1");
    data
}

/// Minimal valid PDF.
pub fn minimal_pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Size 1 >>\n%%EOF"
        .to_vec()
}
