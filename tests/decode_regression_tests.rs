//! Integration tests for payload decoding
//!
//! Codeword buffers are built with `SegmentWriter` (or by hand where the
//! exact bit layout matters) and run through the public decode API.

use qr_payload::tools::{SegmentWriter, ToolError};
use qr_payload::{Barcode, Detection, Halt, ScanSession, decode, decode_batch, decode_with_report};

#[test]
fn test_empty_input_gives_empty_output() {
    assert!(decode(&[]).is_empty());
}

#[test]
fn test_terminator_only() {
    for padding in [0x00u8, 0x0F, 0x0A, 0x05] {
        assert!(decode(&[padding]).is_empty());
        assert!(decode(&[padding, 0xEC, 0x11, 0xEC]).is_empty());
    }
}

#[test]
fn test_byte_mode_hello() -> Result<(), ToolError> {
    let mut writer = SegmentWriter::new();
    writer.bytes(b"HELLO")?.terminator();
    let codewords = writer.to_codewords();

    assert_eq!(decode(&codewords), [0x48u8, 0x45, 0x4C, 0x4C, 0x4F]);
    Ok(())
}

#[test]
fn test_byte_mode_with_pad_codewords() -> Result<(), ToolError> {
    // A real version 1-L symbol carries 19 data codewords, filled with the
    // alternating 0xEC/0x11 pad pattern after the terminator.
    let mut writer = SegmentWriter::new();
    writer.bytes(b"HELLO")?.terminator();
    let mut codewords = writer.to_codewords();
    let mut pad = [0xECu8, 0x11].into_iter().cycle();
    while codewords.len() < 19 {
        codewords.extend(pad.next());
    }

    let report = decode_with_report(&codewords);
    assert_eq!(report.data, b"HELLO");
    assert_eq!(report.halt, Halt::Terminator);
    assert_eq!(report.segments, 1);
    Ok(())
}

#[test]
fn test_numeric_round_trip() {
    // 0001 0000001001 0001111011 0111001000 1100010101 0000
    let mut writer = SegmentWriter::new();
    writer
        .raw(0b0001, 4)
        .raw(9, 10)
        .raw(123, 10)
        .raw(456, 10)
        .raw(789, 10)
        .raw(0, 4);
    assert_eq!(decode(&writer.to_codewords()), b"123456789");
}

#[test]
fn test_numeric_partial_groups() -> Result<(), ToolError> {
    for digits in ["0", "07", "1234", "12345", "000000", "9876543210"] {
        let mut writer = SegmentWriter::new();
        writer.numeric(digits)?.terminator();
        assert_eq!(decode(&writer.to_codewords()), digits.as_bytes(), "{}", digits);
    }
    Ok(())
}

#[test]
fn test_alphanumeric_round_trip() {
    // "AB" = 10 * 45 + 11 = 461, "1" = 1
    let mut writer = SegmentWriter::new();
    writer.raw(0b0010, 4).raw(3, 9).raw(461, 11).raw(1, 6).raw(0, 4);
    assert_eq!(decode(&writer.to_codewords()), b"AB1");
}

#[test]
fn test_alphanumeric_full_table() -> Result<(), ToolError> {
    let text = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";
    let mut writer = SegmentWriter::new();
    writer.alphanumeric(text)?.terminator();
    assert_eq!(decode(&writer.to_codewords()), text.as_bytes());
    Ok(())
}

#[test]
fn test_mixed_segments_concatenate_in_order() -> Result<(), ToolError> {
    let mut writer = SegmentWriter::new();
    writer
        .alphanumeric("HTTPS://EXAMPLE.COM/")?
        .numeric("2024")?
        .bytes(b"?q=a")?
        .terminator();

    let report = decode_with_report(&writer.to_codewords());
    assert_eq!(report.data, b"HTTPS://EXAMPLE.COM/2024?q=a");
    assert_eq!(report.segments, 3);
    assert_eq!(report.halt, Halt::Terminator);
    Ok(())
}

#[test]
fn test_byte_count_longer_than_buffer() {
    // Declares 10 bytes but only 3 follow
    let mut writer = SegmentWriter::new();
    writer.raw(0b0100, 4).raw(10, 8);
    for &byte in b"abc" {
        writer.raw(byte as u32, 8);
    }

    assert_eq!(decode(&writer.to_codewords()), b"abc");
}

#[test]
fn test_truncated_inside_each_segment() -> Result<(), ToolError> {
    // numeric "31415926" ends at bit 41, alphanumeric "PI" at 65,
    // byte "tail" at 109, terminator at 113
    let mut writer = SegmentWriter::new();
    writer
        .numeric("31415926")?
        .alphanumeric("PI")?
        .bytes(b"tail")?
        .terminator();
    let full = writer.to_codewords();
    assert_eq!(full.len(), 15);

    let cases: [(usize, &[u8]); 5] = [
        // 2 bits of 314 (01), then two empty groups
        (2, b"00100000"),
        // 314 complete, 8 bits of 159 (00100111 = 39), empty last group
        (4, b"31403900"),
        // 2 bits of the "PI" pair (10 = 2)
        (7, b"3141592602"),
        // one whole byte, 3 bits short of the second
        (11, b"31415926PIt"),
        (15, b"31415926PItail"),
    ];
    for (len, expected) in cases {
        assert_eq!(decode(&full[..len]), expected, "cut at {} codewords", len);
    }
    Ok(())
}

#[test]
fn test_numeric_count_outruns_buffer() {
    // 0001 0000001001 00: nine digits declared, two bits present
    let report = decode_with_report(&[0x10, 0x24]);
    assert_eq!(report.data, b"000000000");
    assert_eq!(report.halt, Halt::Exhausted);
    assert_eq!(report.bits_consumed, 16);
}

#[test]
fn test_alphanumeric_count_outruns_buffer() {
    // 0010 000001000 000: eight characters declared, three bits present
    let report = decode_with_report(&[0x20, 0x40]);
    assert_eq!(report.data, b"00000000");
    assert_eq!(report.halt, Halt::Exhausted);
}

#[test]
fn test_unsupported_modes_stop_decoding() -> Result<(), ToolError> {
    for mode in [0b0011u32, 0b0101, 0b0110, 0b0111, 0b1001, 0b1010, 0b1011, 0b1100, 0b1101, 0b1110, 0b1111] {
        let mut writer = SegmentWriter::new();
        writer.bytes(b"OK")?.raw(mode, 4);
        // Would be a valid byte segment if the mode bits were read as a count
        writer.bytes(b"NO")?.terminator();

        let report = decode_with_report(&writer.to_codewords());
        assert_eq!(report.data, b"OK");
        assert_eq!(report.halt, Halt::UnsupportedMode(mode as u8));
        assert_eq!(report.bits_consumed, 4 + 8 + 16 + 4);
    }
    Ok(())
}

#[test]
fn test_kanji_segment_is_skipped() -> Result<(), ToolError> {
    let mut writer = SegmentWriter::new();
    writer.bytes(b"A")?.raw(0b1000, 4).raw(3, 8);
    // Kanji payload bits are never interpreted
    for _ in 0..3 {
        writer.raw(0x1FFF, 13);
    }
    writer.bytes(b"B")?.terminator();

    let report = decode_with_report(&writer.to_codewords());
    assert_eq!(report.data, b"AB");
    assert_eq!(report.segments, 3);
    assert_eq!(report.bits_consumed, 20 + 12 + 39 + 20 + 4);
    Ok(())
}

#[test]
fn test_kanji_skip_past_end() -> Result<(), ToolError> {
    let mut writer = SegmentWriter::new();
    writer.bytes(b"Z")?.raw(0b1000, 4).raw(200, 8);
    let codewords = writer.to_codewords();

    let report = decode_with_report(&codewords);
    assert_eq!(report.data, b"Z");
    assert_eq!(report.halt, Halt::Exhausted);
    assert_eq!(report.bits_consumed, codewords.len() * 8);
    Ok(())
}

#[test]
fn test_arbitrary_bytes_never_panic() {
    // Deterministic LCG so failures are reproducible
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    for len in 0..256usize {
        let buffer: Vec<u8> = (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 56) as u8
            })
            .collect();
        let report = decode_with_report(&buffer);
        assert!(report.bits_consumed <= len * 8);
        assert_eq!(report.data, decode(&buffer));
    }
}

#[test]
fn test_batch_matches_single() -> Result<(), ToolError> {
    let mut buffers = Vec::new();
    for word in ["ALPHA", "BETA", "GAMMA"] {
        let mut writer = SegmentWriter::new();
        writer.alphanumeric(word)?.terminator();
        buffers.push(writer.to_codewords());
    }
    buffers.push(Vec::new());

    let expected: Vec<Vec<u8>> = buffers.iter().map(|b| decode(b)).collect();
    assert_eq!(decode_batch(&buffers), expected);
    Ok(())
}

#[test]
fn test_scan_session_delivers_raw_bytes() -> Result<(), ToolError> {
    let payload = [0x00u8, 0x9F, 0xFF, 0x10];
    let mut writer = SegmentWriter::new();
    writer.bytes(&payload)?.terminator();
    let detection = Detection::qr(
        String::from_utf8_lossy(&payload),
        "QR_CODE",
        writer.to_codewords(),
    );

    let mut session = ScanSession::with_confirmations(["QR_CODE"], 2);
    assert!(session.process(std::slice::from_ref(&detection)).is_none());
    let barcode = session
        .process(std::slice::from_ref(&detection))
        .expect("delivered on second frame");
    assert_eq!(barcode, Barcode::from_detection(&detection));
    assert_eq!(barcode.raw_bytes, payload);
    Ok(())
}
