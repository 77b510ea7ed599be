use serialization::*;

const SAMPLE: [u32; 9] = [10, 100000, 65999, 10, 10, 0, 1, 1, 2000];

#[test]
fn test_round_trip_sample() {
    let buf = compress(&SAMPLE);
    assert_eq!(uncompress(&buf).unwrap(), SAMPLE.to_vec());
}

#[test]
fn test_predicted_size_matches_buffer() {
    let buf = compress(&SAMPLE);
    assert_eq!(compute_compressed_size_in_bytes(&SAMPLE), buf.len());
    // 10, 10, 10, 0, 1, 1 take one byte; 2000 two; 65999 and 100000 three.
    assert_eq!(buf.len(), 6 + 2 + 3 + 3);
}

#[test]
fn test_how_many_integers() {
    let buf = compress(&SAMPLE);
    assert_eq!(compute_how_many_integers(&buf), SAMPLE.len());
    assert_eq!(compute_how_many_integers(&[]), 0);
}

#[test]
fn test_full_range_values() {
    let values = [0, 127, 128, 16383, 16384, (1 << 28) - 1, 1 << 28, u32::MAX];
    let buf = compress(&values);
    assert_eq!(buf.len(), compute_compressed_size_in_bytes(&values));
    assert_eq!(buf.len(), 1 + 1 + 2 + 2 + 3 + 4 + 5 + 5);
    assert_eq!(uncompress(&buf).unwrap(), values.to_vec());
}

#[test]
fn test_signed_round_trip() {
    let values = [0, -1, 1, -64, 64, -100000, 100000, i32::MIN, i32::MAX];
    let buf = compress_signed(&values);
    assert_eq!(buf.len(), compute_compressed_size_in_bytes_signed(&values));
    assert_eq!(compute_how_many_integers(&buf), values.len());
    assert_eq!(uncompress_signed(&buf).unwrap(), values.to_vec());
}

#[test]
fn test_small_negatives_stay_short() {
    let buf = compress_signed(&[-1, -2, -63, -64]);
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_truncated_buffer_is_rejected() {
    let mut buf = compress(&[10, 100000]);
    buf.pop();
    assert_eq!(uncompress(&buf), Err(DecodeError::Truncated { offset: 3 }));
    assert_eq!(
        uncompress_signed(&[0x80]),
        Err(DecodeError::Truncated { offset: 1 })
    );
}

#[test]
fn test_oversized_fifth_byte_is_rejected() {
    let buf = [0xFF, 0xFF, 0xFF, 0xFF, 0x1F];
    assert_eq!(uncompress(&buf), Err(DecodeError::Overflow { offset: 4 }));
}

#[test]
fn test_empty_input() {
    assert!(compress(&[]).is_empty());
    assert_eq!(uncompress(&[]).unwrap(), Vec::<u32>::new());
    assert_eq!(compute_compressed_size_in_bytes(&[]), 0);
}
