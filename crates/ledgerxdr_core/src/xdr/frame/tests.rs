use crate::xdr::frame::{Frames, RecordIter, write_framed};
use crate::xdr::{Asset, DecodeOptions, XdrError};

#[test]
fn records_round_trip() {
	let values = vec![7_u32, 8, 9];
	let stream = write_framed(&values).expect("frame");
	assert_eq!(&stream[..8], &[0x80, 0, 0, 4, 0, 0, 0, 7]);
	let back: Vec<u32> = Frames::new(&stream).collect::<Result<_, _>>().expect("decode");
	assert_eq!(back, values);
}

#[test]
fn fragments_are_reassembled() {
	let stream = [0, 0, 0, 2, 0, 0, 0x80, 0, 0, 2, 0, 5];
	let records: Vec<_> = RecordIter::new(&stream).collect::<Result<_, _>>().expect("records");
	assert_eq!(records.len(), 1);
	assert_eq!(records[0].fragments, 2);
	let values: Vec<u32> = Frames::new(&stream).collect::<Result<_, _>>().expect("decode");
	assert_eq!(values, vec![5]);
}

#[test]
fn truncated_fragment_is_invalid_frame() {
	let stream = [0x80, 0, 0, 8, 0, 0, 0, 1];
	let err = RecordIter::new(&stream).next().expect("one item").expect_err("short");
	assert!(matches!(err, XdrError::InvalidFrame { at: 0, .. }));
}

#[test]
fn missing_last_fragment_is_invalid_frame() {
	let stream = [0, 0, 0, 4, 0, 0, 0, 1];
	let err = RecordIter::new(&stream).next().expect("one item").expect_err("unterminated");
	assert!(matches!(err, XdrError::InvalidFrame { at: 8, .. }));
}

#[test]
fn record_with_slack_bytes_is_rejected_even_when_lenient() {
	let stream = [0x80, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0];
	let mut frames = Frames::<Asset>::with_options(&stream, DecodeOptions::lenient());
	let err = frames.next().expect("one item").expect_err("slack");
	assert!(matches!(err, XdrError::TrailingBytes { leftover: 4 }));
	assert!(frames.next().is_none());
}
