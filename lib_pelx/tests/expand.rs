mod common;

use common::{checker_container, two_pixel_container, OVERWORLD, POISON};
use lib_pelx::{
    expand, expand_with, index_pixels, Channels, Container, ErrorKind, ExpandError,
    ExpandOptions, Header, MemorySink, NullSink, StreamBuilder,
};

#[test]
fn test_expand_rgba_scenario() {
    let pixels = expand(
        &two_pixel_container(),
        &OVERWORLD,
        &ExpandOptions::new(4).unwrap(),
    )
    .unwrap();
    assert_eq!(pixels, vec![0xEA, 0x9E, 0x22, 0xFF, 0x11, 0x22, 0x33, 0x44]);
}

#[test]
fn test_expand_rgb_scenario() {
    let pixels = expand(
        &two_pixel_container(),
        &OVERWORLD,
        &ExpandOptions::new(3).unwrap(),
    )
    .unwrap();
    assert_eq!(pixels, vec![0xEA, 0x9E, 0x22, 0x11, 0x22, 0x33]);
}

#[test]
fn test_expand_all_void() {
    let header = Header::new(5, 3, Channels::Rgb, Channels::Rgba, 1);
    let container = Container::new(header, vec![0x00; 15]);

    for channels in [3, 4] {
        let options = ExpandOptions::new(channels).unwrap();
        let pixels = expand(&container, &OVERWORLD, &options).unwrap();
        assert_eq!(pixels.len(), 5 * 3 * channels as usize);
        assert!(pixels.iter().all(|&b| b == 0));
    }
}

#[test]
fn test_expand_palette_swap() {
    let container = checker_container();
    let options = ExpandOptions::new(4).unwrap();

    let overworld = expand(&container, &OVERWORLD, &options).unwrap();
    let poison = expand(&container, &POISON, &options).unwrap();

    assert_eq!(overworld.len(), 4 * 4 * 4);
    assert_eq!(&overworld[..4], &[0xEA, 0x9E, 0x22, 0xFF]);
    assert_eq!(&poison[..4], &[0x9D, 0x5D, 0x00, 0xFF]);
    // Void pixels are untouched by the palette.
    assert_eq!(&overworld[20..24], &[0, 0, 0, 0]);
    assert_eq!(&poison[20..24], &[0, 0, 0, 0]);
}

#[test]
fn test_expand_index_out_of_range() {
    let mut container = two_pixel_container();
    container.body = vec![0x02, 0x02, 0x00];

    let err = expand(&container, &OVERWORLD, &ExpandOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ExpandError::PaletteIndexOutOfRange { index: 2, len: 2 }
    ));
    assert_eq!(err.kind(), ErrorKind::PaletteIndexOutOfRange);
}

#[test]
fn test_expand_index_checked_against_supplied_palette() {
    // Header declares two palettes, only one is supplied.
    let err = expand(&two_pixel_container(), &[], &ExpandOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ExpandError::PaletteIndexOutOfRange { index: 0, len: 0 }
    ));
}

#[test]
fn test_expand_invalid_tag_anywhere() {
    for position in 0..3 {
        let mut body = vec![0x00; 3];
        body[position] = 0x03;
        let header = Header::new(3, 1, Channels::Rgb, Channels::Rgb, 1);
        let container = Container::new(header, body);

        let err = expand_with(
            &container,
            &OVERWORLD,
            &ExpandOptions::default(),
            &NullSink,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ExpandError::InvalidTag { tag: 0x03, position: p } if p == position
        ));
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}

#[test]
fn test_expand_rejects_short_and_long_streams() {
    let header = Header::new(2, 2, Channels::Rgb, Channels::Rgb, 1);
    let options = ExpandOptions::new(3).unwrap();

    let short = Container::new(header, vec![0x00; 3]);
    let sink = MemorySink::new();
    let err = expand_with(&short, &OVERWORLD, &options, &sink).unwrap_err();
    assert!(matches!(
        err,
        ExpandError::SizeMismatch {
            expected: 12,
            written: 9
        }
    ));
    assert_eq!(sink.messages().len(), 1);

    let long = Container::new(header, vec![0x00; 5]);
    let err = expand_with(&long, &OVERWORLD, &options, &NullSink).unwrap_err();
    assert!(matches!(err, ExpandError::TrailingData { remaining: 1 }));
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn test_expand_truncated_literal() {
    let mut container = two_pixel_container();
    container.body = vec![0x02, 0x00, 0x01, 0x11, 0x22];

    let err = expand(&container, &OVERWORLD, &ExpandOptions::default()).unwrap_err();
    assert!(matches!(err, ExpandError::TruncatedRecord { .. }));
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_expand_rejects_invalid_header() {
    let mut container = two_pixel_container();
    container.header.width = 0;

    let err = expand(&container, &OVERWORLD, &ExpandOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HeaderInvalid);
}

#[test]
fn test_index_then_expand() {
    let mut builder = StreamBuilder::new(Channels::Rgba);
    builder
        .palette(1)
        .void()
        .true_color([0x10, 0x20, 0x30, 0x40])
        .palette(0);
    let header = Header::new(2, 2, Channels::Rgba, Channels::Rgba, 2);
    let container = Container::new(header, builder.finish());

    let options = ExpandOptions::new(4).unwrap();
    let pixels = expand(&container, &OVERWORLD, &options).unwrap();

    let stream = index_pixels(
        &pixels,
        Channels::Rgba,
        &OVERWORLD,
        Channels::Rgba,
        Channels::Rgba,
    )
    .unwrap();
    assert_eq!(stream, container.body);
}
