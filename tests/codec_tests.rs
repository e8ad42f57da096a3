use pixel_hide::{extract, hide, FileCodec, ImageCodec, PixelBuffer, PixelError};

fn sample(width: usize, height: usize) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buf.put_pixel(x, y, [(x * 17) as u8, (y * 23) as u8, ((x + y) * 5) as u8]);
        }
    }
    buf
}

#[test]
fn test_png_save_load_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    let codec = FileCodec::new();

    let original = sample(7, 5);
    codec.save(&original, &path).unwrap();
    let loaded = codec.load(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_hidden_message_survives_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hidden.png");
    let codec = FileCodec::new();

    let cover = sample(4, 4);
    codec.save(&hide(&cover, "HACK").unwrap(), &path).unwrap();
    let reloaded = codec.load(&path).unwrap();

    assert_eq!(extract(&cover, &reloaded, 4).unwrap(), "HACK");
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileCodec::new().load(&dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, PixelError::Io(_)));
}

#[test]
fn test_load_garbage_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let err = FileCodec::new().load(&path).unwrap_err();
    assert!(matches!(err, PixelError::Decode(_)));
}
