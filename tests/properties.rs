use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pixel_hide::processing::rotate_quarter;
use pixel_hide::{encode_message, extract, hide, rotate, PixelBuffer, PixelError, Rotation};

fn random_buffer(rng: &mut StdRng, width: usize, height: usize) -> PixelBuffer {
    let data = (0..width * height * 3).map(|_| rng.gen::<u8>()).collect();
    PixelBuffer::from_raw(width, height, data).unwrap()
}

fn random_letters(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| char::from(b'A' + rng.gen_range(0..26u8))).collect()
}

#[test]
fn test_rotation_involution() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let width = rng.gen_range(1..20);
        let height = rng.gen_range(1..20);
        let buf = random_buffer(&mut rng, width, height);

        let cw = rotate(&buf, 90).unwrap();
        assert_eq!((cw.width(), cw.height()), (height, width));
        assert_eq!(rotate(&cw, -90).unwrap(), buf);

        let ccw = rotate(&buf, -90).unwrap();
        assert_eq!((ccw.width(), ccw.height()), (height, width));
        assert_eq!(rotate(&ccw, 90).unwrap(), buf);

        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            let turned = rotate_quarter(&buf, rotation);
            assert_eq!(rotate_quarter(&turned, rotation.inverse()), buf);
        }
    }
}

#[test]
fn test_hide_extract_round_trip_with_wraparound() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let width = rng.gen_range(1..16);
        let height = rng.gen_range(1..16);
        // Random red bytes make some additions wrap past 255.
        let cover = random_buffer(&mut rng, width, height);
        let len = rng.gen_range(0..=cover.capacity());
        let message = random_letters(&mut rng, len);

        let before = cover.clone();
        let stego = hide(&cover, &message).unwrap();

        assert_eq!(cover, before);
        assert_eq!(extract(&cover, &stego, len).unwrap(), message);
    }
}

#[test]
fn test_only_red_channel_changes() {
    let mut rng = StdRng::seed_from_u64(3);
    let cover = random_buffer(&mut rng, 9, 9);
    let stego = hide(&cover, &random_letters(&mut rng, 81)).unwrap();

    for (x, y, [_, g, b]) in stego.enumerate_pixels() {
        let [_, g0, b0] = cover.pixel(x, y);
        assert_eq!((g, b), (g0, b0));
    }
}

#[test]
fn test_null_extraction_any_length() {
    let mut rng = StdRng::seed_from_u64(11);
    let cover = random_buffer(&mut rng, 5, 3);

    for n in 0..=cover.capacity() {
        assert_eq!(extract(&cover, &cover, n).unwrap(), "A".repeat(n));
    }
}

#[test]
fn test_capacity_guard_counts_letters_only() {
    let cover = PixelBuffer::new(3, 3);
    let text = "some letters! 123 ok";
    assert_eq!(encode_message(text).len(), 13);

    match hide(&cover, text) {
        Err(PixelError::MessageTooLong { required, capacity }) => {
            assert_eq!(required, 13);
            assert_eq!(capacity, 9);
        }
        other => panic!("expected MessageTooLong, got {:?}", other),
    }
}
