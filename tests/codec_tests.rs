use lsb_stego::codec::{decode, deserialize, encode, serialize, PixelBuffer, TERMINATOR};
use lsb_stego::StegoError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn noisy_image(rng: &mut StdRng, width: u32, height: u32) -> PixelBuffer {
    let data = (0..width * height * 4).map(|_| rng.gen()).collect();
    PixelBuffer::new(width, height, data).unwrap()
}

fn latin1_message(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen::<u8>()))
        .filter(|c| *c != '|')
        .collect()
}

#[test]
fn test_black_image_round_trip_keeps_alpha() {
    let image = PixelBuffer::filled(100, 100, [0, 0, 0, 255]);
    assert_eq!(image.as_bytes().len(), 40_000);

    let encoded = encode(image, "ok").unwrap();
    assert_eq!(decode(&encoded).unwrap(), "ok");
    assert!(encoded.as_bytes().chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn test_tiny_white_image_is_too_small() {
    let image = PixelBuffer::filled(2, 2, [255, 255, 255, 255]);
    assert_eq!(
        encode(image, "hi"),
        Err(StegoError::Capacity {
            required: 72,
            available: 12
        })
    );
}

#[test]
fn test_capacity_boundary() {
    // "ab" + terminator = 9 chars = 72 bits = exactly 24 pixels.
    assert_eq!(serialize(&format!("ab{}", TERMINATOR)).len(), 72);

    let exact = PixelBuffer::filled(24, 1, [9, 9, 9, 9]);
    assert_eq!(exact.capacity_bits(), 72);
    let encoded = encode(exact, "ab").unwrap();
    assert_eq!(decode(&encoded).unwrap(), "ab");

    let one_char_more = PixelBuffer::filled(24, 1, [9, 9, 9, 9]);
    assert_eq!(
        encode(one_char_more, "abc"),
        Err(StegoError::Capacity {
            required: 80,
            available: 72
        })
    );

    let one_pixel_less = PixelBuffer::filled(23, 1, [9, 9, 9, 9]);
    assert!(matches!(
        encode(one_pixel_less, "ab"),
        Err(StegoError::Capacity { required: 72, available: 69 })
    ));
}

#[test]
fn test_random_round_trips() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let width = rng.gen_range(20..80);
        let height = rng.gen_range(20..80);
        let image = noisy_image(&mut rng, width, height);
        let max = lsb_stego::codec::max_message_chars(&image);
        let len = rng.gen_range(0..=max.min(300));
        let message = latin1_message(&mut rng, len);

        let encoded = encode(image, &message).unwrap();
        assert_eq!(decode(&encoded).unwrap(), message);
    }
}

#[test]
fn test_only_embedded_lsbs_change() {
    let mut rng = StdRng::seed_from_u64(42);
    let image = noisy_image(&mut rng, 64, 64);
    let message = "The quick brown fox";
    let bits = serialize(&format!("{}{}", message, TERMINATOR)).len();

    let encoded = encode(image.clone(), message).unwrap();
    let (before, after) = (image.as_bytes(), encoded.as_bytes());

    let mut written = 0;
    for (i, (a, b)) in before.iter().zip(after).enumerate() {
        if i % 4 == 3 {
            assert_eq!(a, b, "alpha byte {} changed", i);
        } else if written < bits {
            assert_eq!(a & 0xFE, b & 0xFE, "high bits of byte {} changed", i);
            written += 1;
        } else {
            assert_eq!(a, b, "byte {} past the payload changed", i);
        }
    }
    assert_eq!(written, bits);
}

#[test]
fn test_plain_images_have_no_message() {
    let white = PixelBuffer::filled(50, 50, [255, 255, 255, 255]);
    let black = PixelBuffer::filled(50, 50, [0, 0, 0, 255]);
    assert_eq!(decode(&white), Err(StegoError::NotFound));
    assert_eq!(decode(&black), Err(StegoError::NotFound));
}

#[test]
fn test_embedded_terminator_truncates_message() {
    let image = PixelBuffer::filled(100, 100, [0, 0, 0, 255]);
    let encoded = encode(image, "before||END||after").unwrap();
    assert_eq!(decode(&encoded).unwrap(), "before");
}

#[test]
fn test_reencoding_overwrites_previous_message() {
    let image = PixelBuffer::filled(100, 100, [0, 0, 0, 255]);
    let first = encode(image, "a much longer first message").unwrap();
    let second = encode(first, "short").unwrap();
    assert_eq!(decode(&second).unwrap(), "short");
}

#[test]
fn test_serializer_inverse() {
    let mut rng = StdRng::seed_from_u64(7);
    for len in [0, 1, 7, 64, 500] {
        let text: String = (0..len).map(|_| char::from(rng.gen::<u8>())).collect();
        assert_eq!(deserialize(&serialize(&text)), text);
    }
}
