//! Unit tests for the Caesar letter rotation

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use shiftcrypt::cipher::{ShiftCipher, Transform as _};

    const PRINTABLE: &str =
        " !\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

    #[test]
    fn encodes_known_example() {
        let cipher = ShiftCipher::new(3);
        assert_eq!(cipher.encode("abcXYZ").unwrap(), "defABC");
        assert_eq!(cipher.decode("defABC").unwrap(), "abcXYZ");
    }

    #[test]
    fn decode_inverts_encode_for_printable_ascii() {
        for key in [-53, -26, -25, -1, 0, 1, 3, 13, 25, 26, 27, 100, i32::MAX, i32::MIN] {
            let cipher = ShiftCipher::new(key);
            let encoded = cipher.encode(PRINTABLE).unwrap();
            assert_eq!(cipher.decode(&encoded).unwrap(), PRINTABLE, "key {key}");
        }
    }

    #[test]
    fn leaves_non_letters_unchanged() {
        let cipher = ShiftCipher::new(11);
        let text = "0123456789 !?.,;:-_()[]{}\t\n";
        assert_eq!(cipher.encode(text).unwrap(), text);
        assert_eq!(cipher.decode(text).unwrap(), text);
    }

    #[test]
    fn preserves_case() {
        let cipher = ShiftCipher::new(17);
        let encoded = cipher.encode("abcdefghijklmnopqrstuvwxyz").unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii_lowercase()));

        let encoded = cipher.encode("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn key_26_is_identity() {
        let cipher = ShiftCipher::new(26);
        assert_eq!(cipher.encode("Hello, World").unwrap(), "Hello, World");
        assert_eq!(cipher.decode("Hello, World").unwrap(), "Hello, World");
        assert_eq!(cipher, ShiftCipher::new(0));
    }

    #[test]
    fn negative_key_rotates_left() {
        let cipher = ShiftCipher::new(-1);
        assert_eq!(cipher, ShiftCipher::new(25));
        assert_eq!(cipher.encode("abcA").unwrap(), "zabZ");
        assert_eq!(cipher.decode("zabZ").unwrap(), "abcA");
    }
}
