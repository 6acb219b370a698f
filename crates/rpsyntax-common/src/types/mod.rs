mod color;

pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ColorError;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
    }

    #[test]
    fn color_from_hex_6_mixed_case() {
        let c = Color::from_hex("#fF8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_6_decodes_every_byte_in_every_channel() {
        for value in 0..=255u8 {
            for position in 0..3 {
                let mut channels = [0x5au8; 3];
                channels[position] = value;
                let expected = Color::from_rgba(channels[0], channels[1], channels[2], 255);

                let lower: String = channels.iter().map(|c| format!("{c:02x}")).collect();
                let upper: String = channels.iter().map(|c| format!("{c:02X}")).collect();
                assert_eq!(Color::from_hex(&format!("#{lower}")), Ok(expected));
                assert_eq!(Color::from_hex(&upper), Ok(expected));
                assert_eq!(Color::from_hex(&expected.to_hex()), Ok(expected));
            }
        }
    }

    #[test]
    fn color_from_hex_8_decodes_every_byte_in_every_channel() {
        for value in 0..=255u8 {
            for position in 0..4 {
                let mut channels = [0xa5u8; 4];
                channels[position] = value;
                let [r, g, b, a] = channels;
                let expected = Color::from_rgba(r, g, b, a);

                let lower: String = channels.iter().map(|c| format!("{c:02x}")).collect();
                let upper: String = channels.iter().map(|c| format!("{c:02X}")).collect();
                assert_eq!(Color::from_hex(&format!("#{lower}")), Ok(expected));
                assert_eq!(Color::from_hex(&upper), Ok(expected));
                assert_eq!(Color::from_hex(&expected.to_hex()), Ok(expected));
            }
        }
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00FF00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_shorthand_duplicates_digits() {
        let short = Color::from_hex("#ABC").unwrap();
        let long = Color::from_hex("#AABBCC").unwrap();
        assert_eq!(short, long);
        assert_eq!(short, Color::from_rgba(0xaa, 0xbb, 0xcc, 255));
    }

    #[test]
    fn color_from_hex_shorthand_extremes() {
        assert_eq!(Color::from_hex("000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn color_from_hex_invalid_digits() {
        assert_eq!(
            Color::from_hex("#ZZZZZZ"),
            Err(ColorError::InvalidFormat("#ZZZZZZ".into()))
        );
        assert!(Color::from_hex("#12345g").is_err());
    }

    #[test]
    fn color_from_hex_invalid_lengths() {
        for input in ["", "#", "#1", "#12", "#1234", "#12345", "#1234567", "#123456789"] {
            assert!(
                matches!(Color::from_hex(input), Err(ColorError::InvalidFormat(_))),
                "expected InvalidFormat for {input:?}"
            );
        }
    }

    #[test]
    fn color_from_hex_rejects_signs_and_whitespace() {
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex(" #ffffff").is_err());
        assert!(Color::from_hex("#ffffff ").is_err());
        assert!(Color::from_hex("##ffffff").is_err());
    }

    #[test]
    fn color_from_hex_rejects_non_ascii() {
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("ffé").is_err());
    }

    #[test]
    fn color_from_str_matches_from_hex() {
        let parsed: Color = "#336699".parse().unwrap();
        assert_eq!(parsed, Color::from_hex("#336699").unwrap());
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn color_to_normalized() {
        let c = Color::from_hex("#FF0000").unwrap();
        assert_eq!(c.to_normalized(), [1.0, 0.0, 0.0, 1.0]);

        let c = Color::from_rgba(0, 0, 0, 0);
        assert_eq!(c.to_normalized(), [0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn color_normalized_channels_stay_in_unit_range() {
        let c = Color::from_hex("#80ff0040").unwrap();
        for channel in c.to_normalized() {
            assert!((0.0..=1.0).contains(&channel));
        }
    }

    #[test]
    fn color_from_normalized_clamps() {
        let c = Color::from_normalized([1.5, -0.2, 0.5, f32::NAN]);
        assert_eq!(c, Color::from_rgba(255, 0, 128, 0));
    }

    #[test]
    fn color_from_normalized_inverts_to_normalized() {
        let original = Color::from_rgba(12, 200, 77, 255);
        assert_eq!(Color::from_normalized(original.to_normalized()), original);
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgba(255, 0, 128, 255);
        assert_eq!(c.to_hex(), "#ff0080");
        assert_eq!(c.to_string(), "#ff0080");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
    }

    #[test]
    fn color_to_rgba_string() {
        let c = Color::from_rgba(10, 20, 30, 255);
        assert_eq!(c.to_rgba_string(), "rgba(10,20,30,255)");
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgba(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":4}"#);
        let deserialized: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, deserialized);
    }

    #[test]
    fn color_constants() {
        assert!(Color::BLACK.is_opaque());
        assert!(Color::WHITE.is_opaque());
        assert!(!Color::TRANSPARENT.is_opaque());
    }
}
