    use super::*;

    fn creator_code() -> TextField {
        TextField::new(FieldShape::code(Some(12)))
    }

    #[test]
    fn typed_code_is_uppercased_and_clamped() {
        let mut f = creator_code();
        f.type_str("abc-123-long-code-here");
        assert_eq!(f.value(), "ABC-123-LONG");
        assert_eq!(f.value().chars().count(), 12);
        assert_eq!(f.cursor(), 12);
    }

    #[test]
    fn clamp_holds_for_assorted_inputs() {
        let inputs = [
            "",
            "a",
            "mycode1",
            "exactly12chr",
            "straße-straße-straße",
            "ünïcödé-vålüés-everywhere",
            "0123456789abcdefghij",
            "   spaced   out   ",
        ];
        for input in inputs {
            let mut f = creator_code();
            f.type_str(input);
            assert!(f.value().chars().count() <= 12, "{:?} -> {:?}", input, f.value());
            assert_eq!(f.value(), f.value().to_uppercase(), "{:?}", input);
        }
    }

    #[test]
    fn unbounded_code_keeps_full_length() {
        let mut f = TextField::new(FieldShape::code(None));
        f.type_str("abc-123-long-code-here");
        assert_eq!(f.value(), "ABC-123-LONG-CODE-HERE");
    }

    #[test]
    fn insert_in_middle_of_full_field_drops_the_tail() {
        let mut f = creator_code();
        f.type_str("abcdefghijkl");
        for _ in 0..6 {
            f.move_left();
        }
        f.insert_char('x');
        assert_eq!(f.value(), "ABCDEFXGHIJK");
        assert_eq!(f.cursor(), 7);
    }

    #[test]
    fn plain_field_keeps_case() {
        let mut f = TextField::new(FieldShape::PLAIN);
        f.type_str("https://github.com/Acme/Tool");
        assert_eq!(f.value(), "https://github.com/Acme/Tool");
    }

    #[test]
    fn backspace_and_delete_respect_multibyte_chars() {
        let mut f = TextField::new(FieldShape::PLAIN);
        f.type_str("añb");
        f.move_left();
        f.backspace();
        assert_eq!(f.value(), "ab");
        assert_eq!(f.cursor(), 1);
        f.delete();
        assert_eq!(f.value(), "a");
        f.delete();
        assert_eq!(f.value(), "a");
    }

    #[test]
    fn set_applies_shape() {
        let mut f = creator_code();
        f.set("pasted-value-that-is-long");
        assert_eq!(f.value(), "PASTED-VALUE");
        assert_eq!(f.cursor(), 12);
        f.move_home();
        assert_eq!(f.cursor(), 0);
        f.move_end();
        assert_eq!(f.cursor(), 12);
    }
