mod rect;
mod window;

pub use rect::*;
pub use window::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_display() {
        let r = Rect::new(-1080, 25, 1079, 708);
        assert_eq!(r.to_string(), "(-1080,25) 1079x708");
    }

    #[test]
    fn rect_accessors() {
        let r = Rect::new(10, 20, 800, 600);
        assert_eq!(r.position(), (10, 20));
        assert_eq!(r.size(), (800, 600));
    }

    #[test]
    fn target_serializes_flat() {
        let t = Target::new("Slack", Rect::new(0, 25, 1440, 897)).with_index(2);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "app": "Slack",
                "index": 2,
                "x": 0,
                "y": 25,
                "width": 1440,
                "height": 897
            })
        );
    }

    #[test]
    fn target_without_index_omits_key() {
        let t = Target::new("zed", Rect::new(0, 25, 1437, 1415));
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("index"));
    }

    #[test]
    fn target_parses_hand_written_entry() {
        let t: Target = serde_json::from_str(
            r#"{ "app": "ghostty", "x": -1693, "y": 1311, "width": 1692, "height": 1421 }"#,
        )
        .unwrap();
        assert_eq!(t.app, "ghostty");
        assert_eq!(t.index, None);
        assert_eq!(t.rect, Rect::new(-1693, 1311, 1692, 1421));
    }

    #[test]
    fn live_window_to_target_keeps_index_hint() {
        let w = LiveWindow {
            app: "Arc".into(),
            index: 3,
            rect: Rect::new(1438, 25, 2002, 1415),
            standard: true,
            minimized: false,
        };
        let t = w.to_target();
        assert_eq!(t.app, "Arc");
        assert_eq!(t.index, Some(3));
        assert_eq!(t.rect, w.rect);
    }

    #[test]
    fn target_rounds_real_coordinates() {
        let t: Target = serde_json::from_str(
            r#"{ "app": "zed", "x": 0, "y": 25.5, "width": 1436.6, "height": -3.2 }"#,
        )
        .unwrap();
        assert_eq!(t.rect, Rect::new(0, 26, 1437, -3));
    }

    #[test]
    fn target_ignores_unusable_index_hints() {
        let parse = |index: &str| -> Option<u32> {
            let json = format!(
                r#"{{ "app": "zed", "index": {index}, "x": 0, "y": 0, "width": 1, "height": 1 }}"#
            );
            serde_json::from_str::<Target>(&json).unwrap().index
        };
        assert_eq!(parse("2"), Some(2));
        assert_eq!(parse("2.0"), Some(2));
        assert_eq!(parse("0"), None);
        assert_eq!(parse("-1"), None);
        assert_eq!(parse("1.5"), None);
        assert_eq!(parse("\"2\""), None);
        assert_eq!(parse("null"), None);
    }

    #[test]
    fn target_rejects_non_numeric_coordinates() {
        assert!(serde_json::from_str::<Target>(
            r#"{ "app": "zed", "x": "left", "y": 0, "width": 1, "height": 1 }"#
        )
        .is_err());
    }
}
