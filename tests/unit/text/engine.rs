use super::*;

fn body() -> FontFace {
    FontFace::Builtin { size_px: 20.0 }
}

#[test]
fn builtin_shape_matches_measurement() {
    let mut engine = TextEngine::new();
    let shaped = engine.shape("Privado", &body(), Rgba8::WHITE).unwrap();
    let extent = engine.extent("Privado", &body()).unwrap();
    assert_eq!(shaped.extent(), extent);
    assert_eq!(extent.width, 70.0);
    assert_eq!(extent.height, 20.0);
}

#[test]
fn wrap_uses_face_metrics() {
    let mut engine = TextEngine::new();
    let lines = engine.wrap("a b c", &body(), 30.0).unwrap();
    assert_eq!(lines, vec!["a b", "c"]);
}

#[test]
fn bitmap_shape_carries_color() {
    let mut engine = TextEngine::new();
    let color = Rgba8::rgb(1, 2, 3);
    match engine.shape("x", &body(), color).unwrap() {
        Shaped::Bitmap { color: c, rects, .. } => {
            assert_eq!(c, color);
            assert!(!rects.is_empty());
        }
        Shaped::Outline { .. } => panic!("built-in face shaped as outline"),
    }
}
