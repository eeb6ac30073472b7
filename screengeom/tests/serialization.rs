use assert_matches::assert_matches;
use screengeom::{
    load_from_file, load_into, restore_nested, save_to_file, Color, FieldValue, GRect,
    GeometryError, Rect, Rect2, Serializable, Snapshot, Vec2,
};

/// Container holding other serializable values, restored recursively.
#[derive(Debug, Clone, Default, PartialEq)]
struct Screen {
    name_hash: i64,
    bounds: Rect2,
    highlight: GRect,
    scale: f64,
}

impl Serializable for Screen {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with_field("name_hash", self.name_hash)
            .with_nested("bounds", &self.bounds)
            .with_nested("highlight", &self.highlight)
            .with_field("scale", self.scale)
    }

    fn restore_field(&mut self, name: &str, value: FieldValue) -> Result<bool, GeometryError> {
        match name {
            "name_hash" => self.name_hash = value.as_i64()?,
            "bounds" => restore_nested(&mut self.bounds, value)?,
            "highlight" => restore_nested(&mut self.highlight, value)?,
            "scale" => self.scale = value.as_f64()?,
            _ => return Ok(false),
        }

        Ok(true)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn round_trip<T: Serializable + Default>(value: &T) -> T {
    let blob = Serializable::serialize(value).expect("encoding failed");
    let mut restored = T::default();
    restored.deserialize(&blob).expect("decoding failed");
    restored
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("screengeom-{}-{name}.bin", std::process::id()))
}

#[test]
fn rect2_round_trip() {
    init_logger();
    let rect = Rect2::new(-1.5, 2.0, 10.25, 20.0);
    assert_eq!(round_trip(&rect), rect);
}

#[test]
fn rect_round_trip() {
    init_logger();
    let rect = Rect::new(-10, 5, 300, 0);
    assert_eq!(round_trip(&rect), rect);
}

#[test]
fn grect_round_trip_keeps_attributes() {
    init_logger();
    let grect = GRect::new(Rect::new(1, 2, 3, 4), Color::GREEN, true, false).unwrap();
    let restored = round_trip(&grect);
    assert_eq!(restored, grect);
    assert_eq!(restored.color(), Color::GREEN);
    assert!(restored.filled());
    assert!(!restored.visible());
}

#[test]
fn nested_container_round_trip() {
    init_logger();
    let screen = Screen {
        name_hash: 0x5eed,
        bounds: Rect2::from_xywh(0.0, 0.0, 1920.0, 1080.0),
        highlight: GRect::outline(Rect::new(100, 100, 50, 20)).unwrap(),
        scale: 1.25,
    };

    let restored = round_trip(&screen);
    assert_eq!(restored, screen);
    assert_eq!(restored.highlight.color(), Color::PINK);
}

#[test]
fn restored_rect2_is_canonical() {
    init_logger();
    let snapshot = Snapshot::new()
        .with_field("start", Vec2::new(10.0, 0.0))
        .with_field("end", Vec2::new(0.0, 10.0));

    let mut rect = Rect2::default();
    rect.restore(snapshot).unwrap();
    assert_eq!(rect.start(), Vec2::new(0.0, 0.0));
    assert_eq!(rect.end(), Vec2::new(10.0, 10.0));
}

#[test]
fn restored_grect_is_validated() {
    init_logger();
    let snapshot = Snapshot::new().with_field(
        "rect",
        Snapshot::new()
            .with_field("width", -5)
            .with_field("height", 5),
    );

    let mut grect = GRect::default();
    assert_matches!(
        grect.restore(snapshot),
        Err(GeometryError::InvariantViolation(_))
    );
    assert_eq!(grect.rect(), Rect::default());
    assert!(grect.rect().is_valid());

    let snapshot = Snapshot::new().with_field("color", vec![1.0, 2.0]);
    assert_matches!(
        GRect::default().restore(snapshot),
        Err(GeometryError::InvariantViolation(_))
    );
}

#[test]
fn failed_restore_leaves_rect2_canonical() {
    init_logger();
    let snapshot = Snapshot::new()
        .with_field("start", Vec2::new(10.0, 10.0))
        .with_field("end", true);

    let mut rect = Rect2::new(1.0, 2.0, 3.0, 4.0);
    assert_matches!(
        rect.restore(snapshot),
        Err(GeometryError::TypeMismatch { .. })
    );
    assert_eq!(rect, Rect2::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn failed_nested_restore_keeps_container() {
    init_logger();
    let screen = Screen {
        name_hash: 7,
        bounds: Rect2::from_xywh(0.0, 0.0, 640.0, 480.0),
        highlight: GRect::outline(Rect::new(1, 1, 2, 2)).unwrap(),
        scale: 1.0,
    };
    let snapshot = Snapshot::new()
        .with_field("name_hash", 8)
        .with_field("bounds", Rect2::from_xywh(0.0, 0.0, 10.0, 10.0).snapshot())
        .with_field(
            "highlight",
            Snapshot::new().with_nested("rect", &Rect::new(0, 0, 5, -1)),
        );

    let mut restored = screen.clone();
    assert_matches!(
        restored.restore(snapshot),
        Err(GeometryError::InvariantViolation(_))
    );
    assert_eq!(restored, screen);
    assert_eq!(restored.name_hash, 7);
}

#[test]
fn unknown_fields_are_ignored() {
    init_logger();
    let snapshot = Rect::new(1, 2, 3, 4)
        .snapshot()
        .with_field("rotation", 90.0);

    let mut rect = Rect::default();
    rect.restore(snapshot).unwrap();
    assert_eq!(rect, Rect::new(1, 2, 3, 4));
}

#[test]
fn rect_accepts_float_fields() {
    let mut rect = Rect::default();
    rect.restore(Snapshot::new().with_field("x", 7.9)).unwrap();
    assert_eq!(rect.x, 7);

    assert_matches!(
        rect.restore(Snapshot::new().with_field("y", true)),
        Err(GeometryError::TypeMismatch { .. })
    );
}

#[test]
fn file_helpers() {
    init_logger();
    let path = temp_path("grect");
    let grect = GRect::new(Rect::new(5, 6, 7, 8), Color::BLUE, false, true).unwrap();

    save_to_file(&path, &grect).unwrap();
    let loaded: GRect = load_from_file(&path).unwrap();
    assert_eq!(loaded, grect);
    assert_eq!(loaded.color(), Color::BLUE);

    let receiver = GRect::outline(Rect::new(0, 0, 1, 1)).unwrap();
    let loaded = load_into(&path, receiver).unwrap();
    assert_eq!(loaded.rect(), grect.rect());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_file() {
    init_logger();
    let result = load_from_file::<Rect>(temp_path("does-not-exist"));
    assert_matches!(result, Err(GeometryError::FsIo(_)));
}
