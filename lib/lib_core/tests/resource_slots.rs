use std::sync::Once;

use lib_core::{MultiValue, OptionalValue, StorageError, TypeList, largest_of};

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    });
}

#[derive(Debug, Clone, PartialEq)]
struct TextureHandle {
    id: u32,
    label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SolidColor([f32; 4]);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gradient {
    from: [f32; 4],
    to: [f32; 4],
    angle: f32,
}

type Fill = (SolidColor, Gradient, TextureHandle);

#[test]
fn optional_handle_lifecycle() {
    init_tracing();

    let mut handle = OptionalValue::<TextureHandle>::new();
    assert_eq!(
        handle.get(),
        Err(StorageError::EmptyAccess {
            requested: std::any::type_name::<TextureHandle>(),
        })
    );

    handle.construct(TextureHandle {
        id: 4,
        label: "atlas".into(),
    });
    assert_eq!(handle.get().map(|h| h.id), Ok(4));

    handle.reset();
    assert!(!handle.has_value());

    handle.construct(TextureHandle {
        id: 5,
        label: "font".into(),
    });
    assert_eq!(handle.get().map(|h| h.label.as_str()), Ok("font"));
}

#[test]
fn fill_storage_uses_the_largest_member() {
    assert_eq!(<Fill as TypeList>::LARGEST, 1);
    assert_eq!(
        std::any::TypeId::of::<largest_of!(SolidColor, Gradient, TextureHandle)>(),
        std::any::TypeId::of::<Gradient>()
    );
    assert!(size_of::<<Fill as TypeList>::Storage>() >= size_of::<Gradient>());
}

#[test]
fn fill_switches_between_members() {
    init_tracing();

    let mut fill = MultiValue::<Fill>::with(SolidColor([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(fill.which(), Some(0));

    fill.set(Gradient {
        from: [0.0; 4],
        to: [1.0; 4],
        angle: 90.0,
    });
    assert_eq!(fill.which(), Some(1));
    assert!(matches!(
        fill.get::<SolidColor, _>(),
        Err(StorageError::TypeMismatch { .. })
    ));
    assert_eq!(fill.get::<Gradient, _>().map(|g| g.angle), Ok(90.0));

    fill.set(TextureHandle {
        id: 9,
        label: "noise".into(),
    });
    assert_eq!(fill.which(), Some(2));
    assert!(fill.get::<Gradient, _>().is_err());

    let texture = fill.take::<TextureHandle, _>();
    assert_eq!(texture.map(|t| t.id), Ok(9));
    assert!(fill.is_empty());
}

#[test]
fn optional_multi_value_nests() {
    let mut slot = OptionalValue::<MultiValue<(u32, String)>>::new();
    slot.construct(MultiValue::with(String::from("nested")));

    let inner = slot.get_mut().unwrap();
    assert!(inner.holds::<String, _>());
    inner.set(12u32);
    assert_eq!(slot.get().unwrap().get::<u32, _>(), Ok(&12));
}
