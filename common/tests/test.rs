use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2.0, 3.0, 4.0, 6.0);
    assert_eq!(rect.width(), 4.0);
    assert_eq!(rect.height(), 6.0);
    assert_eq!(rect.left(), 2.0);
    assert_eq!(rect.right(), 6.0);
    assert_eq!(rect.top(), 3.0);
    assert_eq!(rect.bottom(), 9.0);
    assert_eq!(rect.size(), (4.0, 6.0));
    assert_eq!(rect.position(), Point::new(2.0, 3.0));
    assert_eq!(rect.center(), Point::new(4.0, 6.0));
}

#[test]
fn test_contains_point_on_border() {
    let rect = Rectangle::new(0.0, 0.0, 4.0, 6.0);
    assert!(rect.contains_point(Point::new(0.0, 0.0)));
    assert!(rect.contains_point(Point::new(4.0, 6.0)));
    assert!(rect.contains_point(Point::new(2.0, 3.0)));
    assert!(!rect.contains_point(Point::new(4.1, 3.0)));
    assert!(!rect.contains_point(Point::new(2.0, -0.1)));
}

#[test]
fn test_contains_rect() {
    let outer = Rectangle::new(0.0, 0.0, 8.0, 8.0);
    assert!(outer.contains_rect(&Rectangle::new(1.0, 1.0, 2.0, 2.0)));
    assert!(outer.contains_rect(&outer));
    assert!(outer.contains_rect(&Rectangle::new(6.0, 6.0, 2.0, 2.0)));
    assert!(!outer.contains_rect(&Rectangle::new(7.0, 7.0, 2.0, 2.0)));
    assert!(!outer.contains_rect(&Rectangle::new(-1.0, 0.0, 2.0, 2.0)));
}

#[test]
fn test_intersects_touching_edges() {
    let a = Rectangle::new(0.0, 0.0, 2.0, 2.0);
    let touching = Rectangle::new(2.0, 0.0, 2.0, 2.0);
    let corner = Rectangle::new(2.0, 2.0, 1.0, 1.0);
    let apart = Rectangle::new(2.5, 0.0, 1.0, 1.0);
    assert!(a.intersects(&touching));
    assert!(touching.intersects(&a));
    assert!(a.intersects(&corner));
    assert!(!a.intersects(&apart));
    assert!(!apart.intersects(&a));
}

#[test]
fn test_intersects_overlap_and_nested() {
    let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Rectangle::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.intersects(&Rectangle::new(2.0, 2.0, 1.0, 1.0)));
    assert!(Rectangle::new(2.0, 2.0, 1.0, 1.0).intersects(&a));
}

#[test]
fn test_translate_and_with_position() {
    let rect = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(rect.translate(2.0, -1.0), Rectangle::new(3.0, 1.0, 3.0, 4.0));
    assert_eq!(
        rect.with_position(Point::new(10.0, 10.0)),
        Rectangle::new(10.0, 10.0, 3.0, 4.0)
    );
}

#[test]
fn test_is_valid() {
    assert!(Rectangle::new(0.0, 0.0, 0.0, 0.0).is_valid());
    assert!(!Rectangle::new(0.0, 0.0, -1.0, 1.0).is_valid());
    assert!(!Rectangle::new(f32::NAN, 0.0, 1.0, 1.0).is_valid());
}

#[test]
fn test_point_math() {
    let a = Point::new(1.0, 1.0);
    let b = Point::new(4.0, 5.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(b - a, Point::new(3.0, 4.0));
    assert_eq!((b - a).normalized(), Point::new(0.6, 0.8));
    assert_eq!(Point::default().normalized(), Point::default());
    assert_eq!(Point::new(1.0, 2.0) * 2.0, Point::new(2.0, 4.0));
}

#[test]
fn test_random_inside() {
    let bounds = Rectangle::new(0.0, 0.0, 16.0, 16.0);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let rect = bounds.random_inside(2.0, 3.0, &mut rng);
        assert!(bounds.contains_rect(&rect));
        assert_eq!(rect.size(), (2.0, 3.0));
    }
}

#[test]
fn test_random_inside_too_large() {
    let bounds = Rectangle::new(4.0, 4.0, 2.0, 2.0);
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    let rect = bounds.random_inside(4.0, 4.0, &mut rng);
    // Clamped to the top-left corner when the rectangle cannot fit.
    assert_eq!(rect.position(), Point::new(4.0, 4.0));
}
