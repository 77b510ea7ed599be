use common::shapes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_new_and_getters() {
    let rect = Rectangle::new(2, 3, 4);
    assert_eq!(rect.width(), 4);
    assert_eq!(rect.left(), 2);
    assert_eq!(rect.right(), 6);
    assert_eq!(rect.top(), 3);
    assert_eq!(rect.bottom(), 7);
    assert_eq!(rect.top_left(), (2, 3));
}

#[test]
fn test_edges_near_u32_max_saturate() {
    let rect = Rectangle::new(u32::MAX - 2, 5, 4);
    assert!(rect.overflows());
    assert_eq!(rect.right(), u32::MAX);
    assert_eq!(rect.bottom(), 9);
    assert!(rect.contains_pixel(u32::MAX - 1, 6));
    assert!(!Rectangle::new(u32::MAX - 4, 0, 4).overflows());
}

#[test]
fn test_contains_point_half_open() {
    let rect = Rectangle::new(0, 0, 4);
    assert!(rect.contains_point(0.0, 0.0));
    assert!(!rect.contains_point(4.0, 0.0));
    assert!(rect.contains_point(3.0, 3.0));
    assert!(rect.contains_point(3.99, 3.99));
    assert!(!rect.contains_point(0.0, 4.0));
    assert!(!rect.contains_point(-0.5, 1.0));
}

#[test]
fn test_contains_pixel() {
    let rect = Rectangle::new(4, 4, 4);
    assert!(rect.contains_pixel(4, 4));
    assert!(rect.contains_pixel(7, 7));
    assert!(!rect.contains_pixel(8, 4));
    assert!(!rect.contains_pixel(3, 5));
}

#[test]
fn test_intersects_rectangle() {
    let rect = Rectangle::new(0, 0, 4);
    assert!(rect.intersects_rectangle(&Rectangle::new(2, 2, 4)));
    assert!(rect.intersects_rectangle(&Rectangle::new(4, 0, 4)));
    assert!(!rect.intersects_rectangle(&Rectangle::new(5, 5, 2)));
}

#[test]
fn test_quadrants_tile_even_width() {
    let rect = Rectangle::new(8, 16, 8);
    let quadrants = rect.quadrants();
    assert_eq!(quadrants[0], Rectangle::new(8, 16, 4));
    assert_eq!(quadrants[1], Rectangle::new(12, 16, 4));
    assert_eq!(quadrants[2], Rectangle::new(8, 20, 4));
    assert_eq!(quadrants[3], Rectangle::new(12, 20, 4));

    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            let owners = quadrants.iter().filter(|q| q.contains_pixel(x, y)).count();
            assert_eq!(owners, 1, "pixel ({}, {}) covered {} times", x, y, owners);
        }
    }
}

#[test]
fn test_quadrants_odd_width_leave_gap() {
    let rect = Rectangle::new(0, 0, 5);
    let quadrants = rect.quadrants();
    assert!(quadrants.iter().all(|q| q.width() == 2));
    // Floor halving leaves the last column and row uncovered.
    assert!(quadrants.iter().all(|q| !q.contains_pixel(4, 0)));
    assert!(quadrants.iter().all(|q| !q.contains_pixel(0, 4)));
}

#[test]
fn test_random_point_inside() {
    let rect = Rectangle::new(10, 20, 30);

    // Use a fixed seed for reproducibility.
    let mut rng: StdRng = SeedableRng::seed_from_u64(123);

    for _ in 0..100 {
        let point = rect.random_point_inside(&mut rng);
        assert!(rect.contains_point(point.x, point.y));
    }
}
