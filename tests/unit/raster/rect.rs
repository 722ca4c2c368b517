use crate::foundation::color::Color;

use super::*;

const RED: Color = Color(0xFF0000FF);

fn covered(buf: &[u32], width: usize) -> Vec<(usize, usize)> {
    buf.iter()
        .enumerate()
        .filter(|&(_, &p)| p != 0)
        .map(|(i, _)| (i % width, i / width))
        .collect()
}

#[test]
fn rect_covers_exactly_its_cells() {
    let mut buf = vec![0u32; 100];
    let mut c = Canvas::new(&mut buf, 10, 10).unwrap();
    c.clear();
    c.rect(2, 2, 5, 5, RED);
    for (i, &p) in buf.iter().enumerate() {
        let (x, y) = (i % 10, i / 10);
        let inside = (2..=6).contains(&x) && (2..=6).contains(&y);
        assert_eq!(p, if inside { RED.0 } else { 0 }, "({x},{y})");
    }
}

#[test]
fn negative_size_matches_positive_mirror() {
    let mut a = vec![0u32; 64];
    let mut b = vec![0u32; 64];
    Canvas::new(&mut a, 8, 8).unwrap().rect(1, 2, 4, 3, RED);
    Canvas::new(&mut b, 8, 8).unwrap().rect(4, 4, -4, -3, RED);
    assert_eq!(a, b);
}

#[test]
fn off_canvas_and_empty_touch_nothing() {
    let mut buf = vec![0u32; 64];
    let mut c = Canvas::new(&mut buf, 8, 8).unwrap();
    c.rect(8, 0, 4, 4, RED);
    c.rect(-5, -5, 5, 5, RED);
    c.rect(3, 3, 0, 4, RED);
    assert!(covered(&buf, 8).is_empty());
}

#[test]
fn clipped_rect_fills_visible_part() {
    let mut buf = vec![0u32; 16];
    let mut c = Canvas::new(&mut buf, 4, 4).unwrap();
    c.rect(3, -10, 100, 12, RED);
    assert_eq!(covered(&buf, 4), vec![(3, 0), (3, 1)]);
}
