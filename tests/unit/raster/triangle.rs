use crate::foundation::color::Color;

use super::*;

const RED: Color = Color(0xFF0000FF);

fn draw(w: usize, h: usize, v: [(i32, i32); 3], color: Color) -> Vec<u32> {
    let mut buf = vec![0u32; w * h];
    Canvas::new(&mut buf, w, h).unwrap().triangle(
        v[0].0, v[0].1, v[1].0, v[1].1, v[2].0, v[2].1, color,
    );
    buf
}

fn count(buf: &[u32]) -> usize {
    buf.iter().filter(|&&p| p != 0).count()
}

#[test]
fn right_triangle_fills_lower_left_half() {
    let buf = draw(5, 5, [(0, 0), (0, 4), (4, 4)], RED);
    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(buf[y * 5 + x] != 0, x <= y, "({x},{y})");
        }
    }
}

#[test]
fn flat_top_includes_whole_top_edge() {
    let buf = draw(8, 8, [(0, 0), (6, 0), (3, 6)], RED);
    for x in 0..=6 {
        assert_eq!(buf[x], RED.0, "x={x}");
    }
    assert_eq!(buf[7], 0);
}

#[test]
fn vertex_order_is_irrelevant() {
    let v = [(1, 2), (9, 5), (4, 11)];
    let base = draw(12, 12, v, RED);
    for p in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
        assert_eq!(draw(12, 12, [v[p[0]], v[p[1]], v[p[2]]], RED), base);
    }
}

#[test]
fn every_covered_pixel_is_blended_once() {
    let half = Color(0x800000FF);
    let buf = draw(16, 16, [(8, 1), (1, 8), (14, 14)], half);
    assert!(count(&buf) > 0);
    for &p in &buf {
        assert!(p == 0 || Color(p).a() == 0x80, "{p:#010x}");
    }
}

#[test]
fn collinear_vertices_draw_a_thin_line() {
    let buf = draw(5, 5, [(0, 0), (2, 2), (4, 4)], RED);
    assert_eq!(count(&buf), 5);
    for i in 0..5 {
        assert_eq!(buf[i * 5 + i], RED.0);
    }

    let buf = draw(4, 4, [(2, 1), (2, 1), (2, 1)], RED);
    assert_eq!(count(&buf), 1);
}

#[test]
fn zero_height_triangle_touches_only_anchor_columns() {
    let buf = draw(8, 8, [(1, 3), (6, 3), (4, 3)], RED);
    let lit: Vec<usize> = (0..8).filter(|&x| buf[3 * 8 + x] != 0).collect();
    assert_eq!(lit, vec![1, 4]);
    assert_eq!(count(&buf), 2);

    let half = Color(0x800000FF);
    let buf = draw(8, 8, [(5, 2), (0, 2), (5, 2)], half);
    assert_eq!(count(&buf), 1);
    assert_eq!(Color(buf[2 * 8 + 5]).a(), 0x80);
}

#[test]
fn off_canvas_and_extreme_triangles_are_safe() {
    assert_eq!(count(&draw(8, 8, [(-9, -9), (-2, -8), (-5, -1)], RED)), 0);
    let _ = draw(
        8,
        8,
        [(i32::MIN, i32::MIN), (i32::MAX, 0), (0, i32::MAX)],
        RED,
    );
}
