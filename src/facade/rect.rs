//! `SDL_rect.h` 中的内联矩形宏
//!
//! 左/上边界在矩形内，右/下边界在矩形外；`w <= 0 || h <= 0` 为空；
//! 缺失的矩形视为空，且与任何矩形都不相等。

use crate::sys::{SDL_FPoint, SDL_FRect, SDL_Point, SDL_Rect};

pub fn point_in_rect(p: &SDL_Point, r: &SDL_Rect) -> bool {
    let (px, py) = (i64::from(p.x), i64::from(p.y));
    let (rx, ry) = (i64::from(r.x), i64::from(r.y));
    px >= rx && px < rx + i64::from(r.w) && py >= ry && py < ry + i64::from(r.h)
}

pub fn rect_empty(r: Option<&SDL_Rect>) -> bool {
    r.map_or(true, |r| r.w <= 0 || r.h <= 0)
}

pub fn rect_equals(a: Option<&SDL_Rect>, b: Option<&SDL_Rect>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.x == b.x && a.y == b.y && a.w == b.w && a.h == b.h,
        _ => false,
    }
}

pub fn point_in_frect(p: &SDL_FPoint, r: &SDL_FRect) -> bool {
    p.x >= r.x && p.x < r.x + r.w && p.y >= r.y && p.y < r.y + r.h
}

pub fn frect_empty(r: Option<&SDL_FRect>) -> bool {
    r.map_or(true, |r| r.w <= 0.0 || r.h <= 0.0)
}

/// 各分量之差不超过 `epsilon` 即相等
pub fn frect_equals_epsilon(a: Option<&SDL_FRect>, b: Option<&SDL_FRect>, epsilon: f32) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            (a.x - b.x).abs() <= epsilon
                && (a.y - b.y).abs() <= epsilon
                && (a.w - b.w).abs() <= epsilon
                && (a.h - b.h).abs() <= epsilon
        }
        _ => false,
    }
}

pub fn frect_equals(a: Option<&SDL_FRect>, b: Option<&SDL_FRect>) -> bool {
    frect_equals_epsilon(a, b, f32::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const R: SDL_Rect = SDL_Rect { x: 10, y: 20, w: 30, h: 40 };

    #[test]
    fn test_edges() {
        assert!(point_in_rect(&SDL_Point { x: 10, y: 20 }, &R));
        assert!(point_in_rect(&SDL_Point { x: 39, y: 59 }, &R));
        assert!(!point_in_rect(&SDL_Point { x: 40, y: 20 }, &R));
        assert!(!point_in_rect(&SDL_Point { x: 10, y: 60 }, &R));
        assert!(!point_in_rect(&SDL_Point { x: 9, y: 20 }, &R));
    }

    #[test]
    fn test_empty() {
        assert!(rect_empty(None));
        assert!(rect_empty(Some(&SDL_Rect { x: 0, y: 0, w: 0, h: 5 })));
        assert!(rect_empty(Some(&SDL_Rect { x: 0, y: 0, w: 5, h: -1 })));
        assert!(!rect_empty(Some(&R)));
    }

    #[test]
    fn test_equals() {
        assert!(rect_equals(Some(&R), Some(&R)));
        assert!(!rect_equals(Some(&R), None));
        assert!(!rect_equals(None, None));
        assert!(!rect_equals(Some(&R), Some(&SDL_Rect { w: 31, ..R })));
    }

    #[test]
    fn test_float_variants() {
        let r = SDL_FRect { x: 0.0, y: 0.0, w: 1.0, h: 1.0 };
        assert!(point_in_frect(&SDL_FPoint { x: 0.0, y: 0.5 }, &r));
        assert!(!point_in_frect(&SDL_FPoint { x: 1.0, y: 0.5 }, &r));
        assert!(frect_empty(Some(&SDL_FRect { w: 0.0, ..r })));
        assert!(frect_empty(None));
        assert!(frect_equals(Some(&r), Some(&SDL_FRect { x: 1e-9, ..r })));
        assert!(!frect_equals(Some(&r), Some(&SDL_FRect { x: 0.01, ..r })));
        assert!(frect_equals_epsilon(Some(&r), Some(&SDL_FRect { x: 0.01, ..r }), 0.1));
        assert!(!frect_equals(None, Some(&r)));
    }

    proptest! {
        #[test]
        fn prop_no_overflow_at_extremes(x in any::<i32>(), y in any::<i32>(), w in any::<i32>(), h in any::<i32>()) {
            let r = SDL_Rect { x, y, w, h };
            let inside = point_in_rect(&SDL_Point { x, y }, &r);
            prop_assert_eq!(inside, w > 0 && h > 0);
        }
    }
}
