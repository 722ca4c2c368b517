use serde_json::json;

use super::*;

#[test]
fn parses_all_shape_kinds() {
    let scene = Scene::from_json_str(
        &json!({
            "canvas": { "width": 16, "height": 16 },
            "background": "#202020",
            "shapes": [
                { "rect": { "x": 1, "y": 1, "w": 3, "h": -3, "color": "#ff0000" } },
                { "circle": { "cx": 8, "cy": 8, "r": 3, "color": "#00ff0080" } },
                { "line": { "x1": 0, "y1": 15, "x2": 15, "y2": 0, "color": 4294967295u32 } },
                { "triangle": { "x1": 0, "y1": 0, "x2": 5, "y2": 0, "x3": 0, "y3": 5, "color": [0, 0, 255, 255] } },
                { "subcanvas": { "x": 10, "y": 10, "w": 10, "h": 10, "shapes": [ { "clear": {} } ] } },
                { "fill": { "color": "#000000ff" } }
            ]
        })
        .to_string(),
    )
    .unwrap();
    assert_eq!(scene.background, Some(Color(0xFF202020)));
    assert_eq!(scene.shapes.len(), 6);
    assert!(matches!(scene.shapes[4], Shape::Subcanvas { ref shapes, .. } if shapes.len() == 1));
}

#[test]
fn rejects_unknown_top_level_fields_and_bad_colors() {
    let err = Scene::from_json_str(r##"{"canvas":{"width":4,"height":4},"bg":"#fff"}"##).unwrap_err();
    assert!(matches!(err, RasterError::Scene(_)));

    let err = Scene::from_json_str(
        r##"{"canvas":{"width":4,"height":4},"background":"#12"}"##,
    )
    .unwrap_err();
    assert!(err.to_string().contains("#RRGGBB"));
}

#[test]
fn validate_rejects_degenerate_and_huge_canvases() {
    for (w, h) in [(0, 4), (4, 0), (MAX_SCENE_DIM + 1, 1)] {
        let scene = Scene {
            canvas: SceneCanvas { width: w, height: h },
            background: None,
            shapes: vec![],
        };
        assert!(scene.validate().is_err(), "{w}x{h}");
        assert!(scene.render().is_err());
    }
}

#[test]
fn validate_rejects_deep_nesting() {
    let mut shapes = vec![];
    for _ in 0..=MAX_SCENE_NESTING {
        shapes = vec![Shape::Subcanvas {
            x: 0,
            y: 0,
            w: 2,
            h: 2,
            shapes,
        }];
    }
    let scene = Scene {
        canvas: SceneCanvas {
            width: 2,
            height: 2,
        },
        background: None,
        shapes,
    };
    assert!(scene.validate().is_err());
}

#[test]
fn render_applies_background_then_shapes() {
    let scene = Scene {
        canvas: SceneCanvas {
            width: 4,
            height: 4,
        },
        background: Some(Color(0xFF111111)),
        shapes: vec![Shape::Rect {
            x: 3,
            y: 3,
            w: -2,
            h: -2,
            color: Color(0xFF0000FF),
        }],
    };
    let frame = scene.render().unwrap();
    assert_eq!(frame.pixel(0, 0), Some(Color(0xFF111111)));
    assert_eq!(frame.pixel(2, 2), Some(Color(0xFF0000FF)));
    assert_eq!(frame.pixel(3, 3), Some(Color(0xFF0000FF)));
    assert_eq!(frame.pixel(1, 1), Some(Color(0xFF111111)));
}

#[test]
fn subcanvas_shapes_are_relative_and_clipped() {
    let scene = Scene {
        canvas: SceneCanvas {
            width: 6,
            height: 6,
        },
        background: None,
        shapes: vec![
            Shape::Subcanvas {
                x: 4,
                y: 4,
                w: 10,
                h: 10,
                shapes: vec![Shape::Fill {
                    color: Color(0xFFFFFFFF),
                }],
            },
            Shape::Subcanvas {
                x: 40,
                y: 0,
                w: 2,
                h: 2,
                shapes: vec![Shape::Fill {
                    color: Color(0xFF00FF00),
                }],
            },
        ],
    };
    let frame = scene.render().unwrap();
    let lit: Vec<usize> = (0..36).filter(|&i| frame.pixels()[i] != 0).collect();
    assert_eq!(lit, vec![28, 29, 34, 35]);
}

#[test]
fn scene_serializes_back_to_equivalent_json() {
    let scene = Scene {
        canvas: SceneCanvas {
            width: 3,
            height: 3,
        },
        background: None,
        shapes: vec![Shape::Clear {}],
    };
    let text = serde_json::to_string(&scene).unwrap();
    assert_eq!(Scene::from_json_str(&text).unwrap(), scene);
}
