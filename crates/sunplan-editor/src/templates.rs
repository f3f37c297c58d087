//! Preset building outlines.
//!
//! Every preset is generated inside a `size × size` box (the rectangle
//! preset is `1.5·size × 0.75·size`) whose bounding box is centred on the
//! requested point.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use sunplan_core::Point;

/// Shapes offered by the template tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Square,
    Rectangle,
    /// Six-vertex L with the notch in the top-right quadrant.
    LShape,
    /// Regular octagon.
    Tower,
    /// Eight-vertex U opening upwards.
    UShape,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Square,
        TemplateKind::Rectangle,
        TemplateKind::LShape,
        TemplateKind::Tower,
        TemplateKind::UShape,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Square => "square",
            TemplateKind::Rectangle => "rectangle",
            TemplateKind::LShape => "l-shape",
            TemplateKind::Tower => "tower",
            TemplateKind::UShape => "u-shape",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

/// Builds the preset polygon for `kind` centred on `center`.
pub fn create_template_shape(center: Point, kind: TemplateKind, size: f64) -> Vec<Point> {
    let h = size / 2.0;
    let local: Vec<(f64, f64)> = match kind {
        TemplateKind::Square => vec![(-h, -h), (h, -h), (h, h), (-h, h)],
        TemplateKind::Rectangle => {
            let (hw, hh) = (0.75 * size, 0.375 * size);
            vec![(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
        }
        TemplateKind::LShape => vec![
            (-h, -h),
            (0.0, -h),
            (0.0, 0.0),
            (h, 0.0),
            (h, h),
            (-h, h),
        ],
        TemplateKind::Tower => (0..8)
            .map(|i| {
                let angle = PI / 8.0 + i as f64 * PI / 4.0;
                (h * angle.cos(), h * angle.sin())
            })
            .collect(),
        TemplateKind::UShape => {
            let t = h / 3.0;
            vec![
                (-h, -h),
                (-t, -h),
                (-t, 0.0),
                (t, 0.0),
                (t, -h),
                (h, -h),
                (h, h),
                (-h, h),
            ]
        }
    };

    local
        .into_iter()
        .map(|(x, y)| Point::new(center.x + x, center.y + y))
        .collect()
}
