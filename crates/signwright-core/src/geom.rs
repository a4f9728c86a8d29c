//! Box model in h-space (1 unit = one nominal letter height).
//!
//! Every operation is pure: inputs are taken by reference or by value and a new box is returned.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in h-space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl HBox {
    /// Creates an unpositioned box. Negative sizes are clamped to zero.
    pub fn new(w: f64, h: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    pub fn with_position(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    /// Finite position and strictly positive, finite size.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
    /// Resolved like `Bottom`; boxes carry no baseline information at this level.
    Baseline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    #[serde(default)]
    pub h: HAlign,
    #[serde(default)]
    pub v: VAlign,
}

impl Alignment {
    pub const CENTER: Self = Self {
        h: HAlign::Center,
        v: VAlign::Middle,
    };
}

/// Children positioned by a stacking operation, together with the stack's own size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stack {
    pub w: f64,
    pub h: f64,
    pub children: Vec<HBox>,
}

impl Stack {
    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }
}

pub fn stack_vertical(children: &[HBox], gap: f64) -> Stack {
    let mut positioned = Vec::with_capacity(children.len());
    let mut y = 0.0;
    let mut max_w: f64 = 0.0;
    for (i, child) in children.iter().enumerate() {
        positioned.push(child.with_position(0.0, y));
        max_w = max_w.max(child.w);
        y += child.h;
        if i + 1 < children.len() {
            y += gap;
        }
    }
    Stack {
        w: max_w,
        h: y,
        children: positioned,
    }
}

pub fn stack_horizontal(children: &[HBox], gap: f64) -> Stack {
    let mut positioned = Vec::with_capacity(children.len());
    let mut x = 0.0;
    let mut max_h: f64 = 0.0;
    for (i, child) in children.iter().enumerate() {
        positioned.push(child.with_position(x, 0.0));
        max_h = max_h.max(child.h);
        x += child.w;
        if i + 1 < children.len() {
            x += gap;
        }
    }
    Stack {
        w: x,
        h: max_h,
        children: positioned,
    }
}

/// Positions `child` inside a parent of `parent` size.
pub fn align(child: &HBox, parent: Size, alignment: Alignment) -> HBox {
    let x = match alignment.h {
        HAlign::Left => 0.0,
        HAlign::Center => (parent.w - child.w) / 2.0,
        HAlign::Right => parent.w - child.w,
    };
    let y = match alignment.v {
        VAlign::Top => 0.0,
        VAlign::Middle => (parent.h - child.h) / 2.0,
        VAlign::Bottom | VAlign::Baseline => parent.h - child.h,
    };
    child.with_position(x, y)
}

pub fn center(child: &HBox, parent: Size) -> HBox {
    align(child, parent, Alignment::CENTER)
}

pub fn max_width(children: &[HBox]) -> f64 {
    children.iter().map(|c| c.w).fold(0.0, f64::max)
}

pub fn sum_heights(children: &[HBox], gap: f64) -> f64 {
    if children.is_empty() {
        return 0.0;
    }
    let total: f64 = children.iter().map(|c| c.h).sum();
    total + (children.len() - 1) as f64 * gap
}

/// Content size inflated by `pad` on every side.
pub fn board_size(content_w: f64, content_h: f64, pad: f64) -> Size {
    Size {
        w: content_w + 2.0 * pad,
        h: content_h + 2.0 * pad,
    }
}
