use std::collections::HashSet;

use super::levels::MAX_LEVEL;
use super::types::{FieldSize, Point};

/// Distance kept between full-length bars and the board edge.
pub const EDGE_MARGIN: i32 = 5;

/// Position of a bar across its own axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// `dimension * num / den`, rounded down.
    Fraction(i32, i32),
    /// Grid center plus an offset.
    CenterOffset(i32),
}

/// Extent of a bar along its own axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    /// `[EDGE_MARGIN, dimension - EDGE_MARGIN)`
    Margins,
    /// `[center - half, center + half]`
    AroundCenter(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WedgeAnchor {
    /// Anchored `inset` cells in from each board corner.
    Edges { inset: i32 },
    /// Anchored `distance` cells diagonally out from the center.
    Center { distance: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WedgeFacing {
    /// Right angle at the anchor row's far end, hypotenuse facing the corner.
    Inward,
    /// Right angle at the anchor, hypotenuse facing the board interior.
    Outward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstaclePattern {
    Empty,
    HorizontalBar { row: Line, span: Span },
    VerticalBar { column: Line, span: Span },
    Triangle { rows: i32, offset_x: i32, top_offset_y: i32 },
    Disc { radius: i32, offset_x: i32 },
    SquareRing { half_size: i32 },
    CornerBlocks { size: i32, inset: i32 },
    Wedges { anchor: WedgeAnchor, facing: WedgeFacing, size: i32 },
    BarCluster { grid: i32, spacing: i32, bar_length: i32 },
    Composite(&'static [ObstaclePattern]),
}

use ObstaclePattern::*;

const WEDGE_SIZE: i32 = 3;

const LEVEL_PATTERNS: [ObstaclePattern; MAX_LEVEL as usize] = [
    // 1
    Empty,
    // 2
    Composite(&[
        HorizontalBar { row: Line::Fraction(1, 3), span: Span::Margins },
        HorizontalBar { row: Line::Fraction(2, 3), span: Span::Margins },
    ]),
    // 3
    Composite(&[
        HorizontalBar { row: Line::Fraction(1, 4), span: Span::Margins },
        HorizontalBar { row: Line::Fraction(1, 2), span: Span::Margins },
        HorizontalBar { row: Line::Fraction(3, 4), span: Span::Margins },
    ]),
    // 4
    VerticalBar { column: Line::Fraction(1, 2), span: Span::Margins },
    // 5
    Composite(&[
        VerticalBar { column: Line::Fraction(1, 3), span: Span::Margins },
        VerticalBar { column: Line::Fraction(2, 3), span: Span::Margins },
    ]),
    // 6
    Composite(&[
        VerticalBar { column: Line::Fraction(1, 4), span: Span::Margins },
        VerticalBar { column: Line::Fraction(1, 2), span: Span::Margins },
        VerticalBar { column: Line::Fraction(3, 4), span: Span::Margins },
    ]),
    // 7
    Triangle { rows: 5, offset_x: 0, top_offset_y: -2 },
    // 8
    Disc { radius: 4, offset_x: 0 },
    // 9
    SquareRing { half_size: 5 },
    // 10
    CornerBlocks { size: 2, inset: 3 },
    // 11
    Composite(&[
        Triangle { rows: 3, offset_x: -5, top_offset_y: -4 },
        Triangle { rows: 3, offset_x: 0, top_offset_y: -4 },
        Triangle { rows: 3, offset_x: 5, top_offset_y: -4 },
    ]),
    // 12
    Composite(&[
        Disc { radius: 2, offset_x: -6 },
        Disc { radius: 2, offset_x: 0 },
        Disc { radius: 2, offset_x: 6 },
    ]),
    // 13
    Composite(&[
        HorizontalBar { row: Line::CenterOffset(0), span: Span::Margins },
        Wedges {
            anchor: WedgeAnchor::Edges { inset: EDGE_MARGIN },
            facing: WedgeFacing::Inward,
            size: WEDGE_SIZE,
        },
    ]),
    // 14
    Composite(&[
        VerticalBar { column: Line::CenterOffset(0), span: Span::Margins },
        Wedges {
            anchor: WedgeAnchor::Edges { inset: EDGE_MARGIN },
            facing: WedgeFacing::Outward,
            size: WEDGE_SIZE,
        },
    ]),
    // 15
    HorizontalBar { row: Line::CenterOffset(0), span: Span::Margins },
    // 16
    Composite(&[
        SquareRing { half_size: 1 },
        HorizontalBar { row: Line::CenterOffset(-3), span: Span::AroundCenter(5) },
        HorizontalBar { row: Line::CenterOffset(3), span: Span::AroundCenter(5) },
        VerticalBar { column: Line::CenterOffset(-3), span: Span::AroundCenter(5) },
        VerticalBar { column: Line::CenterOffset(3), span: Span::AroundCenter(5) },
    ]),
    // 17
    Composite(&[
        HorizontalBar { row: Line::CenterOffset(-5), span: Span::AroundCenter(7) },
        HorizontalBar { row: Line::CenterOffset(5), span: Span::AroundCenter(7) },
        VerticalBar { column: Line::CenterOffset(-5), span: Span::AroundCenter(5) },
        VerticalBar { column: Line::CenterOffset(5), span: Span::AroundCenter(5) },
    ]),
    // 18
    Composite(&[
        Disc { radius: 2, offset_x: 0 },
        Wedges {
            anchor: WedgeAnchor::Edges { inset: EDGE_MARGIN },
            facing: WedgeFacing::Inward,
            size: WEDGE_SIZE,
        },
    ]),
    // 19
    Wedges {
        anchor: WedgeAnchor::Center { distance: 4 },
        facing: WedgeFacing::Outward,
        size: WEDGE_SIZE,
    },
    // 20
    Composite(&[
        HorizontalBar { row: Line::CenterOffset(0), span: Span::AroundCenter(5) },
        VerticalBar { column: Line::CenterOffset(0), span: Span::AroundCenter(5) },
    ]),
    // 21
    BarCluster { grid: 3, spacing: 4, bar_length: 3 },
];

/// Levels outside `1..=MAX_LEVEL` have no obstacles.
pub fn pattern_for_level(level: u32) -> &'static ObstaclePattern {
    match level {
        1..=MAX_LEVEL => &LEVEL_PATTERNS[(level - 1) as usize],
        _ => &LEVEL_PATTERNS[0],
    }
}

/// Obstacle layout for a level. Cells that would fall off a small board are dropped.
pub fn generate(level: u32, field: FieldSize) -> HashSet<Point> {
    pattern_for_level(level).cells(field)
}

struct PatternCanvas {
    field: FieldSize,
    center: Point,
    cells: HashSet<Point>,
}

impl PatternCanvas {
    fn mark(&mut self, x: i32, y: i32) {
        let point = Point::new(x, y);
        if self.field.contains(point) {
            self.cells.insert(point);
        }
    }

    fn width(&self) -> i32 {
        self.field.width as i32
    }

    fn height(&self) -> i32 {
        self.field.height as i32
    }
}

impl Line {
    fn resolve(&self, dimension: i32, center: i32) -> i32 {
        match *self {
            Line::Fraction(num, den) => dimension * num / den,
            Line::CenterOffset(offset) => center + offset,
        }
    }
}

impl Span {
    fn range(&self, dimension: i32, center: i32) -> std::ops::Range<i32> {
        match *self {
            Span::Margins => EDGE_MARGIN..dimension - EDGE_MARGIN,
            Span::AroundCenter(half) => center - half..center + half + 1,
        }
    }
}

impl ObstaclePattern {
    pub fn cells(&self, field: FieldSize) -> HashSet<Point> {
        let mut canvas = PatternCanvas {
            field,
            center: field.center(),
            cells: HashSet::new(),
        };
        self.draw(&mut canvas);
        canvas.cells
    }

    fn draw(&self, canvas: &mut PatternCanvas) {
        let (cx, cy) = (canvas.center.x, canvas.center.y);
        match *self {
            Empty => {}
            HorizontalBar { row, span } => {
                let y = row.resolve(canvas.height(), cy);
                for x in span.range(canvas.width(), cx) {
                    canvas.mark(x, y);
                }
            }
            VerticalBar { column, span } => {
                let x = column.resolve(canvas.width(), cx);
                for y in span.range(canvas.height(), cy) {
                    canvas.mark(x, y);
                }
            }
            Triangle { rows, offset_x, top_offset_y } => {
                for i in 0..rows {
                    for j in 0..=i {
                        canvas.mark(cx + offset_x - i + j * 2, cy + top_offset_y + i);
                    }
                }
            }
            Disc { radius, offset_x } => {
                let disc_x = cx + offset_x;
                for x in disc_x - radius..=disc_x + radius {
                    for y in cy - radius..=cy + radius {
                        let dx = x - disc_x;
                        let dy = y - cy;
                        if dx * dx + dy * dy <= radius * radius {
                            canvas.mark(x, y);
                        }
                    }
                }
            }
            SquareRing { half_size } => {
                for x in cx - half_size..=cx + half_size {
                    for y in cy - half_size..=cy + half_size {
                        let on_border = (x - cx).abs() == half_size || (y - cy).abs() == half_size;
                        if on_border {
                            canvas.mark(x, y);
                        }
                    }
                }
            }
            CornerBlocks { size, inset } => {
                let left = inset;
                let right = canvas.width() - 1 - inset;
                let top = inset;
                let bottom = canvas.height() - 1 - inset;
                for (corner_x, corner_y) in [(left, top), (left, bottom), (right, top), (right, bottom)] {
                    for x in corner_x..corner_x + size {
                        for y in corner_y..corner_y + size {
                            canvas.mark(x, y);
                        }
                    }
                }
            }
            Wedges { anchor, facing, size } => {
                let (left, top, right, bottom) = match anchor {
                    WedgeAnchor::Edges { inset } => (
                        inset,
                        inset,
                        canvas.width() - 1 - inset,
                        canvas.height() - 1 - inset,
                    ),
                    WedgeAnchor::Center { distance } => {
                        (cx - distance, cy - distance, cx + distance, cy + distance)
                    }
                };
                // (anchor x, anchor y, x step, y step), each pointing away from its corner
                let corners = [
                    (left, top, 1, 1),
                    (right, top, -1, 1),
                    (left, bottom, 1, -1),
                    (right, bottom, -1, -1),
                ];
                for (ax, ay, sx, sy) in corners {
                    for i in 0..size {
                        let row_len = match facing {
                            WedgeFacing::Inward => i,
                            WedgeFacing::Outward => size - 1 - i,
                        };
                        for j in 0..=row_len {
                            canvas.mark(ax + sx * j, ay + sy * i);
                        }
                    }
                }
            }
            BarCluster { grid, spacing, bar_length } => {
                let origin_offset = spacing * (grid / 2);
                for i in 0..grid {
                    for j in 0..grid {
                        let start_x = cx - origin_offset + i * spacing;
                        let start_y = cy - origin_offset + j * spacing;
                        for k in 0..bar_length {
                            canvas.mark(start_x + k, start_y);
                        }
                    }
                }
            }
            Composite(parts) => {
                for part in parts {
                    part.draw(canvas);
                }
            }
        }
    }
}
