/// Axis-aligned rectangle in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Tile {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }

    /// Corners in drawing order, for a closed polygon.
    pub fn corners(&self) -> Vec<[f64; 2]> {
        vec![
            [self.min[0], self.min[1]],
            [self.max[0], self.min[1]],
            [self.max[0], self.max[1]],
            [self.min[0], self.max[1]],
        ]
    }
}

/// Slice-and-dice treemap: cut `bounds` along its longer side into strips
/// whose areas are proportional to `values`. Non-positive values get an
/// empty strip so indices still line up with the input.
pub fn slice_layout(values: &[f64], bounds: Tile) -> Vec<Tile> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let horizontal = bounds.width() >= bounds.height();
    let mut cursor = if horizontal { bounds.min[0] } else { bounds.max[1] };

    values
        .iter()
        .map(|&v| {
            let share = v.max(0.0) / total;
            if horizontal {
                let next = cursor + share * bounds.width();
                let tile = Tile::new([cursor, bounds.min[1]], [next, bounds.max[1]]);
                cursor = next;
                tile
            } else {
                // Top to bottom, so the largest value sits on top.
                let next = cursor - share * bounds.height();
                let tile = Tile::new([bounds.min[0], next], [bounds.max[0], cursor]);
                cursor = next;
                tile
            }
        })
        .collect()
}
