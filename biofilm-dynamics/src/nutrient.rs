use rayon::prelude::*;

/// Nutrient concentration on a regular 2D grid.
///
/// The field diffuses by an explicit finite-difference scheme and is consumed by
/// cells at a Monod-limited rate proportional to the cell area accumulated at each
/// node. Boundaries follow a no-flux rule: after every step the outermost layer
/// mirrors the first interior layer, so no nutrient leaves the domain. Two buffers
/// are swapped each step to keep reads and writes disjoint.
///
/// Stability of the explicit scheme requires
/// `dt <= 0.25 * min(dx, dy)^2 / diffusion`; the bound is documented guidance and
/// is not enforced here.
pub struct NutrientField {
    width: usize,
    height: usize,
    dx: f64,
    dy: f64,
    diffusion: f64,
    consumption: f64,
    conc: Vec<f64>,
    next: Vec<f64>,
    area: Vec<f64>,
}

impl NutrientField {
    /// Creates a field of `width x height` nodes filled with the initial concentration `c0`
    pub fn new(width: usize, height: usize, dx: f64, dy: f64,
            diffusion: f64, consumption: f64, c0: f64) -> NutrientField {
        assert!(width >= 2 && height >= 2, "the nutrient grid needs at least 2x2 nodes");
        NutrientField {
            width,
            height,
            dx,
            dy,
            diffusion,
            consumption,
            conc: vec![c0; width * height],
            next: vec![0.0; width * height],
            area: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn at(&self, i: usize, j: usize) -> usize {
        j * self.width + i
    }

    /// Maps a physical position to its nearest grid node, or `None` outside the grid
    pub fn node_of(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let i = (x / self.dx).round();
        let j = (y / self.dy).round();
        if i < 0.0 || j < 0.0 || i >= self.width as f64 || j >= self.height as f64 {
            return None;
        }
        return Some((i as usize, j as usize));
    }

    /// Concentration stored at a given node
    pub fn concentration_at(&self, i: usize, j: usize) -> f64 {
        self.conc[self.at(i, j)]
    }

    /// Monod factor `C / (1 + C)` sampled at the node nearest to `(x, y)`;
    /// positions outside the grid sense no nutrient and get `0`
    pub fn monod_at(&self, x: f64, y: f64) -> f64 {
        match self.node_of(x, y) {
            Some((i, j)) => {
                let c = self.conc[self.at(i, j)];
                c / (1.0 + c)
            }
            None => 0.0,
        }
    }

    /// Overwrites the concentration at a given node, e.g. to set up a custom
    /// initial condition
    pub fn set_concentration_at(&mut self, i: usize, j: usize, c: f64) {
        let idx = self.at(i, j);
        self.conc[idx] = c;
    }

    /// Sum of the concentration over all nodes
    pub fn total_concentration(&self) -> f64 {
        self.conc.iter().sum()
    }

    /// Zeroes the per-node cell area accumulator; called once per tick before
    /// [`accumulate_area()`](NutrientField::accumulate_area)
    pub fn clear_areas(&mut self) {
        self.area.iter_mut().for_each(|a| *a = 0.0);
    }

    /// Adds a cell's area to the node nearest to its centre; positions outside
    /// the grid are skipped
    pub fn accumulate_area(&mut self, x: f64, y: f64, cell_area: f64) {
        if let Some((i, j)) = self.node_of(x, y) {
            let idx = self.at(i, j);
            self.area[idx] += cell_area;
        }
    }

    /// Advances the field by one explicit step: diffusion plus Monod-limited
    /// consumption on the interior, the no-flux mirror on the boundary, then the
    /// buffer swap. Interior rows are updated in parallel; the source buffer is
    /// read-only throughout.
    pub fn step(&mut self, dt: f64) {
        let w = self.width;
        let h = self.height;
        let inv_dx2 = 1.0 / (self.dx * self.dx);
        let inv_dy2 = 1.0 / (self.dy * self.dy);
        let d = self.diffusion;
        let r = self.consumption;
        let conc = &self.conc;
        let area = &self.area;

        self.next.par_chunks_mut(w).enumerate().for_each(|(j, row)| {
            if j == 0 {
                // bottom boundary mirrors the first interior row
                for i in 0..w {
                    row[i] = conc[w + i];
                }
            } else if j == h - 1 {
                for i in 0..w {
                    row[i] = conc[(h - 2) * w + i];
                }
            } else {
                for i in 1..w - 1 {
                    let idx = j * w + i;
                    let c = conc[idx];
                    let lap = (conc[idx + 1] - 2.0 * c + conc[idx - 1]) * inv_dx2
                        + (conc[idx + w] - 2.0 * c + conc[idx - w]) * inv_dy2;
                    let consumed = r * area[idx] * c / (1.0 + c);
                    row[i] = (c + dt * (d * lap - consumed)).max(0.0);
                }
                // left and right boundaries mirror the first interior column
                row[0] = conc[j * w + 1];
                row[w - 1] = conc[j * w + w - 2];
            }
        });

        // the corner nodes follow the column rule
        self.next[0] = conc[1];
        self.next[w - 1] = conc[w - 2];
        self.next[(h - 1) * w] = conc[(h - 1) * w + 1];
        self.next[h * w - 1] = conc[h * w - 2];

        std::mem::swap(&mut self.conc, &mut self.next);
    }
}
