use std::collections::HashMap;

use biofilm_numerical::Vec2;

/// Uniform grid hash over particle centres.
///
/// Particles are binned by `(floor(x/s), floor(y/s))` where the spacing `s` equals the
/// neighbour cutoff of the force kernels. After a [`rebuild()`](GridHash::rebuild), any
/// two points closer than `s` are guaranteed to see each other through the 3x3 tile
/// block enumerated by [`for_each_neighbor()`](GridHash::for_each_neighbor).
///
/// The index is rebuilt once per tick, after the membership changes have been merged,
/// and is read-only for the rest of the tick.
pub struct GridHash {
    spacing: f64,
    bins: HashMap<(i32, i32), Vec<usize>>,
}

impl GridHash {
    pub fn new(spacing: f64) -> GridHash {
        assert!(spacing > 0.0, "grid hash spacing must be positive");
        GridHash { spacing, bins: HashMap::new() }
    }

    /// Provides the bin spacing, equal to the neighbour cutoff radius
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    fn bin_of(&self, x: f64, y: f64) -> (i32, i32) {
        ((x / self.spacing).floor() as i32, (y / self.spacing).floor() as i32)
    }

    /// Clears and refills all bins from the given positions; O(N).
    ///
    /// Bin vectors are kept between rebuilds so a steadily growing colony does not
    /// reallocate them every tick.
    pub fn rebuild(&mut self, positions: &[Vec2]) {
        for bin in self.bins.values_mut() {
            bin.clear();
        }
        for (i, p) in positions.iter().enumerate() {
            let key = self.bin_of(p.x, p.y);
            self.bins.entry(key).or_insert_with(Vec::new).push(i);
        }
    }

    /// Enumerates the indices stored in the 3x3 tile block around a given centre.
    ///
    /// The particle that owns `centre` is enumerated as well; callers must skip
    /// their own index.
    pub fn for_each_neighbor<F: FnMut(usize)>(&self, centre: &Vec2, mut action: F) {
        let (bx, by) = self.bin_of(centre.x, centre.y);
        for ix in bx - 1..=bx + 1 {
            for iy in by - 1..=by + 1 {
                if let Some(bin) = self.bins.get(&(ix, iy)) {
                    for &j in bin {
                        action(j);
                    }
                }
            }
        }
    }

    /// Enumerates the indices stored in every tile whose block intersects the disk of
    /// radius `r` centred at `(x, y)`; the tile half-width is `ceil(r/s)`.
    pub fn for_each_within<F: FnMut(usize)>(&self, x: f64, y: f64, r: f64, mut action: F) {
        let (bx, by) = self.bin_of(x, y);
        let reach = (r / self.spacing).ceil() as i32;
        for ix in bx - reach..=bx + reach {
            for iy in by - reach..=by + reach {
                if let Some(bin) = self.bins.get(&(ix, iy)) {
                    for &j in bin {
                        action(j);
                    }
                }
            }
        }
    }
}
