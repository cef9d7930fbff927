use tracing::trace;

use crate::block::BlockSlot;
use crate::error::SparseArrayError;
use crate::index::BlockGrid;

/// A compressed in-memory sparse 3D array over `T`, tiled by a grid of
/// cubic blocks that are stored either `Uniform` or `Dense`.
#[derive(Debug, Clone)]
pub struct SparseArray<T> {
    pub(crate) nx: usize,
    pub(crate) ny: usize,
    pub(crate) nz: usize,
    pub(crate) grid: BlockGrid,
    pub(crate) def: T,
    pub(crate) slots: Vec<BlockSlot<T>>,
}

impl<T: Clone + PartialEq> SparseArray<T> {
    pub fn new(
        nx: usize,
        ny: usize,
        nz: usize,
        bs: usize,
        def: T,
    ) -> Result<Self, SparseArrayError> {
        let grid = BlockGrid::new(nx, ny, nz, bs)?;
        let slots = vec![BlockSlot::Uniform(def.clone()); grid.block_count()];
        trace!(nx, ny, nz, bs, blocks = slots.len(), "allocated sparse array");
        Ok(SparseArray {
            nx,
            ny,
            nz,
            grid,
            def,
            slots,
        })
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    pub fn block_size(&self) -> usize {
        self.grid.bs
    }

    pub fn default_value(&self) -> &T {
        &self.def
    }

    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.compact_to(self.def.clone());
        }
        trace!(blocks = self.slots.len(), "reset sparse array");
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> &T {
        debug_assert!(x < self.nx && y < self.ny && z < self.nz);
        let (coord, offset) = self.grid.split(x, y, z);
        let n = self.grid.slot_index(coord);
        let o = self.grid.offset_index(offset);
        self.slots[n].get(o)
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        debug_assert!(x < self.nx && y < self.ny && z < self.nz);
        let (coord, offset) = self.grid.split(x, y, z);
        let n = self.grid.slot_index(coord);
        let o = self.grid.offset_index(offset);
        let bs3 = self.grid.bs3();

        let became_dense = self.slots[n].write(o, bs3, value.clone());
        if became_dense {
            if crate::uniformity::is_uniform(&self.slots[n], &self.grid, coord, self.nx, self.ny, self.nz)
            {
                trace!(n, "compacting block");
                self.slots[n].compact_to(value);
            }
        }
    }

    pub fn duplicate(&self) -> Self {
        SparseArray {
            nx: self.nx,
            ny: self.ny,
            nz: self.nz,
            grid: self.grid,
            def: self.def.clone(),
            slots: self.slots.clone(),
        }
    }
}
