use std::mem::size_of;

use tracing::debug;

use crate::array::SparseArray;
use crate::error::SparseArrayError;
use crate::index::BlockGrid;

// The original C source declares ten candidates but iterates only the first
// six; the trailing four are dead and are not carried over here.
const BLOCK_SIZE_CANDIDATES: [usize; 6] = [2, 3, 4, 6, 8, 10];

fn header_bytes<T>() -> f64 {
    (8 * size_of::<usize>() + size_of::<T>()) as f64
}

impl<T: Clone + PartialEq> SparseArray<T> {
    pub fn memory(&self) -> f64 {
        let blocks = self.slots.len() as f64;
        let mut size = header_bytes::<T>();
        size += blocks * size_of::<T>() as f64;
        size += blocks * size_of::<usize>() as f64;
        for slot in &self.slots {
            if let Some(len) = slot.dense_payload_len() {
                size += (size_of::<T>() * len) as f64;
            }
        }
        size
    }

    pub fn memory_with_block_size(&self, bs_alt: usize) -> Result<f64, SparseArrayError> {
        if bs_alt == self.grid.bs {
            return Ok(self.memory());
        }

        let grid = BlockGrid::new(self.nx, self.ny, self.nz, bs_alt)?;
        let blocks = grid.block_count() as f64;
        let mut size = header_bytes::<T>();
        size += blocks * size_of::<T>() as f64;
        size += blocks * size_of::<usize>() as f64;

        for k1 in 0..grid.mz {
            for j1 in 0..grid.my {
                for i1 in 0..grid.mx {
                    if !self.virtual_block_is_uniform(&grid, i1, j1, k1) {
                        size += (size_of::<T>() * grid.bs3()) as f64;
                    }
                }
            }
        }

        Ok(size)
    }

    fn virtual_block_is_uniform(&self, grid: &BlockGrid, i1: usize, j1: usize, k1: usize) -> bool {
        let bs = grid.bs;
        let reference = self.get(i1 * bs, j1 * bs, k1 * bs);
        for k in k1 * bs..(k1 + 1) * bs {
            if k >= self.nz {
                continue;
            }
            for j in j1 * bs..(j1 + 1) * bs {
                if j >= self.ny {
                    continue;
                }
                for i in i1 * bs..(i1 + 1) * bs {
                    if i >= self.nx {
                        continue;
                    }
                    if self.get(i, j, k) != reference {
                        return false;
                    }
                }
            }
        }
        true
    }

    pub fn optimize_block_size(&mut self) {
        let mut best_bs = BLOCK_SIZE_CANDIDATES[0];
        let mut best_memory = self
            .memory_with_block_size(best_bs)
            .expect("candidate block sizes are always valid");

        for &candidate in &BLOCK_SIZE_CANDIDATES[1..] {
            let candidate_memory = self
                .memory_with_block_size(candidate)
                .expect("candidate block sizes are always valid");
            if candidate_memory < best_memory {
                best_bs = candidate;
                best_memory = candidate_memory;
            }
        }

        debug!(chosen_bs = best_bs, memory = best_memory, "optimize_block_size");
        self.change_block_size(best_bs)
            .expect("candidate block sizes are always valid");
    }
}
