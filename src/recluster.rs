use tracing::trace;

use crate::array::SparseArray;
use crate::error::SparseArrayError;

impl<T: Clone + PartialEq> SparseArray<T> {
    // Copies through a temporary array in z/y/x order, draining self back to
    // def in the same pass so dense payloads are freed incrementally.
    pub fn change_block_size(&mut self, bs: usize) -> Result<(), SparseArrayError> {
        let mut staged = SparseArray::new(self.nx, self.ny, self.nz, bs, self.def.clone())?;

        for z in 0..self.nz {
            for y in 0..self.ny {
                for x in 0..self.nx {
                    let value = self.get(x, y, z).clone();
                    staged.set(x, y, z, value);
                    self.set(x, y, z, self.def.clone());
                }
            }
        }

        trace!(old_bs = self.grid.bs, new_bs = bs, "reclustered");
        self.grid = staged.grid;
        self.slots = staged.slots;
        Ok(())
    }
}
