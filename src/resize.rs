use tracing::trace;

use crate::array::SparseArray;
use crate::block::BlockSlot;
use crate::error::SparseArrayError;
use crate::index::{ceil_div, BlockGrid};

impl<T: Clone + PartialEq> SparseArray<T> {
    // Each axis gets its own copy loop (not one parametrized over axis)
    // since the slot-linearization stride differs per axis.
    pub fn resize(&mut self, nx: usize, ny: usize, nz: usize) -> Result<(), SparseArrayError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(SparseArrayError::InvalidShape { nx, ny, nz });
        }

        if nx != self.nx {
            self.resize_x(nx);
        }
        if ny != self.ny {
            self.resize_y(ny);
        }
        if nz != self.nz {
            self.resize_z(nz);
        }
        Ok(())
    }

    fn resize_x(&mut self, new_nx: usize) {
        let bs = self.grid.bs;
        let (old_mx, my, mz) = (self.grid.mx, self.grid.my, self.grid.mz);
        let new_mx = ceil_div(new_nx, bs);
        let grew = new_nx > self.nx;

        let mut old_slots = std::mem::take(&mut self.slots);
        let mut new_slots: Vec<BlockSlot<T>> =
            vec![BlockSlot::Uniform(self.def.clone()); new_mx * my * mz];

        let survive_mx = old_mx.min(new_mx);
        for k in 0..mz {
            for j in 0..my {
                for i in 0..survive_mx {
                    let old_idx = i + old_mx * (j + my * k);
                    let new_idx = i + new_mx * (j + my * k);
                    new_slots[new_idx] =
                        std::mem::replace(&mut old_slots[old_idx], BlockSlot::Uniform(self.def.clone()));
                }
            }
        }
        drop(old_slots); // frees any excess dense payloads on shrink

        let old_nx = self.nx;
        self.nx = new_nx;
        self.grid = BlockGrid {
            mx: new_mx,
            my,
            mz,
            bs,
        };
        self.slots = new_slots;

        if grew {
            let sliver_end = (bs * old_mx).min(new_nx);
            for z in 0..self.nz {
                for y in 0..self.ny {
                    for x in old_nx..sliver_end {
                        self.set(x, y, z, self.def.clone());
                    }
                }
            }
        }
        trace!(old_nx, new_nx, "resized x axis");
    }

    fn resize_y(&mut self, new_ny: usize) {
        let bs = self.grid.bs;
        let (mx, old_my, mz) = (self.grid.mx, self.grid.my, self.grid.mz);
        let new_my = ceil_div(new_ny, bs);
        let grew = new_ny > self.ny;

        let mut old_slots = std::mem::take(&mut self.slots);
        let mut new_slots: Vec<BlockSlot<T>> =
            vec![BlockSlot::Uniform(self.def.clone()); mx * new_my * mz];

        let survive_my = old_my.min(new_my);
        for k in 0..mz {
            for j in 0..survive_my {
                for i in 0..mx {
                    let old_idx = i + mx * (j + old_my * k);
                    let new_idx = i + mx * (j + new_my * k);
                    new_slots[new_idx] =
                        std::mem::replace(&mut old_slots[old_idx], BlockSlot::Uniform(self.def.clone()));
                }
            }
        }
        drop(old_slots);

        let old_ny = self.ny;
        self.ny = new_ny;
        self.grid = BlockGrid {
            mx,
            my: new_my,
            mz,
            bs,
        };
        self.slots = new_slots;

        if grew {
            let sliver_end = (bs * old_my).min(new_ny);
            for z in 0..self.nz {
                for y in old_ny..sliver_end {
                    for x in 0..self.nx {
                        self.set(x, y, z, self.def.clone());
                    }
                }
            }
        }
        trace!(old_ny, new_ny, "resized y axis");
    }

    fn resize_z(&mut self, new_nz: usize) {
        let bs = self.grid.bs;
        let (mx, my, old_mz) = (self.grid.mx, self.grid.my, self.grid.mz);
        let new_mz = ceil_div(new_nz, bs);
        let grew = new_nz > self.nz;

        let mut old_slots = std::mem::take(&mut self.slots);
        let mut new_slots: Vec<BlockSlot<T>> =
            vec![BlockSlot::Uniform(self.def.clone()); mx * my * new_mz];

        let survive_mz = old_mz.min(new_mz);
        for k in 0..survive_mz {
            for j in 0..my {
                for i in 0..mx {
                    let old_idx = i + mx * (j + my * k);
                    let new_idx = i + mx * (j + my * k);
                    new_slots[new_idx] =
                        std::mem::replace(&mut old_slots[old_idx], BlockSlot::Uniform(self.def.clone()));
                }
            }
        }
        drop(old_slots);

        let old_nz = self.nz;
        self.nz = new_nz;
        self.grid = BlockGrid {
            mx,
            my,
            mz: new_mz,
            bs,
        };
        self.slots = new_slots;

        if grew {
            let sliver_end = (bs * old_mz).min(new_nz);
            for z in old_nz..sliver_end {
                for y in 0..self.ny {
                    for x in 0..self.nx {
                        self.set(x, y, z, self.def.clone());
                    }
                }
            }
        }
        trace!(old_nz, new_nz, "resized z axis");
    }
}
