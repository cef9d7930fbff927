use crate::block::BlockSlot;
use crate::index::{BlockCoord, BlockGrid};

// Inner blocks compare every element against the last payload element;
// boundary blocks compare only in-range elements against the first, which is
// always in-range since i1 * bs <= x for every x in the block.
pub(crate) fn is_uniform<T: PartialEq>(
    slot: &BlockSlot<T>,
    grid: &BlockGrid,
    coord: BlockCoord,
    nx: usize,
    ny: usize,
    nz: usize,
) -> bool {
    let payload = match slot {
        BlockSlot::Uniform(_) => return true,
        BlockSlot::Dense(payload) => payload,
    };

    let bs = grid.bs;
    if grid.is_inner(coord) {
        let reference = &payload[grid.bs3() - 1];
        payload.iter().all(|v| v == reference)
    } else {
        let reference = &payload[0];
        for k in 0..bs {
            let z = coord.k1 * bs + k;
            if z >= nz {
                continue;
            }
            for j in 0..bs {
                let y = coord.j1 * bs + j;
                if y >= ny {
                    continue;
                }
                for i in 0..bs {
                    let x = coord.i1 * bs + i;
                    if x >= nx {
                        continue;
                    }
                    let offset = grid.offset_index(crate::index::Offset {
                        i2: i,
                        j2: j,
                        k2: k,
                    });
                    if &payload[offset] != reference {
                        return false;
                    }
                }
            }
        }
        true
    }
}
