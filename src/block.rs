/// The storage cell for one block of the grid: either a single value shared
/// by every in-range position, or an owned `bs^3`-element array indexed by
/// intra-block offset.
#[derive(Debug, Clone)]
pub(crate) enum BlockSlot<T> {
    Uniform(T),
    Dense(Box<[T]>),
}

impl<T: Clone> BlockSlot<T> {
    #[inline]
    pub fn get(&self, offset: usize) -> &T {
        match self {
            BlockSlot::Uniform(v) => v,
            BlockSlot::Dense(payload) => &payload[offset],
        }
    }

    #[inline]
    pub fn is_dense(&self) -> bool {
        matches!(self, BlockSlot::Dense(_))
    }

    pub fn dense_payload_len(&self) -> Option<usize> {
        match self {
            BlockSlot::Uniform(_) => None,
            BlockSlot::Dense(payload) => Some(payload.len()),
        }
    }
}

impl<T: Clone + PartialEq> BlockSlot<T> {
    // Expands Uniform into Dense on a diverging write. Returns whether the
    // slot is dense afterward.
    pub fn write(&mut self, offset: usize, bs3: usize, value: T) -> bool {
        match self {
            BlockSlot::Uniform(v) if *v == value => false,
            BlockSlot::Uniform(v) => {
                let mut payload = vec![v.clone(); bs3].into_boxed_slice();
                payload[offset] = value;
                *self = BlockSlot::Dense(payload);
                true
            }
            BlockSlot::Dense(payload) => {
                payload[offset] = value;
                true
            }
        }
    }

    pub fn compact_to(&mut self, value: T) {
        *self = BlockSlot::Uniform(value);
    }
}
